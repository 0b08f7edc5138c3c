use anyhow::Result;
use config::Config;
use std::env;

#[derive(Clone, serde::Deserialize)]
pub struct AppConfig {
    pub newsapi_url: String,
    pub newsapi_key: String,
    pub huggingface_api_url: String,
    pub huggingface_api_key: String,
    pub default_query: String,
    pub placeholder_image_url: String,
    pub countries: Vec<String>,
    pub categories: Vec<String>,
    pub page_size: Option<usize>,
    pub max_concurrent_requests: Option<usize>,
}

impl AppConfig {
    /// Валидация конфигурации
    pub fn validate(&self) -> Result<()> {
        if self.countries.is_empty() {
            return Err(anyhow::anyhow!("Country list cannot be empty"));
        }

        if self.categories.is_empty() {
            return Err(anyhow::anyhow!("Category list cannot be empty"));
        }

        if self.default_query.is_empty() {
            return Err(anyhow::anyhow!("Default query sentinel cannot be empty"));
        }

        if let Some(page_size) = self.page_size {
            if page_size == 0 || page_size > 100 {
                return Err(anyhow::anyhow!("page_size must be between 1 and 100"));
            }
        }

        if let Some(max_concurrent) = self.max_concurrent_requests {
            if max_concurrent == 0 || max_concurrent > 50 {
                return Err(anyhow::anyhow!("max_concurrent_requests must be between 1 and 50"));
            }
        }

        Ok(())
    }
}

pub fn load_config() -> Result<AppConfig> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(config::File::with_name("config"))
        .add_source(config::Environment::with_prefix("MODUS"))
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    config.newsapi_key = env::var("NEWS_API_KEY")
        .map_err(|_| anyhow::anyhow!("NEWS_API_KEY environment variable is required"))?;

    config.huggingface_api_key = env::var("HUGGINGFACE_API_KEY")
        .map_err(|_| anyhow::anyhow!("HUGGINGFACE_API_KEY environment variable is required"))?;

    config.validate()?;

    Ok(config)
}
