use reqwest::Client;
use serde_json::Value;

use crate::config::AppConfig;
use crate::errors::{MoodFeedError, Result};
use crate::holders::NewsArticleHolder;
use crate::models::NewsArticle;

#[derive(Clone)]
pub struct NewsCollectorService {
    client: Client,
    article_holder: NewsArticleHolder,
    config: AppConfig,
}

impl NewsCollectorService {
    pub fn new(article_holder: NewsArticleHolder, config: AppConfig) -> Self {
        NewsCollectorService {
            client: Client::new(),
            article_holder,
            config,
        }
    }

    /// Запрос-заглушка переводится в пустую строку поиска
    pub fn search_text<'a>(&self, query: &'a str) -> &'a str {
        if query == self.config.default_query {
            ""
        } else {
            query
        }
    }

    pub async fn collect_news(&self, query: &str, country: &str, category: &str) -> Result<usize> {
        self.article_holder.clear().await?;

        let search = self.search_text(query);
        let page_size = self.config.page_size.unwrap_or(100);

        let url = format!(
            "{}?q={}&country={}&category={}&pageSize={}&apiKey={}",
            self.config.newsapi_url,
            urlencoding::encode(search),
            country,
            category,
            page_size,
            self.config.newsapi_key
        );

        tracing::info!("Запрос заголовков: страна {}, категория {}", country, category);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Неизвестная ошибка".to_string());
            return Err(MoodFeedError::ApiError(format!(
                "NewsAPI error: {} - {}",
                status, error_text
            )));
        }

        let json: Value = response.json().await?;
        let articles = Self::parse_articles(&json)?;

        let added_count = articles.len();
        for article in articles {
            self.article_holder.add(article).await?;
        }

        tracing::info!("Собрано {} заголовков", added_count);
        Ok(added_count)
    }

    /// Пустой список articles — не ошибка, лента просто отсутствует.
    pub fn parse_articles(json: &Value) -> Result<Vec<NewsArticle>> {
        let articles = json["articles"].as_array().ok_or_else(|| {
            MoodFeedError::InvalidDataFormat("Отсутствует поле articles".to_string())
        })?;

        let mut collected = Vec::with_capacity(articles.len());
        for article in articles {
            collected.push(NewsArticle {
                title: article["title"].as_str().unwrap_or("").to_string(),
                content: article["description"].as_str().unwrap_or("").to_string(),
                url: article["url"].as_str().unwrap_or("").to_string(),
                image_url: article["urlToImage"].as_str().unwrap_or("").to_string(),
                mood: None,
                score: None,
            });
        }

        Ok(collected)
    }
}
