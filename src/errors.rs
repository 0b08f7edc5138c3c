// errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodFeedError {
    #[error("Ошибка HTTP запроса: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Ошибка парсинга JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Ошибка конфигурации: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Ошибка regex: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Некорректный формат данных: {0}")]
    InvalidDataFormat(String),

    #[error("API вернул ошибку: {0}")]
    ApiError(String),
}

// Определяем псевдоним Result с фиксированным типом ошибки
pub type Result<T> = std::result::Result<T, MoodFeedError>;
