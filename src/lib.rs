pub mod config;
pub mod errors;
pub mod holders;
pub mod models;
pub mod routers;
pub mod services;

pub use config::AppConfig;
pub use errors::{MoodFeedError, Result};
pub use holders::{FeedCacheHolder, NewsArticleHolder};
pub use models::{
    FeedArticle, FeedResponse, FetchKey, Mood, MoodStatistics, NewsArticle, SentimentScore,
};
pub use services::{classify_mood, FeedBuilderService, NewsCollectorService, SentimentProcessorService};
pub use config::load_config;

#[derive(Clone)]
pub struct AppState {
    pub collector: NewsCollectorService,
    pub processor: SentimentProcessorService,
    pub feed: FeedBuilderService,
    pub feed_cache: FeedCacheHolder,
    pub config: AppConfig,
}
