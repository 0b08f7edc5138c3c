pub mod articles;
pub mod cache;

pub use articles::NewsArticleHolder;
pub use cache::FeedCacheHolder;
