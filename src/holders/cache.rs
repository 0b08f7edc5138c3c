use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::models::{FetchKey, NewsArticle};
use crate::errors::Result;

/// Мемоизация классифицированных выборок по ключу запроса.
/// Запись делается один раз на ключ и живёт до конца процесса.
#[derive(Clone)]
pub struct FeedCacheHolder {
    entries: Arc<Mutex<HashMap<FetchKey, Vec<NewsArticle>>>>,
}

impl FeedCacheHolder {
    pub fn new() -> Self {
        FeedCacheHolder {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &FetchKey) -> Result<Option<Vec<NewsArticle>>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    pub async fn insert(&self, key: FetchKey, articles: Vec<NewsArticle>) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.entry(key).or_insert(articles);
        Ok(())
    }

    pub async fn len(&self) -> Result<usize> {
        let entries = self.entries.lock().await;
        Ok(entries.len())
    }
}
