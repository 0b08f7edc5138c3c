use std::sync::Arc;
use tokio::sync::Mutex;
use crate::models::{Mood, NewsArticle};
use crate::errors::{MoodFeedError, Result};

#[derive(Clone)]
pub struct NewsArticleHolder {
    articles: Arc<Mutex<Vec<NewsArticle>>>,
}

impl NewsArticleHolder {
    pub fn new() -> Self {
        NewsArticleHolder {
            articles: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn add(&self, article: NewsArticle) -> Result<()> {
        let mut articles = self.articles.lock().await;
        articles.push(article);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        let mut articles = self.articles.lock().await;
        articles.clear();
        Ok(())
    }

    pub async fn get(&self) -> Result<Vec<NewsArticle>> {
        let articles = self.articles.lock().await;
        Ok(articles.clone())
    }

    pub async fn update_mood(&self, index: usize, mood: Mood, score: f64) -> Result<()> {
        let mut articles = self.articles.lock().await;
        if let Some(item) = articles.get_mut(index) {
            item.mood = Some(mood);
            item.score = Some(score);
            Ok(())
        } else {
            Err(MoodFeedError::InvalidDataFormat(format!(
                "Article at index {} not found",
                index
            )))
        }
    }

    pub async fn len(&self) -> Result<usize> {
        let articles = self.articles.lock().await;
        Ok(articles.len())
    }
}
