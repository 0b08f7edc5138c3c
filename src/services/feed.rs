use chrono::Utc;

use crate::config::AppConfig;
use crate::models::{FeedArticle, FeedResponse, Mood, MoodStatistics, NewsArticle};

#[derive(Clone)]
pub struct FeedBuilderService {
    config: AppConfig,
}

impl FeedBuilderService {
    pub fn new(config: AppConfig) -> Self {
        FeedBuilderService { config }
    }

    pub fn build_feed(
        &self,
        articles: &[NewsArticle],
        query: &str,
        country: &str,
        category: &str,
        mood: Mood,
    ) -> FeedResponse {
        let statistics = self.calculate_mood_statistics(articles, mood);
        let feed_articles = self.format_feed_articles(articles, mood);

        FeedResponse {
            status: "success".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            query: query.to_string(),
            country: country.to_string(),
            category: category.to_string(),
            mood,
            statistics,
            articles: feed_articles,
        }
    }

    fn calculate_mood_statistics(&self, articles: &[NewsArticle], mood: Mood) -> MoodStatistics {
        let count_for = |m: Mood| articles.iter().filter(|a| a.mood == Some(m)).count();

        MoodStatistics {
            total_fetched: articles.len(),
            happy_count: count_for(Mood::Happy),
            good_count: count_for(Mood::Good),
            normal_count: count_for(Mood::Normal),
            sad_count: count_for(Mood::Sad),
            angry_count: count_for(Mood::Angry),
            matching_count: count_for(mood),
        }
    }

    /// Фильтрация по настроению с сохранением порядка выдачи API.
    fn format_feed_articles(&self, articles: &[NewsArticle], mood: Mood) -> Vec<FeedArticle> {
        articles
            .iter()
            .filter(|article| article.mood == Some(mood))
            .map(|article| {
                let image_url = if article.image_url.is_empty() {
                    self.config.placeholder_image_url.clone()
                } else {
                    article.image_url.clone()
                };

                FeedArticle {
                    title: article.title.clone(),
                    content: article.content.clone(),
                    url: article.url.clone(),
                    image_url,
                    mood,
                    emoji: mood.emoji(),
                    score: article.score.unwrap_or(0.0),
                }
            })
            .collect()
    }
}
