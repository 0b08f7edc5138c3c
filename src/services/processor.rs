use reqwest::{Client, ClientBuilder};
use serde_json::{json, Value};
use regex::Regex;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use crate::holders::NewsArticleHolder;
use crate::config::AppConfig;
use crate::errors::{MoodFeedError, Result};
use crate::models::{Mood, SentimentScore};

/// Сопоставление результата модели с корзиной настроения.
///
/// Побеждает запись со строго наибольшим score; при равенстве остаётся
/// первая встреченная. Стартовый максимум — 0 с пустой меткой, поэтому
/// пустой результат (и любая неизвестная метка) уходит в негативную
/// ветвь и даёт (sad, 0.0). Порог 0.9 включительно относится к верхней
/// ветви.
pub fn classify_mood(scores: &[SentimentScore]) -> (Mood, f64) {
    let mut winning_score = 0.0_f64;
    let mut winning_label = "";

    for entry in scores {
        if entry.score > winning_score {
            winning_score = entry.score;
            winning_label = entry.label.as_str();
        }
    }

    let mood = match winning_label {
        "LABEL_2" => {
            if winning_score < 0.9 {
                Mood::Good
            } else {
                Mood::Happy
            }
        }
        "LABEL_1" => Mood::Normal,
        _ => {
            if winning_score < 0.9 {
                Mood::Sad
            } else {
                Mood::Angry
            }
        }
    };

    (mood, winning_score)
}

#[derive(Clone)]
pub struct SentimentProcessorService {
    client: Client,
    article_holder: NewsArticleHolder,
    config: AppConfig,
}

impl SentimentProcessorService {
    pub fn new(article_holder: NewsArticleHolder, config: AppConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build reqwest client");
        SentimentProcessorService {
            client,
            article_holder,
            config,
        }
    }

    /// Классифицирует заголовки в холдере и возвращает итоговый снимок.
    pub async fn process_articles(&self) -> Result<Vec<crate::models::NewsArticle>> {
        let articles = self.article_holder.get().await?;
        let max_concurrent = self.config.max_concurrent_requests.unwrap_or(10);

        let tasks: Vec<_> = articles
            .iter()
            .enumerate()
            .map(|(index, article)| {
                let this = self.clone();
                let title = article.title.clone();
                async move {
                    let cleaned_title = this.clean_text(&title)?;
                    let sentiment = this.analyze_sentiment(&cleaned_title).await?;
                    let (mood, score) = classify_mood(&sentiment);
                    tracing::debug!(
                        "Заголовок классифицирован как {}: {}",
                        mood.as_str(),
                        title
                    );
                    Ok::<(usize, Mood, f64), MoodFeedError>((index, mood, score))
                }
            })
            .collect();

        // buffered сохраняет порядок результатов — порядок ленты не меняется
        let results = stream::iter(tasks)
            .buffered(max_concurrent)
            .collect::<Vec<_>>()
            .await;

        for result in results {
            let (index, mood, score) = result?;
            self.article_holder.update_mood(index, mood, score).await?;
        }

        let classified = self.article_holder.get().await?;
        tracing::info!("Классифицировано {} заголовков", classified.len());
        Ok(classified)
    }

    fn clean_text(&self, text: &str) -> Result<String> {
        let html_regex = Regex::new(r"<[^>]+>")?;
        let url_regex = Regex::new(r"http\S+|www\.\S+")?;
        let whitespace_regex = Regex::new(r"\s+")?;

        let cleaned = html_regex.replace_all(text, " ");
        let cleaned = url_regex.replace_all(&cleaned, " ");
        let cleaned = whitespace_regex.replace_all(&cleaned, " ");

        Ok(cleaned.trim().to_string())
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<Vec<SentimentScore>> {
        if text.trim().is_empty() {
            return Ok(self.lexicon_sentiment(text));
        }

        let max_len = 512;
        let truncated_text: String = text
            .split_whitespace()
            .take_while(|word| max_len >= word.len() + 1)
            .collect::<Vec<&str>>()
            .join(" ");

        let payload = json!({ "inputs": truncated_text });

        let response = self
            .client
            .post(&self.config.huggingface_api_url)
            .header("Authorization", format!("Bearer {}", self.config.huggingface_api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("Hugging Face API вернул ошибку: {}", response.status());
            return Ok(self.lexicon_sentiment(text));
        }

        let result: Value = match response.json().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Не удалось разобрать ответ Hugging Face: {}", e);
                return Ok(self.lexicon_sentiment(text));
            }
        };

        // Модель отвечает [[{label, score}, ..]]; встречается и плоская форма
        let predictions = match result.as_array().and_then(|arr| arr.first()) {
            Some(Value::Array(inner)) => Some(inner.clone()),
            Some(Value::Object(_)) => result.as_array().cloned(),
            _ => None,
        };

        let parsed: Option<Vec<SentimentScore>> =
            predictions.and_then(|values| serde_json::from_value(Value::Array(values)).ok());

        match parsed {
            Some(scores) => {
                tracing::debug!("Hugging Face вернул {} меток", scores.len());
                Ok(scores)
            }
            None => {
                tracing::warn!("Некорректный формат ответа от Hugging Face: {:?}", result);
                Ok(self.lexicon_sentiment(text))
            }
        }
    }

    /// Резервная оценка по словарю: одна синтетическая запись с
    /// уверенностью ниже порога 0.9.
    fn lexicon_sentiment(&self, text: &str) -> Vec<SentimentScore> {
        let positive_words = [
            "good", "great", "excellent", "amazing", "wonderful", "fantastic",
            "win", "wins", "victory", "success", "breakthrough", "record",
            "growth", "rescue", "cure", "celebrates", "soars", "praise",
            "hope", "победа", "рост", "успех",
        ];

        let negative_words = [
            "bad", "terrible", "awful", "horrible", "crisis", "crash",
            "death", "dies", "killed", "war", "loss", "fall", "decline",
            "drop", "collapse", "ban", "scam", "hack", "theft", "fear",
            "кризис", "провал", "падение",
        ];

        let negation_words = ["not", "never", "нет", "никогда"];
        let text_lower = text.to_lowercase();
        let words: Vec<&str> = text_lower.split_whitespace().collect();

        let mut positive_count = 0;
        let mut negative_count = 0;

        for (i, word) in words.iter().enumerate() {
            let is_negated = i > 0 && negation_words.contains(&words[i - 1]);
            if positive_words.contains(word) {
                positive_count += if is_negated { -1 } else { 1 };
            }
            if negative_words.contains(word) {
                negative_count += if is_negated { -1 } else { 1 };
            }
        }

        let (label, score) = if positive_count > negative_count {
            ("LABEL_2", 0.6)
        } else if negative_count > positive_count {
            ("LABEL_0", 0.6)
        } else {
            ("LABEL_1", 0.5)
        };

        vec![SentimentScore {
            label: label.to_string(),
            score,
        }]
    }
}
