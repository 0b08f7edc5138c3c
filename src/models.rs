use serde::{Deserialize, Serialize};

/// Одна пара (метка, уверенность) из ответа модели настроений.
/// Метка остаётся строкой: неизвестная метка попадает в ту же
/// ветвь классификатора, что и негативная.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: String, // "LABEL_0" (негатив), "LABEL_1" (нейтрал), "LABEL_2" (позитив)
    pub score: f64,
}

/// Пять корзин настроения, по которым фильтруется лента.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Good,
    Normal,
    Sad,
    Angry,
}

impl Mood {
    /// Таблица эмодзи, полная по всем пяти вариантам.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Good => "🙂",
            Mood::Normal => "😐",
            Mood::Sad => "😔",
            Mood::Angry => "😡",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Good => "good",
            Mood::Normal => "normal",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }

    pub fn all() -> [Mood; 5] {
        [Mood::Happy, Mood::Good, Mood::Normal, Mood::Sad, Mood::Angry]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub content: String,
    pub url: String,
    pub image_url: String,
    pub mood: Option<Mood>,
    pub score: Option<f64>,
}

/// Ключ мемоизации результатов запроса к NewsAPI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub query: String,
    pub country: String,
    pub category: String,
    pub api_key: String,
}

/// Карточка статьи для слоя отображения.
#[derive(Debug, Serialize)]
pub struct FeedArticle {
    pub title: String,
    pub content: String,
    pub url: String,
    pub image_url: String,
    pub mood: Mood,
    pub emoji: &'static str,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct MoodStatistics {
    pub total_fetched: usize,
    pub happy_count: usize,
    pub good_count: usize,
    pub normal_count: usize,
    pub sad_count: usize,
    pub angry_count: usize,
    pub matching_count: usize,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub status: String,
    pub timestamp: String,
    pub query: String,
    pub country: String,
    pub category: String,
    pub mood: Mood,
    pub statistics: MoodStatistics,
    pub articles: Vec<FeedArticle>,
}
