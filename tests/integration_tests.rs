use modus_news_feed::*;
use serde_json::json;
use tokio_test;

fn test_config() -> AppConfig {
    AppConfig {
        newsapi_url: "https://newsapi.org/v2/top-headlines".to_string(),
        newsapi_key: "test_key".to_string(),
        huggingface_api_url: "https://api-inference.huggingface.co/models/test".to_string(),
        huggingface_api_key: "test_key".to_string(),
        default_query: "Modus News".to_string(),
        placeholder_image_url: "https://placehold.co/600x400?text=Modus".to_string(),
        countries: vec!["us".to_string(), "gb".to_string(), "au".to_string()],
        categories: vec!["business".to_string(), "general".to_string()],
        page_size: Some(100),
        max_concurrent_requests: Some(10),
    }
}

fn sentiment(label: &str, score: f64) -> SentimentScore {
    SentimentScore {
        label: label.to_string(),
        score,
    }
}

fn classified_article(title: &str, mood: Mood, score: f64) -> NewsArticle {
    NewsArticle {
        title: title.to_string(),
        content: format!("{} content", title),
        url: format!("https://example.com/{}", title),
        image_url: String::new(),
        mood: Some(mood),
        score: Some(score),
    }
}

#[test]
fn test_classify_positive_winner() {
    // Позитивный победитель ниже порога даёт good, от порога и выше - happy
    assert_eq!(
        classify_mood(&[sentiment("LABEL_2", 0.89)]),
        (Mood::Good, 0.89)
    );
    assert_eq!(
        classify_mood(&[sentiment("LABEL_2", 0.95)]),
        (Mood::Happy, 0.95)
    );
}

#[test]
fn test_classify_neutral_winner_any_score() {
    assert_eq!(
        classify_mood(&[sentiment("LABEL_1", 0.99)]),
        (Mood::Normal, 0.99)
    );
    assert_eq!(
        classify_mood(&[sentiment("LABEL_1", 0.4)]),
        (Mood::Normal, 0.4)
    );
}

#[test]
fn test_classify_negative_winner() {
    assert_eq!(
        classify_mood(&[sentiment("LABEL_0", 0.5)]),
        (Mood::Sad, 0.5)
    );
    assert_eq!(
        classify_mood(&[sentiment("LABEL_0", 0.97)]),
        (Mood::Angry, 0.97)
    );
}

#[test]
fn test_classify_threshold_boundary() {
    // Ровно 0.9 попадает в верхнюю ветвь
    assert_eq!(
        classify_mood(&[sentiment("LABEL_2", 0.9)]),
        (Mood::Happy, 0.9)
    );
    assert_eq!(
        classify_mood(&[sentiment("LABEL_0", 0.9)]),
        (Mood::Angry, 0.9)
    );
}

#[test]
fn test_classify_full_result() {
    let result = vec![
        sentiment("LABEL_2", 0.95),
        sentiment("LABEL_1", 0.03),
        sentiment("LABEL_0", 0.02),
    ];
    assert_eq!(classify_mood(&result), (Mood::Happy, 0.95));

    let result = vec![sentiment("LABEL_0", 0.85)];
    assert_eq!(classify_mood(&result), (Mood::Sad, 0.85));
}

#[test]
fn test_classify_tie_keeps_first() {
    // При равных score побеждает первая встреченная метка
    let result = vec![sentiment("LABEL_1", 0.5), sentiment("LABEL_2", 0.5)];
    assert_eq!(classify_mood(&result), (Mood::Normal, 0.5));

    let result = vec![sentiment("LABEL_0", 0.5), sentiment("LABEL_1", 0.5)];
    assert_eq!(classify_mood(&result), (Mood::Sad, 0.5));
}

#[test]
fn test_classify_empty_result_falls_to_sad() {
    // Наблюдаемое поведение: пустая метка уходит в негативную ветвь
    assert_eq!(classify_mood(&[]), (Mood::Sad, 0.0));
}

#[test]
fn test_classify_zero_scores_do_not_win() {
    let result = vec![sentiment("LABEL_2", 0.0), sentiment("LABEL_1", 0.0)];
    assert_eq!(classify_mood(&result), (Mood::Sad, 0.0));
}

#[test]
fn test_classify_unknown_label_falls_to_negative_branch() {
    assert_eq!(
        classify_mood(&[sentiment("LABEL_7", 0.95)]),
        (Mood::Angry, 0.95)
    );
}

#[test]
fn test_mood_emoji_table() {
    assert_eq!(Mood::Happy.emoji(), "😊");
    assert_eq!(Mood::Good.emoji(), "🙂");
    assert_eq!(Mood::Normal.emoji(), "😐");
    assert_eq!(Mood::Sad.emoji(), "😔");
    assert_eq!(Mood::Angry.emoji(), "😡");
}

#[test]
fn test_feed_filter_preserves_order() {
    let articles = vec![
        classified_article("first", Mood::Happy, 0.95),
        classified_article("second", Mood::Sad, 0.6),
        classified_article("third", Mood::Happy, 0.91),
        classified_article("fourth", Mood::Normal, 0.7),
        classified_article("fifth", Mood::Angry, 0.93),
    ];

    let feed = FeedBuilderService::new(test_config());
    let response = feed.build_feed(&articles, "Modus News", "us", "business", Mood::Happy);

    assert_eq!(response.articles.len(), 2);
    assert_eq!(response.articles[0].title, "first");
    assert_eq!(response.articles[1].title, "third");
    assert_eq!(response.articles[0].emoji, "😊");

    assert_eq!(response.statistics.total_fetched, 5);
    assert_eq!(response.statistics.happy_count, 2);
    assert_eq!(response.statistics.sad_count, 1);
    assert_eq!(response.statistics.matching_count, 2);
}

#[test]
fn test_feed_uses_placeholder_for_missing_image() {
    let articles = vec![classified_article("no image", Mood::Good, 0.7)];

    let feed = FeedBuilderService::new(test_config());
    let response = feed.build_feed(&articles, "Modus News", "us", "business", Mood::Good);

    assert_eq!(response.articles.len(), 1);
    assert_eq!(
        response.articles[0].image_url,
        "https://placehold.co/600x400?text=Modus"
    );
}

#[tokio::test]
async fn test_article_holder() {
    let holder = NewsArticleHolder::new();

    // Тест добавления статьи
    let article = NewsArticle {
        title: "Markets rally on good news".to_string(),
        content: "Stocks climbed across the board".to_string(),
        url: "https://example.com/rally".to_string(),
        image_url: String::new(),
        mood: None,
        score: None,
    };

    holder.add(article.clone()).await.unwrap();
    assert_eq!(holder.len().await.unwrap(), 1);

    // Тест получения статей
    let articles = holder.get().await.unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Markets rally on good news");
    assert_eq!(articles[0].mood, None);

    // Тест записи настроения
    holder.update_mood(0, Mood::Good, 0.82).await.unwrap();
    let updated = holder.get().await.unwrap();
    assert_eq!(updated[0].mood, Some(Mood::Good));
    assert_eq!(updated[0].score, Some(0.82));

    // Запись по несуществующему индексу - ошибка
    assert!(holder.update_mood(5, Mood::Happy, 0.9).await.is_err());

    // Тест очистки
    holder.clear().await.unwrap();
    assert_eq!(holder.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_feed_cache_holder() {
    let cache = FeedCacheHolder::new();

    let key = FetchKey {
        query: String::new(),
        country: "us".to_string(),
        category: "business".to_string(),
        api_key: "test_key".to_string(),
    };

    // Промах до записи
    assert!(cache.get(&key).await.unwrap().is_none());

    let batch = vec![classified_article("cached", Mood::Normal, 0.5)];
    cache.insert(key.clone(), batch).await.unwrap();

    let hit = cache.get(&key).await.unwrap().unwrap();
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].title, "cached");

    // Повторная запись по тому же ключу не перезаписывает выборку
    cache
        .insert(key.clone(), vec![])
        .await
        .unwrap();
    assert_eq!(cache.get(&key).await.unwrap().unwrap().len(), 1);
    assert_eq!(cache.len().await.unwrap(), 1);

    // Другой ключ - другая запись
    let other_key = FetchKey {
        category: "general".to_string(),
        ..key
    };
    assert!(cache.get(&other_key).await.unwrap().is_none());
}

#[test]
fn test_sentinel_query_translation() {
    let collector = NewsCollectorService::new(NewsArticleHolder::new(), test_config());

    // Запрос-заглушка означает поиск без фильтра
    assert_eq!(collector.search_text("Modus News"), "");
    assert_eq!(collector.search_text("climate"), "climate");
    assert_eq!(collector.search_text(""), "");
}

#[test]
fn test_parse_articles_defaults_and_empty() {
    // Отсутствующие поля статьи заменяются пустыми строками
    let body = json!({
        "status": "ok",
        "articles": [
            { "title": "Headline", "url": "https://example.com/a" },
            { "description": "only description" }
        ]
    });

    let articles = NewsCollectorService::parse_articles(&body).unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Headline");
    assert_eq!(articles[0].content, "");
    assert_eq!(articles[0].image_url, "");
    assert_eq!(articles[1].title, "");
    assert_eq!(articles[1].content, "only description");

    // Ноль статей - не ошибка
    let empty = json!({ "status": "ok", "articles": [] });
    let articles = NewsCollectorService::parse_articles(&empty).unwrap();
    assert!(articles.is_empty());

    // Тело без поля articles - ошибка формата
    let broken = json!({ "status": "ok" });
    assert!(NewsCollectorService::parse_articles(&broken).is_err());
}

#[test]
fn test_config_validation() {
    let mut config = test_config();

    // Валидная конфигурация должна проходить
    assert!(config.validate().is_ok());

    // Пустой список стран должен вызывать ошибку
    config.countries = vec![];
    assert!(config.validate().is_err());

    // Восстанавливаем страны
    config.countries = vec!["us".to_string()];

    // Пустой список категорий
    config.categories = vec![];
    assert!(config.validate().is_err());

    config.categories = vec!["general".to_string()];

    // Пустая заглушка запроса
    config.default_query = String::new();
    assert!(config.validate().is_err());

    config.default_query = "Modus News".to_string();

    // Неверный размер страницы
    config.page_size = Some(0);
    assert!(config.validate().is_err());

    config.page_size = Some(200);
    assert!(config.validate().is_err());

    // Неверное количество одновременных запросов
    config.page_size = Some(100);
    config.max_concurrent_requests = Some(0);
    assert!(config.validate().is_err());

    config.max_concurrent_requests = Some(100);
    assert!(config.validate().is_err());
}
