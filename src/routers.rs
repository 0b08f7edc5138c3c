use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::models::{FetchKey, Mood};
use crate::AppState;

#[derive(Deserialize)]
pub struct FeedRequest {
    pub query: Option<String>,
    pub country: String,
    pub category: String,
    pub mood: Mood,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub default_query: String,
    pub available_countries: Vec<String>,
    pub available_categories: Vec<String>,
    pub available_moods: Vec<String>,
    pub available_endpoints: Vec<String>,
}

// Основной обработчик ленты новостей
pub async fn news_feed(
    State(state): State<AppState>,
    Json(req): Json<FeedRequest>,
) -> Result<Json<Value>, StatusCode> {
    // Валидация входных данных
    if !state.config.countries.contains(&req.country) {
        tracing::warn!("Неизвестный код страны: {}", req.country);
        return Err(StatusCode::BAD_REQUEST);
    }

    if !state.config.categories.contains(&req.category) {
        tracing::warn!("Неизвестная категория: {}", req.category);
        return Err(StatusCode::BAD_REQUEST);
    }

    let query = req
        .query
        .clone()
        .unwrap_or_else(|| state.config.default_query.clone());

    tracing::info!(
        "Запрос ленты: \"{}\", {}/{}, настроение {}",
        query,
        req.country,
        req.category,
        req.mood.as_str()
    );

    let key = FetchKey {
        query: query.clone(),
        country: req.country.clone(),
        category: req.category.clone(),
        api_key: state.config.newsapi_key.clone(),
    };

    let cached = match state.feed_cache.get(&key).await {
        Ok(cached) => cached,
        Err(e) => {
            tracing::error!("Ошибка чтения кеша: {}", e);
            return Ok(Json(json!({
                "status": "error",
                "message": format!("Ошибка чтения кеша: {}", e),
                "error_type": "cache_error"
            })));
        }
    };

    let classified = match cached {
        Some(articles) => {
            tracing::info!("Выборка взята из кеша ({} статей)", articles.len());
            articles
        }
        None => {
            // Собираем заголовки
            match state
                .collector
                .collect_news(&query, &req.country, &req.category)
                .await
            {
                Ok(0) => {
                    tracing::info!("NewsAPI не вернул ни одной статьи");
                    return Ok(Json(json!({
                        "status": "no_articles",
                        "message": "No articles found."
                    })));
                }
                Ok(count) => {
                    tracing::info!("Собрано {} статей, запускаем классификацию", count);
                }
                Err(e) => {
                    tracing::error!("Ошибка сбора новостей: {}", e);
                    return Ok(Json(json!({
                        "status": "error",
                        "message": format!("Ошибка сбора новостей: {}", e),
                        "error_type": "news_fetch_error"
                    })));
                }
            }

            // Классифицируем настроение заголовков
            match state.processor.process_articles().await {
                Ok(articles) => {
                    if let Err(e) = state.feed_cache.insert(key, articles.clone()).await {
                        tracing::error!("Ошибка записи в кеш: {}", e);
                    }
                    articles
                }
                Err(e) => {
                    tracing::error!("Ошибка классификации настроения: {}", e);
                    return Ok(Json(json!({
                        "status": "error",
                        "message": format!("Ошибка классификации настроения: {}", e),
                        "error_type": "sentiment_processing_error"
                    })));
                }
            }
        }
    };

    let response = state
        .feed
        .build_feed(&classified, &query, &req.country, &req.category, req.mood);

    tracing::info!(
        "Лента построена: {} из {} статей",
        response.statistics.matching_count,
        response.statistics.total_fetched
    );
    Ok(Json(serde_json::to_value(response).unwrap()))
}

// Проверка здоровья сервиса
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Modus News Feed API is running".to_string(),
        version: "1.0.0".to_string(),
    })
}

// Получение статуса сервиса
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ready".to_string(),
        default_query: state.config.default_query.clone(),
        available_countries: state.config.countries.clone(),
        available_categories: state.config.categories.clone(),
        available_moods: Mood::all()
            .iter()
            .map(|m| m.as_str().to_string())
            .collect(),
        available_endpoints: vec![
            "/".to_string(),
            "/status".to_string(),
            "/moods".to_string(),
            "/api/news-feed".to_string(),
            "/feed".to_string(),
        ],
    })
}

// Таблица настроение -> эмодзи для слоя отображения
pub async fn list_moods() -> Json<Value> {
    let moods: Vec<Value> = Mood::all()
        .iter()
        .map(|m| json!({ "mood": m.as_str(), "emoji": m.emoji() }))
        .collect();

    Json(json!({ "moods": moods }))
}

// Лента по умолчанию: первая страна и категория из конфигурации
pub async fn simple_feed(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let req = FeedRequest {
        query: None,
        country: state.config.countries.first().cloned().unwrap_or_default(),
        category: state.config.categories.first().cloned().unwrap_or_default(),
        mood: Mood::Happy,
    };
    news_feed(State(state), Json(req)).await
}

// Создание маршрутов
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/status", get(get_status))
        .route("/moods", get(list_moods))
        .route("/api/news-feed", post(news_feed))
        .route("/feed", get(simple_feed))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
