use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modus_news_feed::{
    AppState, FeedBuilderService, FeedCacheHolder, NewsArticleHolder, NewsCollectorService,
    SentimentProcessorService, load_config,
};
use modus_news_feed::routers::create_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Настройка структурированного логирования
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("modus_news_feed=info,warn"));

    let file_appender = tracing_appender::rolling::daily("logs", "modus_news_feed.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true))
        .with(tracing_subscriber::fmt::layer()
            .json()
            .with_writer(file_writer))
        .init();

    let config = load_config()?;
    let article_holder = NewsArticleHolder::new();
    let feed_cache = FeedCacheHolder::new();

    let state = AppState {
        collector: NewsCollectorService::new(article_holder.clone(), config.clone()),
        processor: SentimentProcessorService::new(article_holder, config.clone()),
        feed: FeedBuilderService::new(config.clone()),
        feed_cache,
        config,
    };

    let app = create_routes(state);
    println!("Сервер запущен на http://localhost:3000");
    axum::Server::bind(&"0.0.0.0:3000".parse()?)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
