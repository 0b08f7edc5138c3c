pub mod collector;
pub mod processor;
pub mod feed;

pub use collector::NewsCollectorService;
pub use processor::{classify_mood, SentimentProcessorService};
pub use feed::FeedBuilderService;
