pub mod feed_error;
pub mod loader;
pub mod models;

pub use feed_error::FeedError;
pub use loader::load_developments;
