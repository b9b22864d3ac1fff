use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FeedError {
    /// No feed file at the expected path. Normal during early builds.
    NotFound,
    Io(String),
    Parse(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::NotFound => write!(f, "feed file not found"),
            FeedError::Io(msg) => write!(f, "feed read error: {msg}"),
            FeedError::Parse(msg) => write!(f, "feed parse error: {msg}"),
        }
    }
}

impl Error for FeedError {}
