use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ContentError {
    /// The content directory exists but could not be opened.
    DirRead(String),
    /// The directory listing failed partway through.
    EntryRead(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::DirRead(msg) => write!(f, "content directory unreadable: {msg}"),
            ContentError::EntryRead(msg) => write!(f, "content directory listing failed: {msg}"),
        }
    }
}

impl Error for ContentError {}
