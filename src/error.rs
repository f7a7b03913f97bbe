use thiserror::Error;

/// Errors raised while enhancing a documentation page.
///
/// None of these ever reach the reader: the component layer logs them and
/// leaves the affected part of the page as it was.
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Unexpected status {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DocsError {
    fn from(err: serde_json::Error) -> Self {
        DocsError::Parse(err.to_string())
    }
}
