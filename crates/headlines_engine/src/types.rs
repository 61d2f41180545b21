use std::fmt;

pub type RequestId = u64;

/// Parameters of one top-headlines call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub country: String,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
    pub source_name: Option<String>,
}

/// One successfully decoded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesPage {
    pub articles: Vec<ArticleRecord>,
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        request_id: RequestId,
        result: Result<HeadlinesPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    /// Non-success HTTP status.
    HttpStatus(u16),
    /// Service answered 2xx but reported `status: "error"`.
    Upstream { code: Option<String> },
    MalformedResponse,
    TooLarge { max_bytes: u64, actual: Option<u64> },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Upstream { code: Some(code) } => write!(f, "upstream error {code}"),
            FailureKind::Upstream { code: None } => write!(f, "upstream error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
        }
    }
}
