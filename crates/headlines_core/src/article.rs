/// One headline as received from the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Identity used for navigation.
    pub url: String,
    pub image_url: Option<String>,
    pub source_name: Option<String>,
}

/// Fully determines one call to the fetch capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub country: String,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
}

/// Result of one fetch, already normalized by the caller of the fetch capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success {
        articles: Vec<Article>,
        total_results: u32,
    },
    Failure {
        reason: String,
    },
}
