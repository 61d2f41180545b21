use crate::Article;

/// Label shown when an article carries no source name.
pub const UNKNOWN_SOURCE: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full-screen spinner; nothing beyond the first page to show yet.
    InitialLoading,
    /// First page failed with nothing loaded; offers Retry.
    ErrorEmpty,
    Empty,
    Populated { footer: Footer },
}

/// Trailing indicator under a populated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer {
    Spinner,
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Remote(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub title: String,
    pub url: String,
    pub image: ImageRef,
    pub source_label: String,
}

impl From<&Article> for ArticleRowView {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            image: article
                .image_url
                .clone()
                .map_or(ImageRef::Placeholder, ImageRef::Remote),
            source_label: article
                .source_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub mode: RenderMode,
    /// Empty unless `mode` is `Populated`.
    pub rows: Vec<ArticleRowView>,
    pub is_refreshing: bool,
    pub page: Option<u32>,
    pub total_results: Option<u32>,
    pub dirty: bool,
}
