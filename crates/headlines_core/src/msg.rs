#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Screen mounted.
    Initialize,
    /// Pull-to-refresh gesture.
    Refresh,
    /// Scrolled close enough to the end of the list.
    LoadMore,
    /// User pressed Retry in the error view.
    Retry,
    /// Fetch executor finished a request previously emitted as `Effect::Fetch`.
    FetchDone {
        request_id: crate::RequestId,
        outcome: crate::FetchOutcome,
    },
    /// User activated the row at `index`.
    ArticleActivated { index: usize },
}

impl Msg {
    /// The list intent carried by this message, if any.
    pub fn intent(&self) -> Option<crate::Intent> {
        match self {
            Msg::Initialize => Some(crate::Intent::Initialize),
            Msg::Refresh => Some(crate::Intent::Refresh),
            Msg::LoadMore => Some(crate::Intent::LoadMore),
            Msg::Retry => Some(crate::Intent::Retry),
            Msg::FetchDone { .. } | Msg::ArticleActivated { .. } => None,
        }
    }
}
