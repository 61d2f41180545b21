use crate::{FetchRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one remote call; its outcome must come back tagged with `request_id`.
    Fetch {
        request_id: RequestId,
        request: FetchRequest,
    },
    /// Hand an article url to navigation.
    OpenArticle { url: String },
}
