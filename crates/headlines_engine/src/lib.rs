//! Headlines engine: fetch executor for the top-headlines endpoint.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, HeadlinesFetcher, ReqwestFetcher};
pub use types::{
    ArticleRecord, EngineEvent, FailureKind, FetchError, HeadlinesPage, HeadlinesQuery, RequestId,
};
