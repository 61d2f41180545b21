//! Headlines core: pure paginated-list state machine and view-model helpers.
mod article;
mod effect;
mod eligibility;
mod msg;
mod scroll;
mod state;
mod update;
mod view_model;

pub use article::{Article, FetchOutcome, FetchRequest};
pub use effect::Effect;
pub use eligibility::{requested_page, Intent};
pub use msg::Msg;
pub use scroll::{end_reached, Viewport, END_REACHED_THRESHOLD};
pub use state::{FetchKind, InFlight, ListQuery, ListState, Phase, RequestId};
pub use update::update;
pub use view_model::{
    ArticleRowView, Footer, ImageRef, ListViewModel, RenderMode, UNKNOWN_SOURCE,
};
