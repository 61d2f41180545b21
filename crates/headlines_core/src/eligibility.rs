use crate::{ListState, Phase};

/// A named user- or lifecycle-triggered request to possibly fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Initialize,
    Refresh,
    LoadMore,
    Retry,
}

/// Decides whether `intent` may fetch against `state`, and which page it asks for.
///
/// `None` means the intent is dropped: no fetch, no state change. This is what keeps
/// overlapping load-more calls and requests past `total_results` from going out.
pub fn requested_page(state: &ListState, intent: Intent) -> Option<u32> {
    match intent {
        Intent::Initialize => state.page().is_none().then_some(1),
        Intent::Refresh => (!state.is_refreshing()).then_some(1),
        Intent::LoadMore => {
            let has_more = state
                .total_results()
                .is_some_and(|total| (state.items().len() as u64) < u64::from(total));
            if state.phase() == Phase::Ok && has_more {
                Some(state.page().unwrap_or(0) + 1)
            } else {
                None
            }
        }
        Intent::Retry => match state.phase() {
            Phase::Error => Some(1),
            _ => Some(state.page().unwrap_or(1)),
        },
    }
}
