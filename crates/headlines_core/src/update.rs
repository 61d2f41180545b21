use crate::{requested_page, Effect, ListState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListState, msg: Msg) -> (ListState, Vec<Effect>) {
    if let Some(intent) = msg.intent() {
        let Some(page) = requested_page(&state, intent) else {
            return (state, Vec::new());
        };
        let (request_id, request) = state.begin_fetch(intent, page);
        return (
            state,
            vec![Effect::Fetch {
                request_id,
                request,
            }],
        );
    }

    let effects = match msg {
        Msg::FetchDone {
            request_id,
            outcome,
        } => {
            // Outcomes for superseded requests are dropped here rather than cancelled.
            state.apply_outcome(request_id, outcome);
            Vec::new()
        }
        Msg::ArticleActivated { index } => match state.items().get(index) {
            Some(article) => vec![Effect::OpenArticle {
                url: article.url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::Initialize | Msg::Refresh | Msg::LoadMore | Msg::Retry => Vec::new(),
    };

    (state, effects)
}
