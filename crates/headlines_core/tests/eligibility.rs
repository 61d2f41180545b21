use std::sync::Once;

use headlines_core::{
    requested_page, update, Article, Effect, FetchOutcome, FetchRequest, Intent, ListQuery,
    ListState, Msg, Phase, RequestId,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn article(n: u32) -> Article {
    Article {
        title: format!("Headline {n}"),
        url: format!("https://news.example.com/{n}"),
        image_url: None,
        source_name: Some("Example".to_string()),
    }
}

fn query() -> ListQuery {
    ListQuery {
        country: "se".to_string(),
        page_size: 2,
    }
}

fn expect_fetch(effects: &[Effect]) -> (RequestId, FetchRequest) {
    match effects {
        [Effect::Fetch {
            request_id,
            request,
        }] => (*request_id, request.clone()),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn succeed(state: ListState, request_id: RequestId, range: std::ops::Range<u32>, total: u32) -> ListState {
    let (state, effects) = update(
        state,
        Msg::FetchDone {
            request_id,
            outcome: FetchOutcome::Success {
                articles: range.map(article).collect(),
                total_results: total,
            },
        },
    );
    assert!(effects.is_empty());
    state
}

fn fail(state: ListState, request_id: RequestId) -> ListState {
    let (state, _) = update(
        state,
        Msg::FetchDone {
            request_id,
            outcome: FetchOutcome::Failure {
                reason: "network error".to_string(),
            },
        },
    );
    state
}

/// State after one successful first page of `loaded` items out of `total`.
fn loaded_first_page(loaded: u32, total: u32) -> ListState {
    let (state, effects) = update(ListState::new(query()), Msg::Initialize);
    let (request_id, _) = expect_fetch(&effects);
    succeed(state, request_id, 0..loaded, total)
}

#[test]
fn initialize_requests_first_page_with_query() {
    init_logging();
    let (state, effects) = update(ListState::new(query()), Msg::Initialize);

    let (_, request) = expect_fetch(&effects);
    assert_eq!(
        request,
        FetchRequest {
            country: "se".to_string(),
            page: 1,
            page_size: 2,
        }
    );
    assert_eq!(state.phase(), Phase::Loading);
    assert!(!state.is_refreshing());
}

#[test]
fn initialize_is_dropped_once_a_page_is_loaded() {
    init_logging();
    let state = loaded_first_page(2, 5);

    let (next, effects) = update(state.clone(), Msg::Initialize);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn load_more_while_loading_issues_at_most_one_fetch() {
    init_logging();
    let state = loaded_first_page(2, 10);

    let (mut state, effects) = update(state, Msg::LoadMore);
    let (_, request) = expect_fetch(&effects);
    assert_eq!(request.page, 2);

    for _ in 0..5 {
        let (next, effects) = update(state, Msg::LoadMore);
        assert!(effects.is_empty());
        state = next;
    }
    assert_eq!(state.phase(), Phase::Loading);
}

#[test]
fn load_more_never_fetches_past_total_results() {
    init_logging();
    let mut state = loaded_first_page(2, 5);
    let mut fetched_pages = Vec::new();

    for _ in 0..10 {
        let (next, effects) = update(state, Msg::LoadMore);
        state = match effects.as_slice() {
            [] => next,
            _ => {
                let (request_id, request) = expect_fetch(&effects);
                fetched_pages.push(request.page);
                let start = state_len(&next);
                let end = (start + 2).min(5);
                succeed(next, request_id, start..end, 5)
            }
        };
    }

    assert_eq!(fetched_pages, vec![2, 3]);
    assert_eq!(state.items().len(), 5);
    assert!(state.is_exhausted());
}

fn state_len(state: &ListState) -> u32 {
    state.items().len() as u32
}

#[test]
fn load_more_is_dropped_before_first_success_and_after_failure() {
    init_logging();
    let fresh = ListState::new(query());
    assert_eq!(requested_page(&fresh, Intent::LoadMore), None);

    let state = loaded_first_page(2, 10);
    let (state, effects) = update(state, Msg::LoadMore);
    let (request_id, _) = expect_fetch(&effects);
    let state = fail(state, request_id);

    assert_eq!(state.phase(), Phase::Error);
    assert_eq!(requested_page(&state, Intent::LoadMore), None);
}

#[test]
fn refresh_is_dropped_while_refreshing() {
    init_logging();
    let state = loaded_first_page(2, 10);

    let (state, effects) = update(state, Msg::Refresh);
    let (_, request) = expect_fetch(&effects);
    assert_eq!(request.page, 1);
    assert!(state.is_refreshing());

    let (next, effects) = update(state.clone(), Msg::Refresh);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn retry_after_error_restarts_from_first_page_without_refreshing_flag() {
    init_logging();
    let (state, effects) = update(ListState::new(query()), Msg::Initialize);
    let (request_id, _) = expect_fetch(&effects);
    let state = fail(state, request_id);

    let (state, effects) = update(state, Msg::Retry);
    let (_, request) = expect_fetch(&effects);

    assert_eq!(request.page, 1);
    assert_eq!(state.phase(), Phase::Loading);
    assert!(!state.is_refreshing());
}

#[test]
fn retry_from_settled_list_requests_current_page_as_refresh() {
    init_logging();
    let state = loaded_first_page(2, 10);

    let (state, effects) = update(state, Msg::Retry);
    let (_, request) = expect_fetch(&effects);

    assert_eq!(request.page, 1);
    assert!(state.is_refreshing());
}

#[test]
fn retry_on_later_page_re_requests_it_and_appends_again() {
    init_logging();
    let state = loaded_first_page(2, 10);
    let (state, effects) = update(state, Msg::LoadMore);
    let (request_id, _) = expect_fetch(&effects);
    let state = succeed(state, request_id, 2..4, 10);
    assert_eq!(state.page(), Some(2));

    let (state, effects) = update(state, Msg::Retry);
    let (request_id, request) = expect_fetch(&effects);
    assert_eq!(request.page, 2);
    assert!(state.is_refreshing());

    // No dedup: the repeated page is appended a second time.
    let state = succeed(state, request_id, 2..4, 10);
    assert_eq!(state.items().len(), 6);
    assert_eq!(state.items()[4..], state.items()[2..4]);
    assert_eq!(state.page(), Some(2));
    assert!(!state.is_refreshing());
}

#[test]
fn retry_on_fresh_state_requests_first_page() {
    init_logging();
    let state = ListState::new(query());

    assert_eq!(requested_page(&state, Intent::Retry), Some(1));
    let (state, effects) = update(state, Msg::Retry);
    expect_fetch(&effects);
    assert!(!state.is_refreshing());
}

#[test]
fn each_fetch_gets_a_fresh_request_id() {
    init_logging();
    let state = loaded_first_page(2, 10);

    let (state, effects) = update(state, Msg::LoadMore);
    let (first, _) = expect_fetch(&effects);
    let (_, effects) = update(state, Msg::Refresh);
    let (second, _) = expect_fetch(&effects);

    assert_ne!(first, second);
}
