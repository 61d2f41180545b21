use headlines_core::{update, ListQuery, ListState, Msg};

#[test]
fn activating_a_row_on_an_empty_list_is_ignored() {
    let state = ListState::new(ListQuery::default());
    let (next, effects) = update(state.clone(), Msg::ArticleActivated { index: 0 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
