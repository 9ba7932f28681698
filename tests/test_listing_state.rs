use urlstate::filter::ActiveFilter;
use urlstate::listing::ListingState;
use urlstate::state::{ListingCoordinator, StateEvent};

fn apply(state: &mut ListingState, event: StateEvent) {
    let change = state.process_event(&event);
    state.apply_change(change);
}

fn search(term: &str) -> StateEvent {
    StateEvent::SearchSubmitted {
        term: term.to_string(),
    }
}

fn toggle(slug: &str) -> StateEvent {
    StateEvent::CategoryToggled {
        slug: slug.to_string(),
    }
}

#[test]
fn test_search_displaces_categories() {
    let mut state = ListingState::default();

    apply(&mut state, toggle("a"));
    assert_eq!(state.selected_categories(), ["a".to_string()]);

    apply(&mut state, search("x"));
    assert_eq!(state.search_term(), "x");
    assert!(state.selected_categories().is_empty());
    assert_eq!(state.active_filter(), ActiveFilter::Search);
}

#[test]
fn test_category_displaces_search() {
    let mut state = ListingState::default();

    apply(&mut state, search("x"));
    assert_eq!(state.search_term(), "x");

    apply(&mut state, toggle("a"));
    assert_eq!(state.search_term(), "");
    assert_eq!(state.selected_categories(), ["a".to_string()]);
    assert_eq!(state.active_filter(), ActiveFilter::Category);
}

#[test]
fn test_resubmitting_identical_term_keeps_page() {
    let mut state = ListingState::default();
    state.pager.set_total(5);

    apply(&mut state, search("foo"));
    apply(&mut state, StateEvent::PageRequested { page: 3 });
    assert_eq!(state.current_page(), 3);

    apply(&mut state, search("foo"));
    assert_eq!(state.current_page(), 3);

    apply(&mut state, search("bar"));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_category_toggle_always_resets_page() {
    let mut state = ListingState::default();
    state.pager.set_total(5);

    apply(&mut state, toggle("a"));
    apply(&mut state, StateEvent::PageRequested { page: 3 });
    assert_eq!(state.current_page(), 3);

    apply(&mut state, toggle("b"));
    assert_eq!(state.current_page(), 1);
    assert_eq!(
        state.selected_categories(),
        ["a".to_string(), "b".to_string()]
    );
}

#[test]
fn test_toggle_removes_a_present_slug() {
    let mut state = ListingState::default();

    apply(&mut state, toggle("a"));
    apply(&mut state, toggle("b"));
    apply(&mut state, toggle("a"));
    assert_eq!(state.selected_categories(), ["b".to_string()]);

    apply(&mut state, toggle("b"));
    assert!(state.selected_categories().is_empty());
    assert_eq!(state.active_filter(), ActiveFilter::None);
}

#[test]
fn test_empty_submit_clears_the_term() {
    let mut state = ListingState::default();

    apply(&mut state, search("x"));
    apply(&mut state, search(""));
    assert_eq!(state.search_term(), "");
    assert_eq!(state.active_filter(), ActiveFilter::None);
}

#[test]
fn test_empty_submit_leaves_categories_alone() {
    let mut state = ListingState::default();

    apply(&mut state, toggle("a"));
    apply(&mut state, search(""));
    assert_eq!(state.selected_categories(), ["a".to_string()]);
    assert_eq!(state.active_filter(), ActiveFilter::Category);
}

#[test]
fn test_navigation_rehydrates_state() {
    let mut state = ListingState::default();

    apply(
        &mut state,
        StateEvent::ExternalNavigation {
            query: "categories=news,events&page=3".to_string(),
        },
    );

    assert_eq!(state.search_term(), "");
    assert_eq!(
        state.selected_categories(),
        ["news".to_string(), "events".to_string()]
    );
    assert_eq!(state.current_page(), 3);
}

#[test]
fn test_navigation_with_both_filters_prefers_search() {
    let mut state = ListingState::default();

    apply(
        &mut state,
        StateEvent::ExternalNavigation {
            query: "search=x&categories=a".to_string(),
        },
    );

    assert_eq!(state.search_term(), "x");
    assert!(state.selected_categories().is_empty());
}

#[test]
fn test_leaving_the_view_clears_the_term() {
    let mut state = ListingState::default();

    apply(&mut state, search("x"));
    apply(&mut state, StateEvent::ViewLeft);
    assert_eq!(state.search_term(), "");
}
