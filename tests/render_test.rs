//! Rendering of whole sessions into terminal frames.

use jiffy::giphy::{parse_context, SearchParams};
use jiffy::ui::{render_to_string, HintLine};
use jiffy::{handle_event, Action, AppState, Event, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;

const ROWS: usize = 20;
const COLS: usize = 100;

fn session_with_results(count: usize) -> AppState {
    let params = SearchParams {
        api_key: Some("k".to_string()),
        ..SearchParams::default()
    };
    let mut state = AppState::with_rng(params, Theme::default(), StdRng::seed_from_u64(99));
    for c in "cats".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    for n in 0..count {
        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        let Some(Action::SendSearch { context, .. }) = actions.first() else {
            panic!("no search sent");
        };
        let (request, _) = parse_context(context).unwrap();
        let body = format!(r#"{{"data":[{{"id":"g{n}","title":"cat number {n}","url":"https://giphy.com/gifs/g{n}"}}]}}"#);
        handle_event(&mut state, &Event::SearchCompleted { request, status: 200, body: body.into_bytes() }).unwrap();
    }
    state
}

#[test]
fn empty_session_shows_title_and_prompt() {
    let state = session_with_results(0);
    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(!vm.header.is_clear_control);
    assert_eq!(vm.hint, HintLine::Text("Hit enter to search cats".to_string()));

    let frame = render_to_string(&vm, &state.theme, ROWS, COLS);
    assert!(frame.contains("Jiffy"));
    assert!(frame.contains("cats"));
}

#[test]
fn results_turn_header_into_clear_control() {
    let state = session_with_results(2);
    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(vm.header.is_clear_control);
    assert_eq!(vm.header.title.trim(), "[Esc] clear (2)");

    let frame = render_to_string(&vm, &state.theme, ROWS, COLS);
    assert!(frame.contains("cat number 0"));
    assert!(frame.contains("cat number 1"));
    assert!(frame.contains("Hit enter to see more cats"));
}

#[test]
fn long_stacks_scroll_and_report_hidden_rows() {
    let state = session_with_results(30);
    let vm = state.compute_viewmodel(ROWS, COLS);
    assert_eq!(vm.display_items.len(), ROWS - 9);
    assert_eq!(vm.hidden_above, 30 - (ROWS - 9));
    assert_eq!(vm.display_items.last().map(|d| d.ordinal), Some(30));

    let frame = render_to_string(&vm, &state.theme, ROWS, COLS);
    assert!(frame.contains(&format!(" ↑ {} more ", vm.hidden_above)));
}

#[test]
fn browsing_shows_selected_link_in_footer() {
    let mut state = session_with_results(3);
    handle_event(&mut state, &Event::FocusResults).unwrap();
    handle_event(&mut state, &Event::KeyUp).unwrap();

    let vm = state.compute_viewmodel(ROWS, COLS);
    let selected: Vec<_> = vm.display_items.iter().filter(|d| d.is_selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].ordinal, 2);
    assert!(!vm.input.focused);
    assert_eq!(vm.footer.selected_link, Some(state.results[1].media_url().to_string()));
}

#[test]
fn loading_shows_spinner() {
    let mut state = session_with_results(0);
    handle_event(&mut state, &Event::Enter).unwrap();
    handle_event(&mut state, &Event::Tick).unwrap();

    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(matches!(vm.hint, HintLine::Spinner { ref term, .. } if term == "cats"));
}
