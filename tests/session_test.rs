//! End-to-end session behavior driven through `handle_event`.

use jiffy::app::SPINNER_INTERVAL;
use jiffy::giphy::{parse_context, RequestId, SearchParams};
use jiffy::{handle_event, Action, AppState, Event, SearchStatus, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn session(seed: u64) -> AppState {
    let params = SearchParams {
        api_key: Some("integration-key".to_string()),
        ..SearchParams::default()
    };
    AppState::with_rng(params, Theme::default(), StdRng::seed_from_u64(seed))
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).expect("handle_event never fails for these events")
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

/// Presses Enter and returns the id of the request that went out.
fn commit(state: &mut AppState) -> RequestId {
    let (_, actions) = send(state, Event::Enter);
    match actions.first() {
        Some(Action::SendSearch { context, .. }) => parse_context(context).expect("tagged request").0,
        other => panic!("expected a search to be sent, got {other:?}"),
    }
}

fn body(ids: &[&str]) -> Vec<u8> {
    let data: Vec<String> = ids
        .iter()
        .map(|id| format!(r#"{{"id":"{id}","title":"gif {id}","url":"https://giphy.com/gifs/{id}"}}"#))
        .collect();
    format!(r#"{{"data":[{}],"meta":{{"status":200,"msg":"OK"}}}}"#, data.join(",")).into_bytes()
}

fn complete(state: &mut AppState, request: RequestId, ids: &[&str]) -> bool {
    send(state, Event::SearchCompleted { request, status: 200, body: body(ids) }).0
}

#[test]
fn hint_tracks_input_length() {
    let mut state = session(1);
    assert_eq!(state.hint_text(), "");

    type_text(&mut state, "do");
    assert_eq!(state.hint_text(), "");
    type_text(&mut state, "g");
    assert_eq!(state.hint_text(), "Hit enter to search dog");

    send(&mut state, Event::Backspace);
    assert_eq!(state.hint_text(), "");
    assert!(state.results.is_empty());
}

#[test]
fn successful_searches_stack_in_order() {
    let mut state = session(2);

    type_text(&mut state, "cats");
    let first = commit(&mut state);
    assert!(state.is_loading());
    assert_eq!(state.hint_text(), "");
    assert!(complete(&mut state, first, &["cat"]));

    send(&mut state, Event::ClearLine);
    type_text(&mut state, "dogs");
    let second = commit(&mut state);
    assert!(second > first);
    assert!(complete(&mut state, second, &["dog"]));

    let ids: Vec<&str> = state.results.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["cat", "dog"]);
    assert_eq!(state.hint_text(), "Hit enter to see more dogs");
    assert!(!state.is_loading());
}

#[test]
fn repeated_enter_adds_more_of_the_same_term() {
    let mut state = session(3);
    type_text(&mut state, "otter");

    for _ in 0..3 {
        let request = commit(&mut state);
        complete(&mut state, request, &["a", "b", "c"]);
    }

    assert_eq!(state.results.len(), 3);
    assert_eq!(state.hint_text(), "Hit enter to see more otter");
}

#[test]
fn empty_result_reports_nothing_found_and_keeps_stack() {
    let mut state = session(4);
    type_text(&mut state, "cats");
    let request = commit(&mut state);
    complete(&mut state, request, &["cat"]);

    send(&mut state, Event::ClearLine);
    type_text(&mut state, "xyzzy");
    let request = commit(&mut state);
    complete(&mut state, request, &[]);

    assert_eq!(state.hint_text(), "Nothing found for xyzzy");
    assert_eq!(state.results.len(), 1);
    assert!(matches!(state.status, SearchStatus::Failed { .. }));
}

#[test]
fn service_failures_become_hints() {
    let mut state = session(5);
    type_text(&mut state, "cats");

    let request = commit(&mut state);
    send(
        &mut state,
        Event::SearchCompleted {
            request,
            status: 429,
            body: br#"{"message":"API rate limit exceeded"}"#.to_vec(),
        },
    );
    assert_eq!(state.hint_text(), "Search failed (429): API rate limit exceeded");

    let request = commit(&mut state);
    send(&mut state, Event::SearchCompleted { request, status: 200, body: b"<html>".to_vec() });
    assert!(state.hint_text().starts_with("Could not read search response"));

    assert!(state.results.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn overlapping_commit_is_ignored() {
    let mut state = session(6);
    type_text(&mut state, "cats");
    let request = commit(&mut state);

    let (render, actions) = send(&mut state, Event::Enter);
    assert!(!render);
    assert!(actions.is_empty());

    complete(&mut state, request, &["only"]);
    assert_eq!(state.results.len(), 1);
}

#[test]
fn typing_during_search_keeps_spinner_until_resolution() {
    let mut state = session(7);
    type_text(&mut state, "cats");
    let request = commit(&mut state);

    type_text(&mut state, "!!");
    assert_eq!(state.query_text, "cats!!");
    assert!(state.is_loading());
    assert_eq!(state.hint_text(), "");

    complete(&mut state, request, &["cat"]);
    assert_eq!(state.hint_text(), "Hit enter to see more cats");
}

#[test]
fn reset_empties_everything_and_is_idempotent() {
    let mut state = session(8);
    type_text(&mut state, "cats");
    let request = commit(&mut state);
    complete(&mut state, request, &["cat"]);

    send(&mut state, Event::Clear);
    let once = (state.query_text.clone(), state.status.clone(), state.results.clone());
    send(&mut state, Event::Clear);
    let twice = (state.query_text.clone(), state.status.clone(), state.results.clone());

    assert_eq!(once, twice);
    assert_eq!(once, (String::new(), SearchStatus::Idle, vec![]));
}

#[test]
fn reset_during_search_discards_the_response() {
    let mut state = session(9);
    type_text(&mut state, "cats");
    let stale = commit(&mut state);

    send(&mut state, Event::Clear);
    assert!(!complete(&mut state, stale, &["cat"]));
    assert!(state.results.is_empty());
    assert_eq!(state.hint_text(), "");

    type_text(&mut state, "dogs");
    let fresh = commit(&mut state);
    assert_ne!(fresh, stale);
    assert!(!complete(&mut state, stale, &["cat"]));
    assert!(complete(&mut state, fresh, &["dog"]));
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].id, "dog");
}

#[test]
fn spinner_timer_chain_stops_after_resolution() {
    let mut state = session(10);
    type_text(&mut state, "cats");
    let (_, actions) = send(&mut state, Event::Enter);
    assert!(actions.contains(&Action::ScheduleTick(SPINNER_INTERVAL)));

    let (_, actions) = send(&mut state, Event::Tick);
    assert_eq!(actions, vec![Action::ScheduleTick(SPINNER_INTERVAL)]);

    let request = match &state.status {
        SearchStatus::Loading { request, .. } => *request,
        other => panic!("expected loading, got {other:?}"),
    };
    complete(&mut state, request, &["cat"]);

    let (render, actions) = send(&mut state, Event::Tick);
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn pick_is_uniform_over_candidates() {
    const CANDIDATES: [&str; 4] = ["a", "b", "c", "d"];
    const ROUNDS: usize = 4000;

    let mut state = session(0x6a69_6666);
    type_text(&mut state, "random");

    for _ in 0..ROUNDS {
        let request = commit(&mut state);
        complete(&mut state, request, &CANDIDATES);
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for gif in &state.results {
        *counts.entry(gif.id.as_str()).or_default() += 1;
    }

    let expected = ROUNDS / CANDIDATES.len();
    for id in CANDIDATES {
        let seen = counts.get(id).copied().unwrap_or(0);
        assert!(
            seen.abs_diff(expected) < expected / 5,
            "candidate {id} picked {seen} times, expected about {expected}"
        );
    }
}

#[test]
fn single_candidate_is_always_picked() {
    let mut state = session(11);
    type_text(&mut state, "unique");
    let request = commit(&mut state);
    complete(&mut state, request, &["one"]);
    assert_eq!(state.results[0].id, "one");
}
