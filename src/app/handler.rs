//! Event handling and state transition logic.
//!
//! The plugin shim turns Zellij events into [`Event`]s, [`handle_event`]
//! applies them to [`AppState`] through its transition methods, and the
//! returned actions carry every side effect back out.
//!
//! ```text
//! Key / WebRequestResult / Timer ──▶ Event ──▶ handle_event ──▶ (render?, Vec<Action>)
//! ```
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `ClearLine`, `Enter`, `Clear`
//! - **Navigation**: `FocusResults`, `FocusInput`, `KeyDown`, `KeyUp`, `CloseFocus`
//! - **System**: `Tick`, `SearchCompleted`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use jiffy::app::{handle_event, Action, AppState, Event};
//! use jiffy::giphy::SearchParams;
//! use jiffy::ui::Theme;
//!
//! let params = SearchParams { api_key: Some("key".to_string()), ..SearchParams::default() };
//! let mut state = AppState::new(params, Theme::default());
//! for c in "cats".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (render, actions) = handle_event(&mut state, &Event::Enter)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::SendSearch { .. }));
//! # Ok::<(), jiffy::JiffyError>(())
//! ```

use super::state::COMMIT_KEY;
use crate::app::{Action, AppState};
use crate::domain::error::{JiffyError, Result};
use crate::giphy::{decode_response, RequestId};

/// Seconds between spinner frames.
pub const SPINNER_INTERVAL: f64 = 0.1;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Empties the query without touching results.
    ClearLine,
    /// Commits the current query.
    Enter,
    /// Resets the whole session.
    Clear,

    /// Moves focus to the result stack.
    FocusResults,
    /// Moves focus back to the input.
    FocusInput,
    /// Moves the stack cursor down (wraps to top).
    KeyDown,
    /// Moves the stack cursor up (wraps to bottom).
    KeyUp,
    /// Hides the plugin.
    CloseFocus,

    /// Spinner timer fired.
    Tick,

    /// A search web request finished.
    SearchCompleted {
        /// Generation recovered from the request context.
        request: RequestId,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Answer to the web access permission request.
    PermissionsResult {
        granted: bool,
    },
}

/// Processes an event, mutates the state, and returns whether to re-render
/// plus the actions to execute.
///
/// # Errors
///
/// Currently every search failure is recovered into the hint line; the
/// `Result` is kept so the shim has one place to log unexpected errors.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            let mut raw = state.query_text.clone();
            raw.push(*c);
            state.on_input_change(&raw);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.query_text.is_empty() {
                return Ok((false, vec![]));
            }
            let mut raw = state.query_text.clone();
            raw.pop();
            state.on_input_change(&raw);
            Ok((true, vec![]))
        }
        Event::ClearLine => {
            state.on_input_change("");
            Ok((true, vec![]))
        }
        Event::Enter => {
            let raw = state.query_text.clone();
            let Some(request) = state.on_commit_key(&raw, COMMIT_KEY) else {
                return Ok((false, vec![]));
            };

            let url = if state.web_access_denied {
                Err(JiffyError::WebAccessDenied)
            } else {
                request.url()
            };

            match url {
                Ok(url) => {
                    let mut actions = vec![Action::SendSearch {
                        url,
                        context: request.context(),
                    }];
                    if !state.spinner_armed {
                        state.spinner_armed = true;
                        actions.push(Action::ScheduleTick(SPINNER_INTERVAL));
                    }
                    Ok((true, actions))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "search could not be sent");
                    state.resolve_search(request.id, Err(e));
                    Ok((true, vec![]))
                }
            }
        }
        Event::Clear => {
            tracing::debug!(results = state.results.len(), "clearing session");
            state.reset();
            Ok((true, vec![]))
        }
        Event::FocusResults => Ok((state.focus_results(), vec![])),
        Event::FocusInput => {
            state.focus_input();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Tick => {
            state.spinner_armed = false;
            if state.advance_spinner() {
                state.spinner_armed = true;
                Ok((true, vec![Action::ScheduleTick(SPINNER_INTERVAL)]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::SearchCompleted { request, status, body } => {
            tracing::debug!(request = %request, status = status, bytes = body.len(), "search response received");
            let outcome = decode_response(*status, body);
            Ok((state.resolve_search(*request, outcome), vec![]))
        }
        Event::PermissionsResult { granted } => {
            state.web_access_denied = !*granted;
            if *granted {
                tracing::debug!("web access granted");
                return Ok((false, vec![]));
            }

            tracing::warn!("web access denied");
            state.reset();
            state.status = super::modes::SearchStatus::Failed {
                message: JiffyError::WebAccessDenied.to_string(),
            };
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{Focus, SearchStatus};
    use crate::giphy::SearchParams;
    use crate::ui::Theme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> AppState {
        let params = SearchParams {
            api_key: Some("test-key".to_string()),
            ..SearchParams::default()
        };
        AppState::with_rng(params, Theme::default(), StdRng::seed_from_u64(42))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn in_flight(state: &AppState) -> RequestId {
        match &state.status {
            SearchStatus::Loading { request, .. } => *request,
            other => panic!("expected loading, got {other:?}"),
        }
    }

    #[test]
    fn typing_builds_query_and_hint() {
        let mut state = state();
        type_text(&mut state, "ca");
        assert_eq!(state.hint_text(), "");
        type_text(&mut state, "t");
        assert_eq!(state.hint_text(), "Hit enter to search cat");

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query_text, "ca");
        assert_eq!(state.hint_text(), "");
    }

    #[test]
    fn backspace_on_empty_query_does_not_render() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Backspace).unwrap(), (false, vec![]));
    }

    #[test]
    fn enter_sends_search_and_arms_one_spinner() {
        let mut state = state();
        type_text(&mut state, "cats");

        let (render, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(render);
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            Action::SendSearch { url, context } => {
                assert!(url.contains("q=cats"));
                assert!(url.contains("api_key=test-key"));
                assert_eq!(crate::giphy::parse_context(context), Some((in_flight(&state), "cats".to_string())));
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert_eq!(actions[1], Action::ScheduleTick(SPINNER_INTERVAL));

        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn enter_with_short_query_is_ignored() {
        let mut state = state();
        type_text(&mut state, "ab");
        assert_eq!(handle_event(&mut state, &Event::Enter).unwrap(), (false, vec![]));
        assert!(!state.is_loading());
    }

    #[test]
    fn missing_api_key_fails_immediately() {
        let mut state = AppState::with_rng(SearchParams::default(), Theme::default(), StdRng::seed_from_u64(1));
        type_text(&mut state, "cats");

        let (render, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.hint_text(), "No Giphy api_key configured");
    }

    #[test]
    fn completed_search_appends_a_candidate() {
        let mut state = state();
        type_text(&mut state, "cats");
        handle_event(&mut state, &Event::Enter).unwrap();
        let request = in_flight(&state);

        let body = br#"{"data":[{"id":"a","title":"one","url":"https://giphy.com/a"},{"id":"b","title":"two","url":"https://giphy.com/b"}]}"#;
        let (render, _) = handle_event(
            &mut state,
            &Event::SearchCompleted { request, status: 200, body: body.to_vec() },
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.results.len(), 1);
        assert!(["a", "b"].contains(&state.results[0].id.as_str()));
        assert_eq!(state.hint_text(), "Hit enter to see more cats");
    }

    #[test]
    fn service_error_message_reaches_hint() {
        let mut state = state();
        type_text(&mut state, "cats");
        handle_event(&mut state, &Event::Enter).unwrap();
        let request = in_flight(&state);

        let body = br#"{"meta":{"status":403,"msg":"Forbidden"}}"#;
        handle_event(&mut state, &Event::SearchCompleted { request, status: 403, body: body.to_vec() }).unwrap();

        assert!(state.results.is_empty());
        assert_eq!(state.hint_text(), "Search failed (403): Forbidden");
    }

    #[test]
    fn stale_completion_does_not_render() {
        let mut state = state();
        type_text(&mut state, "cats");
        handle_event(&mut state, &Event::Enter).unwrap();
        let request = in_flight(&state);
        handle_event(&mut state, &Event::Clear).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::SearchCompleted { request, status: 200, body: br#"{"data":[{"id":"a"}]}"#.to_vec() },
        )
        .unwrap();
        assert!(!render);
        assert!(state.results.is_empty());
        assert_eq!(state.status, SearchStatus::Idle);
    }

    #[test]
    fn tick_rearms_only_while_loading() {
        let mut state = state();
        type_text(&mut state, "cats");
        handle_event(&mut state, &Event::Enter).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTick(SPINNER_INTERVAL)]);
        assert_eq!(state.spinner_frame, 1);

        let request = in_flight(&state);
        handle_event(&mut state, &Event::SearchCompleted { request, status: 200, body: b"{}".to_vec() }).unwrap();

        assert_eq!(handle_event(&mut state, &Event::Tick).unwrap(), (false, vec![]));
        assert!(!state.spinner_armed);
    }

    #[test]
    fn focus_moves_between_input_and_stack() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::FocusResults).unwrap(), (false, vec![]));

        type_text(&mut state, "cats");
        handle_event(&mut state, &Event::Enter).unwrap();
        let request = in_flight(&state);
        handle_event(
            &mut state,
            &Event::SearchCompleted { request, status: 200, body: br#"{"data":[{"id":"a"}]}"#.to_vec() },
        )
        .unwrap();

        assert_eq!(handle_event(&mut state, &Event::FocusResults).unwrap(), (true, vec![]));
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(state.selected_gif().map(|g| g.id.as_str()), Some("a"));

        handle_event(&mut state, &Event::FocusInput).unwrap();
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn clear_line_keeps_results() {
        let mut state = state();
        type_text(&mut state, "cats");
        handle_event(&mut state, &Event::Enter).unwrap();
        let request = in_flight(&state);
        handle_event(
            &mut state,
            &Event::SearchCompleted { request, status: 200, body: br#"{"data":[{"id":"a"}]}"#.to_vec() },
        )
        .unwrap();

        handle_event(&mut state, &Event::ClearLine).unwrap();
        assert_eq!(state.query_text, "");
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.hint_text(), "");
    }

    #[test]
    fn denied_permission_explains_itself() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(render);
        assert!(state.web_access_denied);
        assert_eq!(state.hint_text(), "Web access denied; searches cannot run");

        let mut state = self::state();
        assert_eq!(
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap(),
            (false, vec![])
        );
    }

    #[test]
    fn denied_web_access_fails_searches_without_sending() {
        let mut state = state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        type_text(&mut state, "cats");

        let (render, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.is_loading());
        assert!(!state.spinner_armed);
        assert_eq!(state.hint_text(), "Web access denied; searches cannot run");

        // Not stuck behind the overlap guard: a second Enter resolves the same way.
        let (render, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(render);
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::Clear).unwrap();
        type_text(&mut state, "dogs");
        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.hint_text(), "Web access denied; searches cannot run");
    }

    #[test]
    fn granting_web_access_later_allows_searches() {
        let mut state = state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        type_text(&mut state, "cats");

        let (_, actions) = handle_event(&mut state, &Event::Enter).unwrap();
        assert!(matches!(actions[0], Action::SendSearch { .. }));
        assert!(state.is_loading());
    }

    #[test]
    fn close_focus_passes_through() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::CloseFocus).unwrap(), (false, vec![Action::CloseFocus]));
    }
}
