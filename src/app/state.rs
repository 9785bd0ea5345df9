//! Session state and its transitions.
//!
//! This module defines [`AppState`], the single mutable aggregate of a session,
//! together with every transition that may change it. Each transition reads the
//! state as it is at the moment it runs; nothing holds a copy across the
//! asynchronous gap between issuing a search and receiving its response.
//!
//! # Transitions
//!
//! - [`AppState::on_input_change`]: query text edited
//! - [`AppState::on_commit_key`]: key pressed with the current query
//! - [`AppState::begin_search`] / [`AppState::resolve_search`]: the two halves
//!   of a search, split where the request leaves the plugin
//! - [`AppState::reset`]: back to an empty session
//!
//! # Example
//!
//! ```rust
//! use jiffy::app::AppState;
//! use jiffy::giphy::SearchParams;
//! use jiffy::ui::Theme;
//! use jiffy::Gif;
//!
//! let mut state = AppState::new(SearchParams::default(), Theme::default());
//! state.on_input_change("cats");
//! assert_eq!(state.hint_text(), "Hit enter to search cats");
//!
//! let request = state.on_commit_key("cats", "Enter").unwrap();
//! assert!(state.is_loading());
//!
//! state.resolve_search(request.id, Ok(vec![Gif::new("a", "cat")]));
//! assert_eq!(state.results.len(), 1);
//! assert_eq!(state.hint_text(), "Hit enter to see more cats");
//! ```

use super::modes::{meets_min_length, Focus, SearchStatus};
use crate::domain::{Gif, JiffyError, Result};
use crate::giphy::{RequestId, SearchParams, SearchRequest};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, HintLine, InputInfo, UIViewModel};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Key name that commits a search.
pub const COMMIT_KEY: &str = "Enter";

/// Frames of the loading indicator, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows used by everything except the result stack: blank line, header,
/// border, input box (3), hint, border, footer.
const CHROME_ROWS: usize = 9;

/// Central session state.
///
/// Owned by the plugin and mutated only through the transition methods below
/// (the handler and tests are the only callers). Fields are public for
/// inspection; the invariants are maintained by the methods.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Literal contents of the search field.
    pub query_text: String,

    /// Search lifecycle; the hint text and loading flag are derived from it.
    pub status: SearchStatus,

    /// Accumulated results, most recent last. Grows by one per successful
    /// search, emptied only by [`AppState::reset`].
    pub results: Vec<Gif>,

    /// Where keystrokes are routed.
    pub focus: Focus,

    /// Cursor within `results` while the stack has focus.
    pub selected_index: usize,

    /// Generation handed to the next search.
    pub next_request: RequestId,

    /// Current loading indicator frame.
    pub spinner_frame: usize,

    /// Whether a spinner tick is already scheduled, so a new search does not
    /// start a second timer chain.
    pub spinner_armed: bool,

    /// Set once the user refuses web access. Survives [`AppState::reset`].
    pub web_access_denied: bool,

    /// Fixed parameters sent with every search.
    pub params: SearchParams,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Source of the random pick among candidates.
    rng: StdRng,
}

impl AppState {
    /// Creates an empty session with an entropy-seeded random source.
    #[must_use]
    pub fn new(params: SearchParams, theme: Theme) -> Self {
        Self::with_rng(params, theme, StdRng::from_entropy())
    }

    /// Creates an empty session with a caller-provided random source.
    ///
    /// Tests pass a seeded generator to make the pick reproducible.
    #[must_use]
    pub fn with_rng(params: SearchParams, theme: Theme, rng: StdRng) -> Self {
        Self {
            query_text: String::new(),
            status: SearchStatus::Idle,
            results: Vec::new(),
            focus: Focus::Input,
            selected_index: 0,
            next_request: RequestId::first(),
            spinner_frame: 0,
            spinner_armed: false,
            web_access_denied: false,
            params,
            theme,
            rng,
        }
    }

    /// Advisory text under the input; empty while loading (a spinner is shown).
    #[must_use]
    pub fn hint_text(&self) -> String {
        self.status.hint_text()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Records new input text and re-derives the hint from its length.
    ///
    /// While a search is in flight only the text changes: the spinner stays up
    /// and the search outcome decides the next hint.
    pub fn on_input_change(&mut self, raw: &str) {
        raw.clone_into(&mut self.query_text);

        if self.is_loading() {
            tracing::trace!(query_len = raw.len(), "input changed during search");
            return;
        }

        self.status = SearchStatus::for_input(raw);
    }

    /// Gate for the commit action.
    ///
    /// Starts a search only for [`COMMIT_KEY`] with a long-enough value and
    /// no search already in flight. Returns the request to send, if any.
    pub fn on_commit_key(&mut self, raw: &str, key: &str) -> Option<SearchRequest> {
        if key != COMMIT_KEY || !meets_min_length(raw) {
            return None;
        }

        if let SearchStatus::Loading { request, .. } = &self.status {
            tracing::debug!(in_flight = %request, "commit ignored while a search is in flight");
            return None;
        }

        Some(self.begin_search(raw))
    }

    /// First half of a search: enters `Loading` and allocates a request.
    pub fn begin_search(&mut self, term: &str) -> SearchRequest {
        let id = self.next_request;
        self.next_request = id.next();
        self.spinner_frame = 0;
        self.status = SearchStatus::Loading {
            term: term.to_string(),
            request: id,
        };

        tracing::debug!(request = %id, term = %term, "search started");
        SearchRequest::new(id, term, self.params.clone())
    }

    /// Second half of a search: applies the outcome of request `id`.
    ///
    /// Returns `false` (and changes nothing) when `id` is not the search
    /// currently in flight, e.g. after a reset.
    ///
    /// A non-empty candidate list appends one candidate picked uniformly at
    /// random. An empty list counts as [`JiffyError::NothingFound`]. Failures
    /// leave `results` untouched and become the hint.
    pub fn resolve_search(&mut self, id: RequestId, outcome: Result<Vec<Gif>>) -> bool {
        let term = match &self.status {
            SearchStatus::Loading { term, request } if *request == id => term.clone(),
            other => {
                tracing::debug!(request = %id, status = ?other, "discarding stale search response");
                return false;
            }
        };

        let picked = outcome.and_then(|candidates| {
            candidates
                .choose(&mut self.rng)
                .cloned()
                .ok_or_else(|| JiffyError::NothingFound { term: term.clone() })
        });

        match picked {
            Ok(gif) => {
                tracing::debug!(request = %id, gif_id = %gif.id, "search succeeded");
                self.results.push(gif);
                self.status = SearchStatus::Succeeded { term };
            }
            Err(e) => {
                tracing::debug!(request = %id, error = %e, "search failed");
                self.status = SearchStatus::Failed {
                    message: e.to_string(),
                };
            }
        }

        true
    }

    /// Clears the session and returns focus to the input.
    ///
    /// An in-flight search is abandoned: its response no longer matches the
    /// status and will be discarded.
    pub fn reset(&mut self) {
        if let SearchStatus::Loading { request, .. } = &self.status {
            tracing::debug!(abandoned = %request, "reset during search");
        }

        self.query_text.clear();
        self.status = SearchStatus::Idle;
        self.results.clear();
        self.selected_index = 0;
        self.focus = Focus::Input;
    }

    /// Moves the stack cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves the stack cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_gif(&self) -> Option<&Gif> {
        match self.focus {
            Focus::Results => self.results.get(self.selected_index),
            Focus::Input => None,
        }
    }

    /// Gives the stack focus, landing on the most recent result.
    ///
    /// Returns `false` when there is nothing to focus.
    pub fn focus_results(&mut self) -> bool {
        if self.results.is_empty() {
            return false;
        }
        self.focus = Focus::Results;
        self.selected_index = self.results.len() - 1;
        true
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// Advances the loading indicator. Returns whether it is still spinning.
    pub fn advance_spinner(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        true
    }

    /// Computes a renderable view model for the given terminal size.
    ///
    /// The stack is windowed: with the input focused the most recent results
    /// are shown (they sit right above the input); with the stack focused the
    /// window follows the cursor.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let total = self.results.len();

        let (visible_start, visible_end) = match self.focus {
            Focus::Input => (total.saturating_sub(available_rows), total),
            Focus::Results => {
                let mut start = self.selected_index.saturating_sub(available_rows / 2);
                let end = (start + available_rows).min(total);
                if end - start < available_rows {
                    start = end.saturating_sub(available_rows);
                }
                (start, end)
            }
        };

        let display_items = self.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, gif)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_display_item(
                    gif,
                    absolute_idx,
                    self.focus == Focus::Results && absolute_idx == self.selected_index,
                    cols,
                )
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            display_items,
            hidden_above: visible_start,
            input: InputInfo {
                query: self.query_text.clone(),
                focused: self.focus == Focus::Input,
            },
            hint: self.compute_hint(),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(gif: &Gif, index: usize, is_selected: bool, cols: usize) -> DisplayItem {
        const TITLE_COLUMN_WIDTH: usize = 36;
        const SAFETY_MARGIN: usize = 8;

        let title = truncate_end(gif.display_title(), TITLE_COLUMN_WIDTH - 1);
        let max_link_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + SAFETY_MARGIN);

        DisplayItem {
            ordinal: index + 1,
            title,
            link: truncate_start(gif.media_url(), max_link_width),
            dimensions: gif.dimensions(),
            is_selected,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        if self.has_results() {
            HeaderInfo {
                title: format!(" [Esc] clear ({}) ", self.results.len()),
                is_clear_control: true,
            }
        } else {
            HeaderInfo {
                title: " Jiffy ".to_string(),
                is_clear_control: false,
            }
        }
    }

    fn compute_hint(&self) -> HintLine {
        match &self.status {
            SearchStatus::Loading { term, .. } => HintLine::Spinner {
                frame: SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
                term: term.clone(),
            },
            SearchStatus::Failed { message } => HintLine::Error(message.clone()),
            other => HintLine::Text(other.hint_text()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.focus, self.has_results()) {
            (Focus::Input, true) => "Enter: search  Tab: browse  Ctrl+u: clear line  Esc: clear  Ctrl+c: quit",
            (Focus::Input, false) => "Enter: search  Ctrl+u: clear line  Ctrl+c: quit",
            (Focus::Results, _) => "j/k: navigate  /: type  Esc: clear  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            selected_link: self
                .selected_gif()
                .map(Gif::media_url)
                .filter(|url| !url.is_empty())
                .map(String::from),
        }
    }
}

/// Cuts `text` to `max` characters, marking the cut with "...".
fn truncate_end(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Cuts `text` to `max` characters from the front, keeping the tail.
fn truncate_start(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{tail}")
}
