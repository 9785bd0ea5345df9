//! Status and focus state types for the application.
//!
//! This module defines the small state machines that make up a session besides
//! the result list itself:
//!
//! - [`SearchStatus`]: what the hint line says and whether a search is in flight
//! - [`Focus`]: where keystrokes go (the text input or the result stack)
//!
//! # State Machine
//!
//! ```text
//!            type ≥3 chars             Enter
//!   Idle ───────────────▶ Prompt ───────────────▶ Loading
//!    ▲   ◀─────────────── │                        │  │
//!    │    type <3 chars   │                  found │  │ failed / empty
//!    │                    ▼                        ▼  ▼
//!    └──── reset ──── Succeeded / Failed ◀─────────────
//! ```
//!
//! Typing from `Succeeded` or `Failed` moves back to `Prompt` or `Idle`.
//! `reset` returns to `Idle` from anywhere, including `Loading`.

use crate::giphy::RequestId;

/// Minimum query length, in characters, before a search may fire.
pub const MIN_QUERY_CHARS: usize = 3;

/// Search lifecycle and hint source.
///
/// Each variant carries exactly the data its hint needs, so a loading state
/// with a leftover error message cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Nothing to say: empty or too-short input.
    #[default]
    Idle,

    /// Input is long enough; tells the user Enter will search it.
    Prompt {
        /// Current query text.
        term: String,
    },

    /// A search is in flight.
    Loading {
        /// The term being searched.
        term: String,
        /// Generation of the in-flight request. Responses with any other id are stale.
        request: RequestId,
    },

    /// The last search appended a result.
    Succeeded {
        /// The term that was searched.
        term: String,
    },

    /// The last search failed or found nothing.
    Failed {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl SearchStatus {
    /// Status the input rule derives from a raw input value.
    #[must_use]
    pub fn for_input(raw: &str) -> Self {
        if meets_min_length(raw) {
            Self::Prompt {
                term: raw.to_string(),
            }
        } else {
            Self::Idle
        }
    }

    /// Hint text shown when not loading.
    #[must_use]
    pub fn hint_text(&self) -> String {
        match self {
            Self::Idle | Self::Loading { .. } => String::new(),
            Self::Prompt { term } => format!("Hit enter to search {term}"),
            Self::Succeeded { term } => format!("Hit enter to see more {term}"),
            Self::Failed { message } => message.clone(),
        }
    }

    /// `true` exactly while a search is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Whether `raw` is long enough to search (more than two characters).
#[must_use]
pub fn meets_min_length(raw: &str) -> bool {
    raw.chars().count() >= MIN_QUERY_CHARS
}

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The text input has focus; printable keys edit the query.
    #[default]
    Input,

    /// The result stack has focus; j/k move the cursor.
    Results,
}
