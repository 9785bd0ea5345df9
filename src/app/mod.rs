//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain/giphy layers:
//!
//! ```text
//! Zellij event → Event → handle_event → AppState transitions → Vec<Action> → Zellij
//!                   ↑                                               │
//!                   └───────────── WebRequestResult / Timer ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing
//! - [`modes`]: Search status and focus types
//! - [`state`]: Session state, transitions, and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, SPINNER_INTERVAL};
pub use modes::{Focus, SearchStatus, MIN_QUERY_CHARS};
pub use state::{AppState, COMMIT_KEY};
