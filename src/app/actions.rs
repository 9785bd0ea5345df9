//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij directly. It returns a `Vec<Action>` and
//! the plugin shim executes them in order after the state change is done.
//!
//! # Example
//!
//! ```rust
//! use jiffy::app::Action;
//!
//! let actions = vec![Action::ScheduleTick(0.1), Action::CloseFocus];
//! assert_eq!(actions.len(), 2);
//! ```

use std::collections::BTreeMap;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Issues a GET web request for a search.
    ///
    /// `context` comes back untouched with the response and identifies the
    /// request generation.
    SendSearch {
        /// Fully encoded search URL.
        url: String,
        /// Request context echoed by the host.
        context: BTreeMap<String, String>,
    },

    /// Arms a timer that delivers a spinner tick after the given seconds.
    ScheduleTick(f64),

    /// Hides the plugin pane.
    CloseFocus,
}
