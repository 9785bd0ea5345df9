//! Jiffy: a Zellij plugin that builds a stack of random GIFs from Giphy searches.
//!
//! Type a term, hit Enter, and one GIF picked at random from the matches is
//! appended to the stack. Enter again adds another; `Esc` clears everything.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Session state and transitions                    │
//! │  - Event handling / actions                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Giphy Layer   │
//! │ (ui/)         │                     │ (giphy/)      │
//! │ - Rendering   │                     │ - Request URL │
//! │ - Theming     │                     │ - Response    │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types, Gif model (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP JSON file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/jiffy.wasm" {
//!         api_key "your-giphy-key"
//!         rating "g"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use jiffy::{handle_event, initialize, Action, Config, Event};
//! use std::collections::BTreeMap;
//!
//! let mut options = BTreeMap::new();
//! options.insert("api_key".to_string(), "secret".to_string());
//! let mut state = initialize(&Config::from_zellij(&options));
//!
//! for c in "otters".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Enter)?;
//! assert!(matches!(&actions[0], Action::SendSearch { url, .. } if url.contains("q=otters")));
//! # Ok::<(), jiffy::JiffyError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod giphy;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus, SearchStatus};
pub use domain::{Gif, JiffyError, Result};
pub use ui::Theme;

use giphy::{SearchParams, GIPHY_SEARCH_ENDPOINT};
use std::collections::BTreeMap;

/// Largest page Giphy serves for one search.
const MAX_LIMIT: u32 = 50;

/// Plugin configuration parsed from the Zellij plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Giphy API key. Without one every search fails with a hint.
    pub api_key: Option<String>,

    /// Search endpoint. Default: the public Giphy search URL.
    pub endpoint: String,

    /// Candidates requested per search, 1 to 50. Default: 25
    pub limit: u32,

    /// Content rating. Default: `"g"`
    pub rating: String,

    /// Query language. Default: `"en"`
    pub lang: String,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let params = SearchParams::default();
        Self {
            api_key: None,
            endpoint: GIPHY_SEARCH_ENDPOINT.to_string(),
            limit: params.limit,
            rating: params.rating,
            lang: params.lang,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Blank values count as absent, and an unparsable or out-of-range `limit`
    /// falls back to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jiffy::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "abc".to_string());
    /// map.insert("limit".to_string(), "10".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("abc"));
    /// assert_eq!(config.limit, 10);
    /// assert_eq!(config.rating, "g");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        let limit = get("limit")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| (1..=MAX_LIMIT).contains(n))
            .unwrap_or(defaults.limit);

        Self {
            api_key: get("api_key"),
            endpoint: get("endpoint").unwrap_or(defaults.endpoint),
            limit,
            rating: get("rating").unwrap_or(defaults.rating),
            lang: get("lang").unwrap_or(defaults.lang),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Query parameters for every search this session sends.
    #[must_use]
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            limit: self.limit,
            offset: 0,
            rating: self.rating.clone(),
            lang: self.lang.clone(),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    /// Failures are logged and fall through to the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            match Theme::from_file(infrastructure::sandbox_path(file)) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %file, error = %e, "failed to load theme file, using default"),
            }
        } else if let Some(name) = &self.theme_name {
            match Theme::from_name(name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Creates an empty session from the configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        has_api_key = config.api_key.is_some(),
        limit = config.limit,
        "initializing jiffy"
    );

    AppState::new(config.search_params(), config.resolve_theme())
}
