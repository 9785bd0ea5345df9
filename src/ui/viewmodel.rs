//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready data only: truncated
//! strings, selection flags, and the hint line already resolved to spinner,
//! text or error.
//!
//! # Example
//!
//! ```rust
//! use jiffy::ui::viewmodel::{FooterInfo, HeaderInfo, HintLine, InputInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Jiffy ".to_string(), is_clear_control: false },
//!     display_items: vec![],
//!     hidden_above: 0,
//!     input: InputInfo { query: "cats".to_string(), focused: true },
//!     hint: HintLine::Text("Hit enter to search cats".to_string()),
//!     footer: FooterInfo { keybindings: "Enter: search".to_string(), selected_link: None },
//! };
//! assert!(vm.display_items.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar: the app name, or the clear control once results exist.
    pub header: HeaderInfo,

    /// Visible slice of the result stack, oldest first.
    pub display_items: Vec<DisplayItem>,

    /// Number of older results scrolled out above the visible slice.
    pub hidden_above: usize,

    /// The text input box.
    pub input: InputInfo,

    /// The line under the input.
    pub hint: HintLine,

    /// Keybinding help and the selected result's link.
    pub footer: FooterInfo,
}

/// One row of the result stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based position in the stack.
    pub ordinal: usize,

    /// Gif title, truncated to the title column.
    pub title: String,

    /// Media URL, truncated from the front to fit.
    pub link: String,

    /// `WxH` of the original rendition, when known.
    pub dimensions: Option<String>,

    /// Whether the stack cursor is on this row.
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// `true` when the header acts as the clear control rather than the title.
    pub is_clear_control: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    /// Current query text.
    pub query: String,

    /// Whether the input has keyboard focus (draws the cursor).
    pub focused: bool,
}

/// What the hint line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintLine {
    /// A search is in flight.
    Spinner {
        /// Current animation frame.
        frame: &'static str,
        /// Term being searched.
        term: String,
    },

    /// Plain advisory text (possibly empty).
    Text(String),

    /// A failed search's description.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current focus.
    pub keybindings: String,

    /// Full link of the selected result while browsing the stack.
    pub selected_link: Option<String>,
}
