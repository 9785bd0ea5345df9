//! Terminal user interface.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Frame → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready snapshot of the state
//! - [`renderer`]: Entry point tying the pieces together
//! - [`components`]: Per-region renderers
//! - [`helpers`]: Cursor positioning and padding
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{DisplayItem, FooterInfo, HeaderInfo, HintLine, InputInfo, UIViewModel};
