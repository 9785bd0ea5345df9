//! Domain layer for the Jiffy plugin.
//!
//! Core types independent of Zellij APIs and rendering.
//!
//! - [`error`]: Error types and result aliases
//! - [`gif`]: The search result record

pub mod error;
pub mod gif;

pub use error::{JiffyError, Result};
pub use gif::{Gif, GifImages, Rendition};
