//! Infrastructure layer for filesystem interactions in the Zellij sandbox.

pub mod paths;

pub use paths::{get_data_dir, sandbox_path};
