//! # App Module
//!
//! Entry-point re-exports for the UI tree, so the binary and tests can pull
//! everything through one path.

pub use crate::ui::*;
