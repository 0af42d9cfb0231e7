//! asmlight - syntax highlighting for MIPS assembly
//!
//! Lines are classified into error, comment, punctuation, keyword,
//! register and immediate spans, sorted, and bound to a palette for an
//! editor to render.

pub mod config;
pub mod error;
pub mod highlight;

pub use config::Config;
pub use error::{Error, Result};
pub use highlight::{Highlighter, LineClassifier, LineStyleRequest, StyleCategory, Theme};
