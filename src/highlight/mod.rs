//! Assembly syntax highlighting
//!
//! This module classifies lines of assembly source into styled spans:
//! - Vocabulary and pattern tables built once at startup
//! - A pure per-line classifier
//! - Palettes binding each category to a visual template
//! - A highlighter answering an editor's per-line style requests

mod category;
mod classifier;
mod highlighter;
pub mod mips;
mod rules;
mod sort;
mod style;
mod theme;
mod vocabulary;

pub use category::StyleCategory;
pub use classifier::LineClassifier;
pub use highlighter::{Highlighter, LineStyleRequest};
pub use rules::{Grammar, PatternLibrary, PatternRule};
pub use sort::{is_sorted, sort_spans, sorted};
pub use style::{FontWeight, Rgb, Span, StyleRange, StyleTemplate, Underline, UnderlineStyle};
pub use theme::{is_dark_background, Theme};
pub use vocabulary::{Vocabulary, DIRECTIVE_PREFIX, REGISTER_SIGIL};
