//! Style categories for assembly highlighting
//!
//! Every span produced by the classifier carries exactly one of these.

/// Semantic category of a classified span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleCategory {
    /// Trailing whitespace at the end of a line
    Error,
    /// Comment from its start marker to end of line
    Comment,
    /// Statement separators and `:` `,` `(` `)`
    Punctuation,
    /// Operation mnemonics and directives
    Keyword,
    /// Register references (`$T0`, `$8`)
    Register,
    /// Numeric literals
    Immediate,
}

impl StyleCategory {
    /// All categories, in declaration order
    pub const ALL: [StyleCategory; 6] = [
        StyleCategory::Error,
        StyleCategory::Comment,
        StyleCategory::Punctuation,
        StyleCategory::Keyword,
        StyleCategory::Register,
        StyleCategory::Immediate,
    ];

    /// Position of this category in [`StyleCategory::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            StyleCategory::Error => "error",
            StyleCategory::Comment => "comment",
            StyleCategory::Punctuation => "punctuation",
            StyleCategory::Keyword => "keyword",
            StyleCategory::Register => "register",
            StyleCategory::Immediate => "immediate",
        }
    }

    /// Parse a category from its configuration name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "error" => Some(StyleCategory::Error),
            "comment" => Some(StyleCategory::Comment),
            "punctuation" => Some(StyleCategory::Punctuation),
            "keyword" => Some(StyleCategory::Keyword),
            "register" => Some(StyleCategory::Register),
            "immediate" => Some(StyleCategory::Immediate),
            _ => None,
        }
    }
}
