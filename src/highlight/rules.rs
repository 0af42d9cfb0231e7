//! Pattern rules for assembly highlighting
//!
//! The fixed shapes (trailing whitespace, token separators, punctuation,
//! numeric literals) live in [`PatternLibrary`]. The comment and
//! statement-separator shapes belong to the assembly dialect and are
//! supplied through a [`Grammar`].

use regex::{Matches, Regex};

use crate::error::{Error, Result};

/// Punctuation marks that may appear between tokens
const PUNCTUATION_PATTERNS: [&str; 4] = [":", ",", r"\(", r"\)"];

/// ASCII whitespace only; other Unicode spaces stay inside tokens
const WHITESPACE: &str = r"[ \t\n\x0B\x0C\r]";

/// Hex, octal, binary and decimal literals, whole token only.
/// Matched against upper-cased text.
const IMMEDIATE_PATTERN: &str = r"^(?:0X[0-9A-F]{1,8}|0[0-7]{1,11}|0B[01]{1,32}|[0-9]{1,10})$";

/// A named, compiled pattern
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging and error reports
    pub name: &'static str,
    /// Compiled regex pattern
    pub pattern: Regex,
}

impl PatternRule {
    /// Compile a new pattern rule
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(|regex| Self { name, pattern: regex })
            .map_err(|source| Error::Pattern { name, source })
    }

    /// Iterate over successive non-overlapping matches
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.pattern.find_iter(text)
    }

    /// Check whether the pattern matches anywhere in text
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Build the token separator: optional whitespace around one punctuation
/// mark, or a bare whitespace run.
fn token_separator_pattern() -> String {
    let mut pattern = String::new();
    for punctuation in PUNCTUATION_PATTERNS {
        pattern.push_str(&format!("({ws}*{punctuation}{ws}*)|", ws = WHITESPACE));
    }
    pattern.push_str(&format!("({}+)", WHITESPACE));
    pattern
}

/// The dialect-independent shapes used by the classifier
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    pub trailing_whitespace: PatternRule,
    pub token_separator: PatternRule,
    /// One rule per punctuation mark
    pub punctuation: Vec<PatternRule>,
    pub immediate: PatternRule,
}

impl PatternLibrary {
    /// Compile the fixed pattern set
    pub fn new() -> Result<Self> {
        let punctuation = PUNCTUATION_PATTERNS
            .iter()
            .map(|pattern| PatternRule::new("punctuation", pattern))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            trailing_whitespace: PatternRule::new("trailing whitespace", &format!("{}+$", WHITESPACE))?,
            token_separator: PatternRule::new("token separator", &token_separator_pattern())?,
            punctuation,
            immediate: PatternRule::new("immediate", IMMEDIATE_PATTERN)?,
        })
    }
}

/// Comment and statement-separator shapes of an assembly dialect
///
/// Both shapes are matched against the ASCII upper-cased line, so a
/// letter in a shape must be written in upper case (`REM.*`, not `rem.*`).
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Dialect name (e.g., "mips", "gas", "custom")
    pub name: String,
    /// Start of a comment; the comment runs to end of line
    pub comment: PatternRule,
    /// Separator between statements on one line
    pub statement_separator: PatternRule,
}

impl Grammar {
    /// Create a grammar from custom shapes
    ///
    /// Shapes see upper-cased text; see [`Grammar`].
    pub fn new(name: &str, comment: &str, statement_separator: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            comment: PatternRule::new("comment", comment)?,
            statement_separator: PatternRule::new("statement separator", statement_separator)?,
        })
    }

    /// `#` and `;` both start a comment; `|` separates statements
    pub fn mips() -> Result<Self> {
        Self::new("mips", r"[#;].*", r"\|")
    }

    /// GNU as style: `#` comments, `;` separates statements
    pub fn gas() -> Result<Self> {
        Self::new("gas", r"#.*", ";")
    }

    /// Look up a built-in grammar by name
    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mips" => Self::mips(),
            "gas" => Self::gas(),
            _ => Err(Error::UnknownGrammar(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `(start, end)` of the first match
    fn first_match(rule: &PatternRule, text: &str) -> Option<(usize, usize)> {
        rule.pattern.find(text).map(|m| (m.start(), m.end()))
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternRule::new("comment", "(").unwrap_err();
        assert!(matches!(err, Error::Pattern { name: "comment", .. }));
    }

    #[test]
    fn test_token_separator_shape() {
        let patterns = PatternLibrary::new().unwrap();
        let separators: Vec<&str> = patterns
            .token_separator
            .find_iter("ADD $1 , $2,$3 (  $4)")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(separators, vec![" ", " , ", ",", " (  ", ")"]);
    }

    #[test]
    fn test_trailing_whitespace_is_maximal() {
        let patterns = PatternLibrary::new().unwrap();
        let m = patterns.trailing_whitespace.pattern.find("A  B \t ").unwrap();
        assert_eq!((m.start(), m.end()), (4, 7));
        assert!(patterns.trailing_whitespace.pattern.find("A  B").is_none());
    }

    #[test]
    fn test_unicode_spaces_are_not_whitespace() {
        let patterns = PatternLibrary::new().unwrap();
        assert!(first_match(&patterns.trailing_whitespace, "NOP\u{00A0}").is_none());
        assert!(first_match(&patterns.token_separator, "ADD\u{2003}$T0").is_none());
        assert_eq!(first_match(&patterns.trailing_whitespace, "NOP\x0B\x0C"), Some((3, 5)));
    }

    #[test]
    fn test_immediate_shapes() {
        let patterns = PatternLibrary::new().unwrap();
        let immediate = &patterns.immediate;
        for token in ["0X1A", "0XDEADBEEF", "017", "0B1010", "42", "0", "4294967295"] {
            assert!(immediate.is_match(token), "{} should be an immediate", token);
        }
        for token in ["0X1A2B3C4D5", "0X", "0B", "0B102", "12345678901", "1A", "-1", "X1"] {
            assert!(!immediate.is_match(token), "{} should not be an immediate", token);
        }
    }

    #[test]
    fn test_grammar_presets() {
        let mips = Grammar::mips().unwrap();
        assert_eq!(first_match(&mips.comment, "ADD ; x"), Some((4, 7)));
        assert_eq!(first_match(&mips.comment, "ADD # x"), Some((4, 7)));
        assert_eq!(first_match(&mips.statement_separator, "NOP | NOP"), Some((4, 5)));

        let gas = Grammar::gas().unwrap();
        assert_eq!(first_match(&gas.statement_separator, "NOP; NOP"), Some((3, 4)));
        assert!(first_match(&gas.comment, "NOP; NOP").is_none());
    }

    #[test]
    fn test_grammar_by_name() {
        assert_eq!(Grammar::by_name("GAS").unwrap().name, "gas");
        assert!(matches!(Grammar::by_name("z80"), Err(Error::UnknownGrammar(_))));
    }
}
