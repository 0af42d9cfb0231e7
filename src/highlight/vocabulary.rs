//! Keyword and register vocabularies
//!
//! Built once at startup from the assembler's operation, directive and
//! register tables. Entries are stored upper-cased, so lookups expect
//! upper-cased tokens.

use std::collections::HashSet;

use log::debug;

use super::mips;

/// Prefix marking a directive name
pub const DIRECTIVE_PREFIX: char = '.';

/// Sigil marking a register reference
pub const REGISTER_SIGIL: char = '$';

/// Immutable lookup tables for keywords and registers
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    keywords: HashSet<String>,
    registers: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from name enumerations
    ///
    /// Keywords are the operation names plus each directive name behind
    /// [`DIRECTIVE_PREFIX`]. Every register contributes two forms behind
    /// [`REGISTER_SIGIL`]: its ordinal (position in `registers`) and its
    /// name. Entries that collide after upper-casing are kept once.
    pub fn build<O, D, R>(operations: O, directives: D, registers: R) -> Self
    where
        O: IntoIterator,
        O::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        let mut duplicates = 0;

        for operation in operations {
            if !vocabulary.keywords.insert(operation.as_ref().to_ascii_uppercase()) {
                duplicates += 1;
            }
        }
        for directive in directives {
            let keyword = format!("{}{}", DIRECTIVE_PREFIX, directive.as_ref()).to_ascii_uppercase();
            if !vocabulary.keywords.insert(keyword) {
                duplicates += 1;
            }
        }
        for (ordinal, register) in registers.into_iter().enumerate() {
            let numeric = format!("{}{}", REGISTER_SIGIL, ordinal);
            let symbolic = format!("{}{}", REGISTER_SIGIL, register.as_ref()).to_ascii_uppercase();
            for form in [numeric, symbolic] {
                if !vocabulary.registers.insert(form) {
                    duplicates += 1;
                }
            }
        }

        debug!(
            "built vocabulary: {} keywords, {} register forms, {} duplicates dropped",
            vocabulary.keyword_count(),
            vocabulary.register_count(),
            duplicates
        );
        vocabulary
    }

    /// Vocabulary for the built-in MIPS tables
    pub fn mips() -> Self {
        Self::build(mips::OPERATIONS, mips::DIRECTIVES, mips::REGISTERS)
    }

    /// Check if an upper-cased token is a mnemonic or directive
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keywords.contains(token)
    }

    /// Check if an upper-cased token is a register reference
    pub fn is_register(&self, token: &str) -> bool {
        self.registers.contains(token)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn register_count(&self) -> usize {
        self.registers.len()
    }
}
