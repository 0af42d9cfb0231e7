//! Line classifier
//!
//! Turns one line of assembly into typed spans. Classification runs on
//! an ASCII upper-cased copy of the line, which keeps byte offsets
//! identical to the original text.
//!
//! Order of work on a line:
//! 1. trailing whitespace becomes an error span and is cut off
//! 2. a comment runs to end of line and is cut off
//! 3. the rest is split into statements on the grammar's separator
//! 4. each statement is split into tokens on whitespace and punctuation
//! 5. each token is looked up as keyword, register or immediate

use log::trace;

use crate::error::Result;
use super::category::StyleCategory;
use super::rules::{Grammar, PatternLibrary};
use super::sort::sort_spans;
use super::style::{Span, StyleRange};
use super::theme::Theme;
use super::vocabulary::Vocabulary;

/// Classifies lines against a vocabulary and grammar
#[derive(Debug, Clone)]
pub struct LineClassifier {
    vocabulary: Vocabulary,
    patterns: PatternLibrary,
    grammar: Grammar,
}

impl LineClassifier {
    /// Create a classifier
    pub fn new(vocabulary: Vocabulary, grammar: Grammar) -> Result<Self> {
        Ok(Self {
            vocabulary,
            patterns: PatternLibrary::new()?,
            grammar,
        })
    }

    /// Classifier for the built-in MIPS tables and grammar
    pub fn mips() -> Result<Self> {
        Self::new(Vocabulary::mips(), Grammar::mips()?)
    }

    /// Classify one line starting at `line_offset` in the buffer
    ///
    /// The result is in production order; see [`sort_spans`] for the
    /// order editors expect. Text that matches nothing gets no span.
    pub fn classify(&self, line: &str, line_offset: usize) -> Vec<Span> {
        let upper = line.to_ascii_uppercase();
        let mut line = upper.as_str();
        let mut spans = Vec::new();

        if let Some(m) = self.patterns.trailing_whitespace.pattern.find(line) {
            push_span(&mut spans, line_offset + m.start(), m.len(), StyleCategory::Error);
            line = &line[..m.start()];
        }

        if let Some(m) = self.grammar.comment.pattern.find(line) {
            push_span(&mut spans, line_offset + m.start(), line.len() - m.start(), StyleCategory::Comment);
            line = &line[..m.start()];
        }

        let mut statement_start = 0;
        for separator in self.grammar.statement_separator.find_iter(line) {
            self.classify_statement(
                &line[statement_start..separator.start()],
                line_offset + statement_start,
                &mut spans,
            );
            push_span(&mut spans, line_offset + separator.start(), separator.len(), StyleCategory::Punctuation);
            statement_start = separator.end();
        }
        self.classify_statement(&line[statement_start..], line_offset + statement_start, &mut spans);

        trace!("line at {}: {} spans", line_offset, spans.len());
        spans
    }

    /// Classify a line, sort the spans and bind them to `theme`
    pub fn classify_styled(&self, line: &str, line_offset: usize, theme: &Theme) -> Vec<StyleRange> {
        let mut spans = self.classify(line, line_offset);
        sort_spans(&mut spans);
        spans.iter().map(|span| theme.for_span(span)).collect()
    }

    fn classify_statement(&self, statement: &str, offset: usize, spans: &mut Vec<Span>) {
        let mut token_start = 0;
        for separator in self.patterns.token_separator.find_iter(statement) {
            self.classify_token(&statement[token_start..separator.start()], offset + token_start, spans);
            self.classify_punctuation(separator.as_str(), offset + separator.start(), spans);
            token_start = separator.end();
        }
        self.classify_token(&statement[token_start..], offset + token_start, spans);
    }

    fn classify_token(&self, token: &str, offset: usize, spans: &mut Vec<Span>) {
        if token.is_empty() {
            return;
        }
        let category = if self.vocabulary.is_keyword(token) {
            StyleCategory::Keyword
        } else if self.vocabulary.is_register(token) {
            StyleCategory::Register
        } else if self.patterns.immediate.is_match(token) {
            StyleCategory::Immediate
        } else {
            return;
        };
        push_span(spans, offset, token.len(), category);
    }

    /// Mark every punctuation mark inside a token separator
    fn classify_punctuation(&self, separator: &str, offset: usize, spans: &mut Vec<Span>) {
        for rule in &self.patterns.punctuation {
            for m in rule.find_iter(separator) {
                push_span(spans, offset + m.start(), m.len(), StyleCategory::Punctuation);
            }
        }
    }
}

/// Append a span unless it is empty
fn push_span(spans: &mut Vec<Span>, start: usize, length: usize, category: StyleCategory) {
    if length > 0 {
        spans.push(Span::new(start, length, category));
    }
}
