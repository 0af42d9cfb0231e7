//! Highlighter answering per-line style requests from an editor
//!
//! The editor asks for one line at a time; the answer is written back
//! into the request. Nothing is cached between requests.

use super::classifier::LineClassifier;
use super::style::StyleRange;
use super::theme::Theme;

/// A request to style one line, answered in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStyleRequest {
    /// Text of the line, without its terminator
    pub line_text: String,
    /// Byte offset of the line's first character in the buffer
    pub line_offset: usize,
    /// Sorted style ranges, filled in by the highlighter
    pub styles: Vec<StyleRange>,
}

impl LineStyleRequest {
    pub fn new(line_text: impl Into<String>, line_offset: usize) -> Self {
        Self {
            line_text: line_text.into(),
            line_offset,
            styles: Vec::new(),
        }
    }
}

/// Binds a classifier to the theme pinned for one editor
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'a> {
    classifier: &'a LineClassifier,
    theme: &'a Theme,
}

impl<'a> Highlighter<'a> {
    pub fn new(classifier: &'a LineClassifier, theme: &'a Theme) -> Self {
        Self { classifier, theme }
    }

    /// Answer a style request with the sorted, themed ranges for its line
    pub fn on_line_style_requested(&self, request: &mut LineStyleRequest) {
        request.styles = self
            .classifier
            .classify_styled(&request.line_text, request.line_offset, self.theme);
    }

    /// Style every line of a buffer
    ///
    /// Offsets count line terminators (`\n` or `\r\n`), which are not
    /// part of any line's text.
    pub fn style_text(&self, text: &str) -> Vec<LineStyleRequest> {
        let mut offset = 0;
        let mut requests = Vec::new();
        for raw_line in text.split_inclusive('\n') {
            let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut request = LineStyleRequest::new(line, offset);
            self.on_line_style_requested(&mut request);
            requests.push(request);
            offset += raw_line.len();
        }
        requests
    }
}
