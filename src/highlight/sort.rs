//! Span ordering
//!
//! Editors expect style ranges ordered by start offset. Ties go to the
//! shorter span. Nothing is merged or dropped.

use super::style::Span;

/// Sort spans in place by `(start, length)`; stable
pub fn sort_spans(spans: &mut [Span]) {
    spans.sort_by_key(|span| (span.start, span.length));
}

/// Sort an owned list of spans
pub fn sorted(mut spans: Vec<Span>) -> Vec<Span> {
    sort_spans(&mut spans);
    spans
}

/// Check that spans are in the order [`sort_spans`] produces
pub fn is_sorted(spans: &[Span]) -> bool {
    spans
        .windows(2)
        .all(|pair| (pair[0].start, pair[0].length) <= (pair[1].start, pair[1].length))
}
