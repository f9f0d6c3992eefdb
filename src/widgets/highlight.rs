//! Keyword highlighting for suggestion labels

use ratatui::style::Style;
use ratatui::text::Span;

/// Byte ranges of every non-overlapping, ASCII case-insensitive occurrence of
/// `keyword` in `text`
pub fn match_ranges(text: &str, keyword: &str) -> Vec<(usize, usize)> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }

    // ASCII lowercasing keeps byte offsets identical to `text`
    let haystack = text.to_ascii_lowercase();
    let needle = keyword.to_ascii_lowercase();

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Split `text` into spans, emphasizing the parts that match `keyword`
pub fn highlight_spans(
    text: &str,
    keyword: &str,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for (start, end) in match_ranges(text, keyword) {
        if start > last {
            spans.push(Span::styled(text[last..start].to_string(), base));
        }
        spans.push(Span::styled(text[start..end].to_string(), emphasis));
        last = end;
    }
    if last < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[last..].to_string(), base));
    }
    spans
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
