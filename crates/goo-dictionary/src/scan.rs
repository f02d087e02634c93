//! Marker-string scanning over raw markup.

/// Text after the first `marker`
pub(crate) fn after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    haystack
        .find(marker)
        .map(|start| &haystack[start + marker.len()..])
}

/// Text between the first `open` and the first `close` that follows it
pub(crate) fn between<'a>(haystack: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let rest = after(haystack, open)?;
    rest.find(close).map(|end| &rest[..end])
}

/// Every non-overlapping `open ... close` span, markers included
pub(crate) fn spans<'a>(haystack: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(start) = haystack[cursor..].find(open).map(|i| cursor + i) {
        let body = start + open.len();
        let Some(end) = haystack[body..].find(close).map(|i| body + i + close.len()) else {
            break;
        };
        found.push(&haystack[start..end]);
        cursor = end;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        assert_eq!(between("a<p>x</p><p>y</p>", "<p>", "</p>"), Some("x"));
        assert_eq!(between("a<p>x", "<p>", "</p>"), None);
        assert_eq!(between("abc", "<p>", "</p>"), None);
    }

    #[test]
    fn test_spans_stop_at_unclosed() {
        let html = "<a href=1>one</a> <a href=2>two</a> <a href=3>three";
        assert_eq!(spans(html, "<a href=", "</a>"), vec!["<a href=1>one</a>", "<a href=2>two</a>"]);
    }
}
