//! Normalises goo's definition markup into plain nested lists.
//!
//! goo numbers senses with hardcoded glyphs and opens a fresh `<ol>` for
//! every item, and nests example quotations as yet another list. The raw
//! block is scanned into [`Token`]s and a small state machine re-emits one
//! balanced `<ol><li>..</li></ol>`, dropping the quotation wrappers.

use lazy_static::lazy_static;
use regex::Regex;

/// Single-paragraph definition without any list
const NO_LIST_OPEN: &str = r#"<div class="text">"#;
const NO_LIST_CLOSE: &str = "</div>";

/// Content of a list item starts at its text paragraph
const ITEM_TEXT_OPEN: &str = r#"<p class="text">"#;
const ITEM_TEXT_CLOSE: &str = "</p>";

// goo opens a whole list for every item
const LIST_ITEM_OPEN: &str = r#"<ol class="meaning cx"><li><!-- l-ol-->"#;
const LIST_ITEM_CLOSE: &str = "</li></ol><!-- /l-ol -->";

// quotations are a nested list tagged m-ol instead of l-ol
const QUOTE_LIST_OPEN: &str = r#"<ol class="meaning cx"><li><!-- m-ol-->"#;
const QUOTE_LIST_CLOSE: &str = "</ol><!-- /m-ol -->";

/// Labels that open a new sense when bracketed in a header span: parts of
/// speech plus the derived (派生), potential (可能) and auxiliary (補助) forms
const GRAMMATICAL_ROLES: &[&str] = &[
    "名", "代", "動", "形", "副", "連体", "接", "感", "助", "連語", "派生", "可能", "補助",
];

lazy_static! {
    static ref MARKUP: Regex =
        Regex::new(r"(?s)<strong>[０-９0-9，,]*</strong>|<.*?>|&thinsp;|&#x32[0-9A-Fa-f]{2};")
            .unwrap();
    static ref ROLE_HEADER: Regex = Regex::new(r"<span[^>]*>\s*［([^］<]+)］\s*</span>").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    OpenListItem,
    CloseListItem,
    /// Body of a content paragraph, still marked up
    Text(&'a str),
    /// Quotation list wrappers, recognised only so they can be dropped
    Ignore,
}

#[derive(Clone, Copy)]
enum Kind {
    Text,
    OpenListItem,
    CloseListItem,
    Ignore,
}

struct Marker {
    open: &'static str,
    close: Option<&'static str>,
    kind: Kind,
}

// Order breaks ties between markers starting at the same offset
const MARKERS: [Marker; 6] = [
    Marker {
        open: NO_LIST_OPEN,
        close: Some(NO_LIST_CLOSE),
        kind: Kind::Text,
    },
    Marker {
        open: LIST_ITEM_OPEN,
        close: None,
        kind: Kind::OpenListItem,
    },
    Marker {
        open: LIST_ITEM_CLOSE,
        close: None,
        kind: Kind::CloseListItem,
    },
    Marker {
        open: QUOTE_LIST_OPEN,
        close: None,
        kind: Kind::Ignore,
    },
    Marker {
        open: QUOTE_LIST_CLOSE,
        close: None,
        kind: Kind::Ignore,
    },
    Marker {
        open: ITEM_TEXT_OPEN,
        close: Some(ITEM_TEXT_CLOSE),
        kind: Kind::Text,
    },
];

impl Marker {
    /// Start and end of the first occurrence at or after `from`
    fn find(&self, input: &str, from: usize) -> Option<(usize, usize)> {
        let start = from + input[from..].find(self.open)?;
        let open_end = start + self.open.len();
        let end = match self.close {
            None => open_end,
            Some(close) => open_end + input[open_end..].find(close)? + close.len(),
        };
        Some((start, end))
    }

    fn token<'a>(&self, matched: &'a str) -> Token<'a> {
        match self.kind {
            Kind::Text => {
                let close_len = self.close.map_or(0, str::len);
                Token::Text(&matched[self.open.len()..matched.len() - close_len])
            }
            Kind::OpenListItem => Token::OpenListItem,
            Kind::CloseListItem => Token::CloseListItem,
            Kind::Ignore => Token::Ignore,
        }
    }
}

/// Scan a block into structural tokens in document order; anything
/// between markers is skipped
pub fn tokenize(block: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut upcoming: Vec<Option<(usize, usize)>> =
        MARKERS.iter().map(|m| m.find(block, 0)).collect();

    loop {
        let next = upcoming
            .iter()
            .enumerate()
            .filter_map(|(index, found)| found.map(|(start, end)| (start, index, end)))
            .min();
        let Some((start, index, end)) = next else {
            break;
        };

        tokens.push(MARKERS[index].token(&block[start..end]));

        for (i, slot) in upcoming.iter_mut().enumerate() {
            if matches!(slot, Some((s, _)) if *s < end) {
                *slot = MARKERS[i].find(block, end);
            }
        }
    }

    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    InList { item_open: bool },
}

/// Re-emit a token stream as balanced list markup
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let mut state = ListState::Outside;

    for token in tokens {
        state = match (*token, state) {
            (Token::OpenListItem, ListState::Outside) => {
                out.push_str("<ol><li>");
                ListState::InList { item_open: true }
            }
            (Token::OpenListItem, ListState::InList { item_open }) => {
                if item_open {
                    out.push_str("</li>\n");
                }
                out.push_str("<li>");
                ListState::InList { item_open: true }
            }
            (Token::CloseListItem, ListState::InList { item_open: true }) => {
                out.push_str("</li>\n");
                ListState::InList { item_open: false }
            }
            (Token::CloseListItem, state) => state,
            (Token::Ignore, state) => state,
            (Token::Text(text), ListState::InList { item_open: true }) => {
                out.push_str(&clean_fragment(text));
                state
            }
            (Token::Text(text), ListState::InList { item_open: false }) => {
                // once a list is open it stays open; loose text becomes an item
                out.push_str("<li>");
                out.push_str(&clean_fragment(text));
                out.push_str("</li>\n");
                state
            }
            (Token::Text(text), ListState::Outside) => {
                out.push_str(&clean_fragment(text));
                out.push('\n');
                state
            }
        };
    }

    match state {
        ListState::Outside => {}
        ListState::InList { item_open: true } => out.push_str("</li></ol>\n"),
        ListState::InList { item_open: false } => out.push_str("</ol>\n"),
    }

    out
}

/// Strip a content chunk down to text: tags, numbering glyphs in bold,
/// thin spaces and decorative circled-number references
pub fn clean_fragment(chunk: &str) -> String {
    MARKUP.replace_all(chunk, "").trim().to_string()
}

struct Sense {
    label: String,
    body: String,
}

/// Split on grammatical-role headers; `None` when there are fewer than two
fn split_senses(block: &str) -> Option<Vec<Sense>> {
    let headers: Vec<(usize, usize, &str)> = ROLE_HEADER
        .captures_iter(block)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?.as_str();
            GRAMMATICAL_ROLES
                .iter()
                .any(|role| label.starts_with(role))
                .then_some((whole.start(), whole.end(), label))
        })
        .collect();

    if headers.len() < 2 {
        return None;
    }

    let senses = headers
        .iter()
        .enumerate()
        .map(|(i, &(start, end, label))| {
            let stop = headers.get(i + 1).map_or(block.len(), |next| next.0);
            let mut body = String::new();
            if i == 0 {
                // anything before the first header belongs to the first sense
                body.push_str(&block[..start]);
            }
            body.push_str(&block[end..stop]);
            Sense {
                label: format!("［{label}］"),
                body,
            }
        })
        .collect();

    Some(senses)
}

/// Turn a raw definition block into display HTML
pub fn clean_definition(block: &str) -> String {
    // some pages break lines inside tags
    let block = block.replace(['\n', '\r'], "");

    match split_senses(&block) {
        None => render_tokens(&tokenize(&block)),
        Some(senses) => {
            tracing::debug!("Definition has {} senses", senses.len());
            let mut out = String::from("<ol>\n");
            for sense in senses {
                out.push_str("<li>");
                out.push_str(&sense.label);
                out.push('\n');
                out.push_str(&render_tokens(&tokenize(&sense.body)));
                out.push_str("</li>\n");
            }
            out.push_str("</ol>\n");
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_orders_markers_by_position() {
        let block = concat!(
            r#"<ol class="meaning cx"><li><!-- l-ol--><p class="text">a</p>"#,
            r#"<ol class="meaning cx"><li><!-- m-ol--><p class="text">q</p></li></ol><!-- /m-ol -->"#,
            r#"</li></ol><!-- /l-ol -->"#,
        );
        assert_eq!(
            tokenize(block),
            vec![
                Token::OpenListItem,
                Token::Text("a"),
                Token::Ignore,
                Token::Text("q"),
                Token::Ignore,
                Token::CloseListItem,
            ]
        );
    }

    #[test]
    fn test_unclosed_paragraph_is_not_a_token() {
        assert!(tokenize(r#"<p class="text">dangling"#).is_empty());
    }

    #[test]
    fn test_render_tokens_balances_unclosed_item() {
        let tokens = [Token::OpenListItem, Token::Text("a"), Token::OpenListItem, Token::Text("b")];
        assert_eq!(render_tokens(&tokens), "<ol><li>a</li>\n<li>b</li></ol>\n");
    }

    #[test]
    fn test_text_after_closed_item_stays_in_list() {
        let tokens = [
            Token::OpenListItem,
            Token::Text("a"),
            Token::CloseListItem,
            Token::Text("tail"),
        ];
        assert_eq!(render_tokens(&tokens), "<ol><li>a</li>\n<li>tail</li>\n</ol>\n");
    }

    #[test]
    fn test_text_before_list_stays_outside() {
        let tokens = [Token::Text("lead"), Token::OpenListItem, Token::Text("a")];
        assert_eq!(render_tokens(&tokens), "lead\n<ol><li>a</li></ol>\n");
    }

    #[test]
    fn test_clean_fragment_strips_decoration() {
        assert_eq!(
            clean_fragment("<strong>１</strong>&thinsp;<a href=\"/x\">行く</a>&#x3251;こと"),
            "行くこと"
        );
        assert_eq!(clean_fragment("<strong>10</strong>十番目"), "十番目");
        // bold words that are not numbering keep their text
        assert_eq!(clean_fragment("<strong>注意</strong>"), "注意");
    }

    #[test]
    fn test_header_outside_role_set_does_not_split() {
        let block = r#"<span class="x">［補説］</span><div class="text">a</div><span class="x">［用法］</span><div class="text">b</div>"#;
        assert_eq!(clean_definition(block), "a\nb\n");
    }
}
