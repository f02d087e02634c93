use crate::SITE_ROOT;

/// Search endpoint for exact lookups in the 国語辞書 section
pub fn search_url(word: &str) -> String {
    format!("{SITE_ROOT}/srch/jn/{}/m1u/", percent_encode(word))
}

/// Every UTF-8 byte becomes one `%XX` triplet with uppercase hex, ASCII included
pub fn percent_encode(word: &str) -> String {
    word.bytes().map(|byte| format!("%{byte:02X}")).collect()
}
