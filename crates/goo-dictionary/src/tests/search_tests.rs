use super::FakeFetcher;
use super::fixtures::*;
use crate::SITE_ROOT;
use crate::encode::search_url;
use crate::entry::{DictionaryEntry, EntrySource, FAILURE_LABEL};
use crate::error::DictionaryError;
use crate::search::{GooDictionary, SearchPage, fetch_search_page, parse_search_page, search};

#[test]
fn test_snippet_row_builds_absolute_link_and_headword() {
    let row = r#"<a href="/word/行く/#jn-123"><p class="title">行く（いく） の意味</p><p class="text">to go...</p></a>"#;
    let entry = DictionaryEntry::from_snippet("行く", row).unwrap();

    assert_eq!(entry.word(), "行く（いく）");
    assert_eq!(
        entry.full_definition_url(),
        Some("https://dictionary.goo.ne.jp/word/行く/#jn-123")
    );
    assert_eq!(entry.short_definition(), "to go...");
    assert_eq!(entry.source_label(), "行く");
    assert_eq!(entry.source(), EntrySource::Snippet);
}

#[test]
fn test_snippet_without_text_is_malformed() {
    let row = r#"<a href="/word/行く/#jn-123"><p class="title">行く（いく） の意味</p></a>"#;
    assert!(matches!(
        DictionaryEntry::from_snippet("行く", row),
        Err(DictionaryError::MalformedPage { what: "snippet text" })
    ));
}

#[test]
fn test_snippet_link_without_fragment_is_not_expandable() {
    let row = r#"<a href="/word/行く/"><p class="title">行く の意味</p><p class="text">to go...</p></a>"#;
    let entry = DictionaryEntry::from_snippet("行く", row).unwrap();
    assert_eq!(entry.full_definition_url(), None);
    assert!(!entry.is_truncated());
}

#[test]
fn test_result_list_yields_one_entry_per_row() {
    let fetcher = FakeFetcher::new().with_page(search_url("いく"), SEARCH_RESULTS);
    let entries = search("いく", &fetcher).unwrap();

    let words: Vec<&str> = entries.iter().map(|e| e.word()).collect();
    assert_eq!(words, vec!["行く（いく）", "逝く（いく）"]);

    let first = &entries[0];
    assert_eq!(first.short_definition(), "向こうへ移動する。「学校へ―・く」...");
    assert_eq!(first.full_definition_url(), Some(IKU_LIST_URL));
    assert!(first.is_truncated());
    assert!(!entries[1].is_truncated());
    assert!(entries.iter().all(|e| e.source_label() == "いく"));

    assert_eq!(fetcher.calls(), vec![search_url("いく")]);
}

#[test]
fn test_direct_entry_page_yields_single_entry() {
    let fetcher = FakeFetcher::new().with_page(search_url("猫"), NEKO_ENTRY);
    let entries = search("猫", &fetcher).unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.source(), EntrySource::EntryPage);
    assert_eq!(entry.word(), "猫(ねこ)");
    assert_eq!(entry.short_definition(), "食肉目ネコ科の哺乳類。\n");
    assert_eq!(entry.full_definition_url(), None);
}

#[test]
fn test_no_match_page_yields_failure_placeholder() {
    for word in ["ほげほげ", "存在しない言葉"] {
        let fetcher = FakeFetcher::new().with_page(search_url(word), NO_MATCH);
        let entries = search(word, &fetcher).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word(), FAILURE_LABEL);
        assert_eq!(entries[0].source_label(), FAILURE_LABEL);
        assert_eq!(entries[0].source(), EntrySource::NotFound);
    }
}

#[test]
fn test_unreachable_site_yields_connection_placeholder() {
    let fetcher = FakeFetcher::new();
    let entries = search("行く", &fetcher).unwrap();

    assert_eq!(entries, vec![DictionaryEntry::connection_error()]);
    assert_eq!(entries[0].source(), EntrySource::ConnectionError);
}

#[test]
fn test_fetch_keeps_miss_and_transport_failure_apart() {
    let fetcher = FakeFetcher::new().with_page(search_url("ほげほげ"), NO_MATCH);
    assert!(matches!(
        fetch_search_page("ほげほげ", &fetcher),
        Err(DictionaryError::NoMatch { word }) if word == "ほげほげ"
    ));
    assert!(matches!(
        fetch_search_page("行く", &fetcher),
        Err(DictionaryError::Connection(_))
    ));
}

#[test]
fn test_empty_result_list_is_valid() {
    assert!(parse_search_page("x", EMPTY_RESULTS).unwrap().is_empty());
}

#[test]
fn test_result_list_without_rows_is_malformed() {
    assert!(matches!(
        parse_search_page("x", RESULTS_WITHOUT_ROWS),
        Err(DictionaryError::MalformedPage { what: "result rows" })
    ));
}

#[test]
fn test_entry_page_without_title_is_malformed() {
    let page = NEKO_ENTRY.replace("og:title", "og:description");
    let fetcher = FakeFetcher::new().with_page(search_url("猫"), page);
    assert!(matches!(
        search("猫", &fetcher),
        Err(DictionaryError::MalformedPage { what: "og:title" })
    ));
}

#[test]
fn test_title_suffix_is_only_read_from_the_og_title() {
    let page = NEKO_ENTRY
        .replace("猫(ねこ)の意味 - goo国語辞書", "猫(ねこ) - goo国語辞書")
        .replace("</body>", "<p>「猫」の意味を調べる</p></body>");
    assert!(matches!(
        parse_search_page("猫", &page),
        Err(DictionaryError::MalformedPage { what: "og:title" })
    ));
}

#[test]
fn test_entry_page_without_content_is_malformed() {
    let page = NEKO_ENTRY.replace("<!-- /contents -->", "");
    assert!(matches!(
        parse_search_page("猫", &page),
        Err(DictionaryError::MalformedPage { what: "definition content" })
    ));
}

#[test]
fn test_classify_is_structural() {
    assert!(matches!(SearchPage::classify(SEARCH_RESULTS), SearchPage::Results(_)));
    assert!(matches!(SearchPage::classify(IKU_ENTRY), SearchPage::Entry(_)));
    // the results container only counts when closed
    let unclosed = r#"<ul class="content_list idiom lsize"><li>"#;
    assert_eq!(SearchPage::classify(unclosed), SearchPage::Entry(unclosed));
}

#[test]
fn test_lookups_run_concurrently_on_shared_dictionary() {
    let fetcher = FakeFetcher::new()
        .with_page(search_url("いく"), SEARCH_RESULTS)
        .with_page(search_url("猫"), NEKO_ENTRY);
    let dictionary = GooDictionary::with_fetcher(fetcher);

    std::thread::scope(|s| {
        let iku = s.spawn(|| dictionary.search("いく").unwrap().len());
        let neko = s.spawn(|| dictionary.search("猫").unwrap().len());
        assert_eq!(iku.join().unwrap(), 2);
        assert_eq!(neko.join().unwrap(), 1);
    });

    assert_eq!(dictionary.fetcher().calls().len(), 2);
}

#[test]
fn test_site_root_has_no_trailing_slash() {
    assert!(!SITE_ROOT.ends_with('/'));
}
