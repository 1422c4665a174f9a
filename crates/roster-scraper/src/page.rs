//! Pure HTML parsing for member directory pages.
//!
//! The Lodestone has shipped several markup shapes for the member listing
//! over time, so both the entry and the name lookups try an ordered list of
//! selectors and take the first that yields anything. Parsing never fails:
//! a page with no recognizable entries simply reports `entry_count == 0`,
//! which the paging loop treats as end of listing.

use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Entry selectors in priority order: current layout first, older layouts
/// as fallbacks.
const ENTRY_SELECTORS: &[&str] = &[
    "div.entry__block",
    "div.entry__freecompany__fc-member",
    "li.entry",
];

/// Name selectors in priority order, tried within each entry.
const NAME_SELECTORS: &[&str] = &[
    "p.entry__name",
    "div.entry__freecompany__fc-member__name",
    "p.entry__freecompany__member__name",
];

/// Pager control whose presence signals that another page exists.
const NEXT_PAGE_SELECTOR: &str = "a.btn__pager__next";

fn entry_selectors() -> &'static [Selector] {
    static CELL: OnceLock<Vec<Selector>> = OnceLock::new();
    CELL.get_or_init(|| {
        ENTRY_SELECTORS
            .iter()
            .map(|s| Selector::parse(s).expect("valid entry selector"))
            .collect()
    })
}

fn name_selectors() -> &'static [Selector] {
    static CELL: OnceLock<Vec<Selector>> = OnceLock::new();
    CELL.get_or_init(|| {
        NAME_SELECTORS
            .iter()
            .map(|s| Selector::parse(s).expect("valid name selector"))
            .collect()
    })
}

fn next_page_selector() -> &'static Selector {
    static CELL: OnceLock<Selector> = OnceLock::new();
    CELL.get_or_init(|| Selector::parse(NEXT_PAGE_SELECTOR).expect("valid pager selector"))
}

/// Parsed view of one member directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPage {
    /// Display names extracted from the page, in document order.
    /// Entries whose name could not be extracted are skipped.
    pub names: Vec<String>,
    /// Number of entry elements the winning selector matched. Zero means
    /// no selector recognized the markup at all.
    pub entry_count: usize,
    /// Whether the next-page pager control is present.
    pub has_next: bool,
}

/// Parse one directory page.
///
/// Entry selectors are tried in priority order until one matches at least
/// one element; within each entry, name selectors are tried in priority
/// order until one yields non-empty text.
#[must_use]
pub fn parse_member_page(html: &str) -> MemberPage {
    let document = Html::parse_document(html);

    let mut entries: Vec<ElementRef> = Vec::new();
    for selector in entry_selectors() {
        entries = document.select(selector).collect();
        if !entries.is_empty() {
            break;
        }
    }

    let mut names = Vec::new();
    for entry in &entries {
        match extract_name(entry) {
            Some(name) => names.push(name),
            None => tracing::debug!("Skipping entry with no extractable name"),
        }
    }

    let has_next = document.select(next_page_selector()).next().is_some();

    MemberPage {
        names,
        entry_count: entries.len(),
        has_next,
    }
}

fn extract_name(entry: &ElementRef) -> Option<String> {
    for selector in name_selectors() {
        if let Some(el) = entry.select(selector).next() {
            let text = el.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primary_layout() {
        let html = r#"
            <ul>
                <div class="entry__block"><p class="entry__name">Alma Dyrr</p></div>
                <div class="entry__block"><p class="entry__name">Byrne Halric</p></div>
            </ul>
            <a class="btn__pager__next" href="?page=2">Next</a>
        "#;

        let page = parse_member_page(html);
        assert_eq!(page.names, vec!["Alma Dyrr", "Byrne Halric"]);
        assert_eq!(page.entry_count, 2);
        assert!(page.has_next);
    }

    #[test]
    fn test_parse_fallback_entry_layout() {
        // Older listing markup: no entry__block anywhere
        let html = r#"
            <div class="entry__freecompany__fc-member">
                <div class="entry__freecompany__fc-member__name">Ceres Vane</div>
            </div>
            <div class="entry__freecompany__fc-member">
                <div class="entry__freecompany__fc-member__name">Doran Wells</div>
            </div>
        "#;

        let page = parse_member_page(html);
        assert_eq!(page.names, vec!["Ceres Vane", "Doran Wells"]);
        assert_eq!(page.entry_count, 2);
        assert!(!page.has_next);
    }

    #[test]
    fn test_parse_list_entry_layout() {
        let html = r#"
            <ul>
                <li class="entry"><p class="entry__name">Ezel Faye</p></li>
            </ul>
        "#;

        let page = parse_member_page(html);
        assert_eq!(page.names, vec!["Ezel Faye"]);
        assert_eq!(page.entry_count, 1);
    }

    #[test]
    fn test_name_selector_fallback_within_entry() {
        // Entry matched by the primary selector but named with the
        // third-priority element
        let html = r#"
            <div class="entry__block">
                <p class="entry__freecompany__member__name">Fen Ardbert</p>
            </div>
        "#;

        let page = parse_member_page(html);
        assert_eq!(page.names, vec!["Fen Ardbert"]);
    }

    #[test]
    fn test_entry_without_name_is_skipped() {
        let html = r#"
            <div class="entry__block"><p class="entry__name">Alma Dyrr</p></div>
            <div class="entry__block"><span class="unrelated">no name here</span></div>
            <div class="entry__block"><p class="entry__name">   </p></div>
        "#;

        let page = parse_member_page(html);
        assert_eq!(page.names, vec!["Alma Dyrr"]);
        // All three entries were recognized, only one yielded a name
        assert_eq!(page.entry_count, 3);
    }

    #[test]
    fn test_name_text_is_trimmed() {
        let html = r#"
            <div class="entry__block"><p class="entry__name">
                Alma Dyrr
            </p></div>
        "#;

        let page = parse_member_page(html);
        assert_eq!(page.names, vec!["Alma Dyrr"]);
    }

    #[test]
    fn test_unrecognized_markup() {
        let html = r#"<div class="totally-different"><p>Not a member list</p></div>"#;

        let page = parse_member_page(html);
        assert!(page.names.is_empty());
        assert_eq!(page.entry_count, 0);
        assert!(!page.has_next);
    }

    #[test]
    fn test_next_control_detection() {
        let with_next = r#"
            <div class="entry__block"><p class="entry__name">Alma Dyrr</p></div>
            <a class="btn__pager__next" href="?page=2">Next</a>
        "#;
        assert!(parse_member_page(with_next).has_next);

        // A disabled pager rendered without the anchor class means last page
        let without_next = r#"
            <div class="entry__block"><p class="entry__name">Alma Dyrr</p></div>
            <span class="btn__pager__no-next">Next</span>
        "#;
        assert!(!parse_member_page(without_next).has_next);
    }
}
