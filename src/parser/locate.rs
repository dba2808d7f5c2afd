use scraper::{Html, Selector};
use tracing::debug;

/// Voyager pages embed their JSON payloads in a run of <code> elements at the
/// end of the document; the search results payload is the third from last.
const PAYLOAD_OFFSET_FROM_END: usize = 3;

/// Return the text blocks of the payload-bearing <code> element, in document
/// order. A page with fewer than three <code> elements (login wall,
/// challenge page) yields no blocks rather than an error.
pub fn locate_payload_blocks(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("code").unwrap();
    let codes: Vec<_> = document.select(&selector).collect();

    let Some(idx) = codes.len().checked_sub(PAYLOAD_OFFSET_FROM_END) else {
        debug!(
            "Page has {} <code> elements, expected at least {}",
            codes.len(),
            PAYLOAD_OFFSET_FROM_END
        );
        return Vec::new();
    };

    codes[idx].text().map(str::to_string).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_third_from_last_code_element() {
        let html = "<html><body>\
            <code>first</code>\
            <code>payload</code>\
            <code>second-to-last</code>\
            <code>last</code>\
            </body></html>";
        assert_eq!(locate_payload_blocks(html), vec!["payload".to_string()]);
    }

    #[test]
    fn exactly_three_code_elements_picks_the_first() {
        let html = "<html><body><code>a</code><code>b</code><code>c</code></body></html>";
        assert_eq!(locate_payload_blocks(html), vec!["a".to_string()]);
    }

    #[test]
    fn too_few_code_elements_yields_nothing() {
        let html = "<html><body><code>a</code><code>b</code></body></html>";
        assert!(locate_payload_blocks(html).is_empty());
    }

    #[test]
    fn page_without_code_elements_yields_nothing() {
        assert!(locate_payload_blocks("<html><body><p>Sign in</p></body></html>").is_empty());
    }
}
