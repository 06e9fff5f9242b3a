// src/browser/html.rs
// =============================================================================
// This module extracts link targets from HTML for the http engine.
//
// It mirrors what a browser's `document.links` returns:
// - every <a> and <area> element that has an href attribute
// - each href resolved against the document base URI
//
// The base URI is the page URL, unless the document has a <base href="...">,
// in which case that href (itself resolved against the page URL) wins.
//
// Like a browser, we keep every scheme: mailto:, tel:, javascript: links are
// all reported. Only hrefs that can't be resolved at all are dropped.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all link targets from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   page_url: the URL the document was served from (after redirects)
//
// Returns: absolute URLs in document order, duplicates included
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   page_url = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // Both selectors are constants and known to be valid
    let links = Selector::parse("a[href], area[href]").expect("valid link selector");
    let base = Selector::parse("base[href]").expect("valid base selector");

    // Only the first <base href> counts, same as in a browser
    let base_uri = document
        .select(&base)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| page_url.join(href.trim()).ok())
        .unwrap_or_else(|| page_url.clone());

    document
        .select(&links)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base_uri.join(href.trim()).ok())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(html, &page("https://example.com"));
        assert_eq!(links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/docs">Docs</a> <a href="guide/">Guide</a>"#;
        let links = extract_links(html, &page("https://example.com/book/intro"));
        assert_eq!(
            links,
            vec!["https://example.com/docs", "https://example.com/book/guide/"]
        );
    }

    #[test]
    fn test_base_href_wins_over_page_url() {
        let html = r#"
            <head><base href="https://cdn.example.org/v2/"></head>
            <body><a href="start">Start</a></body>
        "#;
        let links = extract_links(html, &page("https://example.com/page"));
        assert_eq!(links, vec!["https://cdn.example.org/v2/start"]);
    }

    #[test]
    fn test_relative_base_href() {
        let html = r#"<base href="/docs/"><a href="api">API</a>"#;
        let links = extract_links(html, &page("https://example.com/blog/post"));
        assert_eq!(links, vec!["https://example.com/docs/api"]);
    }

    #[test]
    fn test_keeps_non_http_schemes() {
        let html = r#"<a href="mailto:test@example.com">Email</a>"#;
        let links = extract_links(html, &page("https://example.com"));
        assert_eq!(links, vec!["mailto:test@example.com"]);
    }

    #[test]
    fn test_area_links_and_anchors_without_href() {
        let html = r##"
            <a name="top">no href</a>
            <map><area href="/region" alt="r"></map>
            <a href="#top">Top</a>
        "##;
        let links = extract_links(html, &page("https://example.com/page"));
        assert_eq!(
            links,
            vec!["https://example.com/region", "https://example.com/page#top"]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"<a href="/a">1</a><a href="/a">2</a>"#;
        let links = extract_links(html, &page("https://example.com"));
        assert_eq!(links.len(), 2);
    }
}
