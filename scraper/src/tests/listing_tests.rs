use super::fixtures;
use super::StubFetcher;
use crate::error::FetchError;
use crate::listing::{list_links, listing_path, parse_listing};
use crate::record::Link;

#[test]
fn test_listing_path() {
    assert_eq!(listing_path(1980, 2), "/yearly/chart/?page=2&yr=1980");
}

#[test]
fn test_sample_listing_drops_promoted_movie() {
    let html = fixtures::load_html_fixture("listing_page");
    let links = parse_listing(&html);

    // Four movie links on the page, the first being today's #1 movie
    assert_eq!(
        links,
        vec![
            Link::new("/movies/?id=starwars5.htm"),
            Link::new("/movies/?id=9to5.htm"),
            Link::new("/movies/?id=stircrazy.htm"),
        ]
    );
}

#[test]
fn test_non_movie_links_are_ignored() {
    let html = r#"
    <html><body>
        <a href="/movies/?id=promo.htm">Promo</a>
        <a href="/studio/chart/?studio=fox.htm">Fox</a>
        <a>No target</a>
        <a href="/people/chart/?id=someone.htm">Someone</a>
        <a href="/movies/?id=kept.htm">Kept</a>
    </body></html>
    "#;

    assert_eq!(parse_listing(html), vec![Link::new("/movies/?id=kept.htm")]);
}

#[test]
fn test_pattern_is_a_substring_match() {
    let html = r#"
    <a href="/movies/?id=promo.htm">Promo</a>
    <a href="http://www.boxofficemojo.com/movies/?id=absolute.htm">Absolute</a>
    <a href="/movies/?id=relative.htm&page=intl">Relative</a>
    "#;

    assert_eq!(
        parse_listing(html),
        vec![
            Link::new("http://www.boxofficemojo.com/movies/?id=absolute.htm"),
            Link::new("/movies/?id=relative.htm&page=intl"),
        ]
    );
}

#[test]
fn test_page_without_movies_is_empty() {
    assert!(parse_listing("<html><body><p>No results</p></body></html>").is_empty());

    // Only the promoted slot is present
    let html = r#"<a href="/movies/?id=promo.htm">Promo</a>"#;
    assert!(parse_listing(html).is_empty());
}

#[test]
fn test_list_links_fetches_the_requested_page() {
    let fetcher = StubFetcher::default()
        .with_page(&listing_path(1995, 3), fixtures::load_html_fixture("listing_page"));

    let links = list_links(&fetcher, 1995, 3).unwrap();

    assert_eq!(links.len(), 3);
    assert_eq!(fetcher.requests(), vec!["/yearly/chart/?page=3&yr=1995"]);
}

#[test]
fn test_list_links_reports_fetch_failure() {
    let fetcher = StubFetcher::default();

    let result = list_links(&fetcher, 1995, 1);

    match result {
        Err(FetchError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/yearly/chart/?page=1&yr=1995"), "{}", url);
        }
        other => panic!("expected a 404, got {:?}", other),
    }
}
