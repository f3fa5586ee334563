use log::debug;
use scraper::{Html, Selector};

use crate::error::FetchError;
use crate::fetcher::Fetch;
use crate::record::Link;

/// Substring identifying a movie detail link on a listing page.
pub const MOVIE_LINK_PATTERN: &str = "/movies/?id=";

/// Every listing page opens with a link to today's box-office leader, which
/// has nothing to do with the requested year.
pub const PROMOTED_LINKS: usize = 1;

pub fn listing_path(year: u32, page: u32) -> String {
    format!("/yearly/chart/?page={}&yr={}", page, year)
}

/// Fetches one listing page and returns its movie links in document order.
///
/// A page without any movie links yields an empty list; only a failed fetch
/// is an error.
pub fn list_links<F: Fetch + ?Sized>(
    fetcher: &F,
    year: u32,
    page: u32,
) -> Result<Vec<Link>, FetchError> {
    let html = fetcher.fetch(&listing_path(year, page))?;
    let links = parse_listing(&html);
    debug!("{} page {}: {} links", year, page, links.len());
    Ok(links)
}

pub fn parse_listing(html: &str) -> Vec<Link> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").unwrap();

    document
        .select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains(MOVIE_LINK_PATTERN))
        .skip(PROMOTED_LINKS)
        .map(Link::new)
        .collect()
}
