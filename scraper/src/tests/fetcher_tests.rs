use crate::fetcher::{HttpFetcher, DEFAULT_HOST};

#[test]
fn test_url_for_trims_path_and_host() {
    let fetcher = HttpFetcher::new("http://www.boxofficemojo.com/");

    assert_eq!(
        fetcher.url_for(" /movies/?id=x.htm\n"),
        "http://www.boxofficemojo.com/movies/?id=x.htm"
    );
}

#[test]
fn test_url_for_listing_path() {
    let fetcher = HttpFetcher::default();

    assert_eq!(
        fetcher.url_for("\t/yearly/chart/?page=2&yr=1980 "),
        format!("{}/yearly/chart/?page=2&yr=1980", DEFAULT_HOST)
    );
}
