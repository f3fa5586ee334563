use thiserror::Error;

/// Failure to retrieve a page from the site.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("start year {start} is after end year {end}")]
    YearRange { start: u32, end: u32 },

    #[error("first page {first} is after last page {last}")]
    PageRange { first: u32, last: u32 },

    #[error("listing pages are numbered from 1")]
    ZeroPage,

    #[error("delay must be a finite, non-negative number of seconds, got {0}")]
    Delay(f64),
}
