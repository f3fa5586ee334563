// Pipeline stages, in the order a run drives them
pub mod fetcher;
pub mod listing;
pub mod detail;
pub mod aggregator;
pub mod writer;

pub mod config;
pub mod error;
pub mod logger;
pub mod record;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::aggregator::{
    collect_links, collect_movies, collect_year, Failure, Pace, Pacer, YearReport,
};
pub use crate::config::ScrapeConfig;
pub use crate::detail::parse_detail;
pub use crate::error::{ConfigError, FetchError};
pub use crate::fetcher::{Fetch, HttpFetcher};
pub use crate::listing::{list_links, listing_path, parse_listing};
pub use crate::record::{Link, MovieRecord};
pub use crate::writer::{read_year, write_failures, write_links, write_year};
