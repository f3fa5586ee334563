use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

use anyhow::Result;

use crate::aggregator::Pace;
use crate::error::FetchError;
use crate::fetcher::Fetch;

pub mod fixtures;

mod fetcher_tests;
mod listing_tests;

/// Helper function to log and save failed HTML for future regression testing
pub fn save_failed_html(html: &str, test_name: &str) -> Result<()> {
    let failures_dir = fixtures::failures_dir();
    fs::create_dir_all(&failures_dir)?;

    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, html)?;

    println!("Saved failed HTML to {}", file_path.display());
    Ok(())
}

/// Serves canned pages by path and answers 404 for everything else.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(path.to_string(), html.into());
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

/// Marks each pause in the fetcher's request log instead of sleeping.
pub struct LoggingPacer<'a> {
    pub fetcher: &'a StubFetcher,
}

impl Pace for LoggingPacer<'_> {
    fn pause(&self) {
        self.fetcher.requests.borrow_mut().push("<pause>".to_string());
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let path = path.trim();
        self.requests.borrow_mut().push(path.to_string());
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: format!("http://stub{}", path),
                status: 404,
            })
    }
}
