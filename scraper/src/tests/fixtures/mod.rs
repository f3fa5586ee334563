use std::fs;
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = "src/tests/fixtures";

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = Path::new(FIXTURES_DIR).join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Detail pages captured with `save_scrape_failure`
pub fn failures_dir() -> PathBuf {
    Path::new(FIXTURES_DIR).join("failures")
}

pub fn load_failure_html(failure_name: &str) -> Option<String> {
    let path = failures_dir().join(format!("{}.html", failure_name));
    fs::read_to_string(path).ok()
}

/// A detail page with nothing but a title
pub fn bare_detail_page(title: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body><p>No data</p></body></html>",
        title
    )
}
