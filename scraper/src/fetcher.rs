use log::debug;
use reqwest::blocking::Client;

use crate::error::FetchError;

/// Host the legacy Box Office Mojo markup is served from.
pub const DEFAULT_HOST: &str = "http://www.boxofficemojo.com";

/// Retrieves the markup behind a site-relative path.
pub trait Fetch {
    fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    host: String,
}

impl HttpFetcher {
    pub fn new(host: &str) -> Self {
        HttpFetcher {
            client: Client::new(),
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.host, path.trim())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        HttpFetcher::new(DEFAULT_HOST)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|source| FetchError::Transport { url, source })
    }
}
