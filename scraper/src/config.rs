use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::fetcher::DEFAULT_HOST;

pub const DEFAULT_YEARS: RangeInclusive<u32> = 1980..=2018;

/// Deepest listing page the site serves for any year.
pub const DEFAULT_PAGES: RangeInclusive<u32> = 1..=4;

/// Upper bound, in seconds, of the pause between detail page fetches.
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeConfig {
    pub years: RangeInclusive<u32>,
    pub pages: RangeInclusive<u32>,
    pub output_dir: PathBuf,
    pub delay: Duration,
    pub host: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            years: DEFAULT_YEARS,
            pages: DEFAULT_PAGES,
            output_dir: PathBuf::from("."),
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn new(
        years: (u32, u32),
        pages: (u32, u32),
        output_dir: PathBuf,
        delay_secs: f64,
        host: String,
    ) -> Result<Self, ConfigError> {
        let (start, end) = years;
        if start > end {
            return Err(ConfigError::YearRange { start, end });
        }

        let (first, last) = pages;
        if first == 0 {
            return Err(ConfigError::ZeroPage);
        }
        if first > last {
            return Err(ConfigError::PageRange { first, last });
        }

        let delay =
            Duration::try_from_secs_f64(delay_secs).map_err(|_| ConfigError::Delay(delay_secs))?;

        Ok(ScrapeConfig {
            years: start..=end,
            pages: first..=last,
            output_dir,
            delay,
            host,
        })
    }
}
