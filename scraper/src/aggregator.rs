use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::detail::parse_detail;
use crate::fetcher::Fetch;
use crate::listing::list_links;
use crate::record::{Link, MovieRecord};

/// A page that could not be scraped, kept apart from the table rows so the
/// run can be repeated for just these pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Failure {
    Listing { year: u32, page: u32, reason: String },
    Detail { year: u32, link: Link, reason: String },
}

#[derive(Debug, Default)]
pub struct YearReport {
    pub year: u32,
    pub links: Vec<Link>,
    pub movies: Vec<MovieRecord>,
    pub failures: Vec<Failure>,
}

/// Waits between consecutive detail page requests.
pub trait Pace {
    fn pause(&self);
}

/// Sleeps a random fraction of `max_delay` between requests to the site.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    max_delay: Duration,
}

impl Pacer {
    pub fn new(max_delay: Duration) -> Self {
        Pacer { max_delay }
    }

    /// A pacer that never sleeps.
    pub fn none() -> Self {
        Pacer::new(Duration::ZERO)
    }

    /// Picks a duration uniformly from `[0, max_delay)`.
    pub fn next_delay(&self) -> Duration {
        if self.max_delay.is_zero() {
            return Duration::ZERO;
        }
        let mut rng = rand::thread_rng();
        Duration::from_secs_f64(rng.gen_range(0.0..self.max_delay.as_secs_f64()))
    }
}

impl Pace for Pacer {
    fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            debug!("Waiting {:.2}s before next request", delay.as_secs_f64());
            thread::sleep(delay);
        }
    }
}

/// Gathers the movie links of every listing page of `year`, in page order.
///
/// Links are not deduplicated. Pages that fail to load are reported and the
/// remaining pages are still read.
pub fn collect_links<F: Fetch + ?Sized>(
    fetcher: &F,
    year: u32,
    pages: RangeInclusive<u32>,
) -> (Vec<Link>, Vec<Failure>) {
    let mut links = Vec::new();
    let mut failures = Vec::new();

    for page in pages {
        match list_links(fetcher, year, page) {
            Ok(page_links) => links.extend(page_links),
            Err(e) => {
                warn!("Skipping listing page {} of {}: {}", page, year, e);
                failures.push(Failure::Listing {
                    year,
                    page,
                    reason: e.to_string(),
                });
            }
        }
    }

    (links, failures)
}

/// Fetches and parses each detail page, one row per page that loaded.
pub fn collect_movies<F: Fetch + ?Sized, P: Pace + ?Sized>(
    fetcher: &F,
    pacer: &P,
    year: u32,
    links: &[Link],
) -> (Vec<MovieRecord>, Vec<Failure>) {
    let mut movies = Vec::with_capacity(links.len());
    let mut failures = Vec::new();

    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            pacer.pause();
        }

        match fetcher.fetch(link.as_str()) {
            Ok(html) => {
                let movie = parse_detail(&html);
                debug!(
                    "{}/{} {}: {}",
                    i + 1,
                    links.len(),
                    link,
                    movie.name.as_deref().unwrap_or("<untitled>")
                );
                movies.push(movie);
            }
            Err(e) => {
                warn!("Skipping {}: {}", link, e);
                failures.push(Failure::Detail {
                    year,
                    link: link.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (movies, failures)
}

pub fn collect_year<F: Fetch + ?Sized, P: Pace + ?Sized>(
    fetcher: &F,
    pacer: &P,
    year: u32,
    pages: RangeInclusive<u32>,
) -> YearReport {
    let (links, mut failures) = collect_links(fetcher, year, pages);
    info!("{}: found {} movie links", year, links.len());

    let (movies, detail_failures) = collect_movies(fetcher, pacer, year, &links);
    failures.extend(detail_failures);

    info!(
        "{}: scraped {} movies, {} failures",
        year,
        movies.len(),
        failures.len()
    );

    YearReport {
        year,
        links,
        movies,
        failures,
    }
}
