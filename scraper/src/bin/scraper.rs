use std::path::PathBuf;

use anyhow::{Context, Result};
use box_office_scraper::config::{DEFAULT_DELAY_SECS, DEFAULT_PAGES, DEFAULT_YEARS};
use box_office_scraper::fetcher::DEFAULT_HOST;
use box_office_scraper::writer::year_is_complete;
use box_office_scraper::{
    collect_year, logger, write_failures, write_links, write_year, HttpFetcher, Pacer,
    ScrapeConfig,
};
use clap::Parser;
use log::{info, warn};

/// Scrape yearly box office charts into one CSV table per year
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First year to scrape
    #[arg(long, default_value_t = *DEFAULT_YEARS.start())]
    start_year: u32,

    /// Last year to scrape (inclusive)
    #[arg(long, default_value_t = *DEFAULT_YEARS.end())]
    end_year: u32,

    /// First listing page of each year
    #[arg(long, default_value_t = *DEFAULT_PAGES.start())]
    first_page: u32,

    /// Last listing page of each year (inclusive)
    #[arg(long, default_value_t = *DEFAULT_PAGES.end())]
    last_page: u32,

    /// Directory the yearly tables are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Maximum random pause between detail pages, in seconds
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    delay: f64,

    /// Site to scrape
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Leave years that already have a table and no failures alone
    #[arg(long)]
    skip_existing: bool,

    /// Also save each year's movie links
    #[arg(long)]
    save_links: bool,
}

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    let config = ScrapeConfig::new(
        (cli.start_year, cli.end_year),
        (cli.first_page, cli.last_page),
        cli.output_dir,
        cli.delay,
        cli.host,
    )
    .context("Invalid arguments")?;

    let fetcher = HttpFetcher::new(&config.host);
    let pacer = Pacer::new(config.delay);
    let mut failed_years = Vec::new();

    for year in config.years.clone() {
        if cli.skip_existing && year_is_complete(&config.output_dir, year) {
            info!("{}: already scraped, skipping", year);
            continue;
        }

        info!("Scraping {}...", year);
        let report = collect_year(&fetcher, &pacer, year, config.pages.clone());

        if cli.save_links {
            write_links(&config.output_dir, year, &report.links)?;
        }
        write_year(&config.output_dir, year, &report.movies)?;
        if let Some(path) = write_failures(&config.output_dir, year, &report.failures)? {
            warn!(
                "{}: {} pages failed, see {}",
                year,
                report.failures.len(),
                path.display()
            );
            failed_years.push(year);
        }
    }

    if failed_years.is_empty() {
        info!("Done");
    } else {
        warn!(
            "Done with failures in: {}",
            failed_years
                .iter()
                .map(|year| year.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
