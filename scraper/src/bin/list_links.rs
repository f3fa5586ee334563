use std::path::PathBuf;

use anyhow::{Context, Result};
use box_office_scraper::config::DEFAULT_PAGES;
use box_office_scraper::fetcher::DEFAULT_HOST;
use box_office_scraper::{collect_links, logger, write_links, HttpFetcher, ScrapeConfig};
use clap::Parser;
use log::warn;

/// List the movie links on a year's box office chart without visiting them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Year of the chart
    year: u32,

    #[arg(long, default_value_t = *DEFAULT_PAGES.start())]
    first_page: u32,

    #[arg(long, default_value_t = *DEFAULT_PAGES.end())]
    last_page: u32,

    /// Directory the links file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
}

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    let config = ScrapeConfig::new(
        (cli.year, cli.year),
        (cli.first_page, cli.last_page),
        cli.output_dir,
        0.0,
        cli.host,
    )
    .context("Invalid arguments")?;

    let fetcher = HttpFetcher::new(&config.host);
    let (links, failures) = collect_links(&fetcher, cli.year, config.pages.clone());

    println!("Found {} movie links for {}", links.len(), cli.year);
    for (index, link) in links.iter().enumerate() {
        println!("{}. {}", index + 1, fetcher.url_for(link.as_str()));
    }

    for failure in &failures {
        warn!("{:?}", failure);
    }

    let path = write_links(&config.output_dir, cli.year, &links)?;
    println!("\nLinks saved to {}", path.display());

    Ok(())
}
