use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use box_office_scraper::detail::{
    ACTOR, DIRECTOR, DISTRIBUTOR, DOMESTIC_TOTAL_GROSS, GENRE, MPAA_RATING, PRODUCER,
    PRODUCTION_BUDGET, RELEASE_DATE, RUNTIME,
};
use box_office_scraper::fetcher::DEFAULT_HOST;
use box_office_scraper::{logger, parse_detail, Fetch, HttpFetcher};
use clap::Parser;
use log::info;

/// Save a detail page that scrapes badly as a regression fixture
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site-relative path of the detail page, e.g. "/movies/?id=ragingbull.htm"
    path: String,

    /// Fixture name to save the page under
    test_name: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
}

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    let fetcher = HttpFetcher::new(&cli.host);
    info!("Fetching HTML from {}...", fetcher.url_for(&cli.path));
    let html = fetcher.fetch(&cli.path)?;

    // Create failures directory if it doesn't exist
    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    let file_path = failures_dir.join(format!("{}.html", cli.test_name));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;
    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    let movie = parse_detail(&html);
    let fields = [
        ("Name", &movie.name),
        (DOMESTIC_TOTAL_GROSS, &movie.domestic_total_gross),
        (DISTRIBUTOR, &movie.distributor),
        (GENRE, &movie.genre),
        (MPAA_RATING, &movie.mpaa_rating),
        (RELEASE_DATE, &movie.release_date),
        (RUNTIME, &movie.runtime),
        (PRODUCTION_BUDGET, &movie.production_budget),
    ];

    println!("\nParse results:");
    let mut missing = 0;
    for (label, value) in fields {
        match value {
            Some(value) => println!("  - {}: {}", label, value),
            None => {
                println!("  - {}: MISSING", label);
                missing += 1;
            }
        }
    }
    for (role, names) in [
        (DIRECTOR, &movie.directors),
        (PRODUCER, &movie.producers),
        (ACTOR, &movie.actors),
    ] {
        println!("  - {}: {} credited", role, names.len());
    }

    if movie.name.is_none() {
        println!("\nNo title found - the page is probably not a movie page");
    } else if missing > 0 {
        println!("\n{} fields missing - check the summary table markup", missing);
    } else {
        println!("\nAll fields parsed; this may not be a failure case.");
    }

    Ok(())
}
