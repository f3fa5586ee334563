use scraper::{ElementRef, Html, Selector};

use crate::record::MovieRecord;

/// Boilerplate the site appends to every page title.
pub const TITLE_SUFFIX: &str = " - Box Office Mojo";

/// Class of the "The Players" box listing credited people.
pub const PLAYERS_BOX_CLASS: &str = "mp_box";

pub const DOMESTIC_TOTAL_GROSS: &str = "Domestic Total Gross";
pub const DISTRIBUTOR: &str = "Distributor";
pub const GENRE: &str = "Genre";
pub const MPAA_RATING: &str = "MPAA Rating";
pub const RELEASE_DATE: &str = "Release Date";
pub const RUNTIME: &str = "Runtime";
pub const PRODUCTION_BUDGET: &str = "Production Budget";

pub const DIRECTOR: &str = "Director";
pub const PRODUCER: &str = "Producer";
pub const ACTOR: &str = "Actor";

/// Marks minor credits in the players box.
const MINOR_CREDIT: char = '*';

/// Parses a movie detail page. Fields the page does not carry are left empty.
pub fn parse_detail(html: &str) -> MovieRecord {
    let document = Html::parse_document(html);

    MovieRecord {
        name: extract_title(&document),
        domestic_total_gross: extract_scalar(&document, DOMESTIC_TOTAL_GROSS),
        distributor: extract_scalar(&document, DISTRIBUTOR),
        genre: extract_scalar(&document, GENRE),
        mpaa_rating: extract_scalar(&document, MPAA_RATING),
        release_date: extract_scalar(&document, RELEASE_DATE),
        runtime: extract_scalar(&document, RUNTIME),
        production_budget: extract_scalar(&document, PRODUCTION_BUDGET),
        directors: extract_people(&document, DIRECTOR),
        producers: extract_people(&document, PRODUCER),
        actors: extract_people(&document, ACTOR),
    }
}

pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();
    let title = document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())?;

    let title = title.trim();
    let name = title.strip_suffix(TITLE_SUFFIX).unwrap_or(title);

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Finds the first summary cell mentioning `label` and returns what follows it.
///
/// Summary cells live in the tables drawn with a `bgcolor`; the first match in
/// document order wins even if later tables repeat the label.
pub fn extract_scalar(document: &Html, label: &str) -> Option<String> {
    let cell_selector = Selector::parse("[bgcolor] td").unwrap();

    let cell = document
        .select(&cell_selector)
        .filter(is_innermost)
        .find(|cell| cell.text().collect::<String>().contains(label))?;

    let text = cell.text().collect::<String>();
    let value = text
        .replacen(label, "", 1)
        .trim()
        .trim_matches(':')
        .trim()
        .to_string();

    Some(value)
}

/// Collects the names credited under `role` in the players box.
///
/// Only the first row mentioning the role is read. Its leading link is the
/// role heading itself and is not a name.
pub fn extract_people(document: &Html, role: &str) -> Vec<String> {
    let row_selector = Selector::parse(&format!(".{} tr", PLAYERS_BOX_CLASS)).unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let row = document
        .select(&row_selector)
        .filter(is_innermost)
        .find(|row| row.text().collect::<String>().contains(role));

    let row = match row {
        None => return Vec::new(),
        Some(row) => row,
    };

    row.select(&anchor_selector)
        .map(|anchor| anchor.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty() && !name.contains(MINOR_CREDIT))
        .skip(1)
        .collect()
}

// Layout tables nest, and an outer cell's text swallows every inner cell.
fn is_innermost(element: &ElementRef) -> bool {
    let tag = element.value().name();
    !element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|inner| inner.value().name() == tag)
}
