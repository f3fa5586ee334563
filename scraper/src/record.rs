use std::fmt;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Marker written in place of a field the detail page did not provide.
pub const NOT_FOUND: &str = "N/A";

/// Column names of a yearly table, excluding the leading index column.
pub const COLUMNS: [&str; 11] = [
    "Name",
    "Domestic Total Gross",
    "Distributor",
    "Genre",
    "MPAA Rating",
    "Release Date",
    "Runtime",
    "Production Budget",
    "Director",
    "Producer",
    "Actor",
];

/// Relative path of a movie detail page, e.g. `/movies/?id=ragingbull.htm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Link(String);

impl Link {
    pub fn new(path: impl Into<String>) -> Self {
        Link(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieRecord {
    pub name: Option<String>,
    pub domestic_total_gross: Option<String>,
    pub distributor: Option<String>,
    pub genre: Option<String>,
    pub mpaa_rating: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<String>,
    pub production_budget: Option<String>,
    pub directors: Vec<String>,
    pub producers: Vec<String>,
    pub actors: Vec<String>,
}

impl MovieRecord {
    /// Cells in `COLUMNS` order, with sentinels substituted.
    pub fn to_row(&self) -> Vec<String> {
        let scalars = [
            &self.name,
            &self.domestic_total_gross,
            &self.distributor,
            &self.genre,
            &self.mpaa_rating,
            &self.release_date,
            &self.runtime,
            &self.production_budget,
        ];
        let people = [&self.directors, &self.producers, &self.actors];

        scalars
            .into_iter()
            .map(|value| value.clone().unwrap_or_else(|| NOT_FOUND.to_string()))
            .chain(people.into_iter().map(|names| credits_cell(names)))
            .collect()
    }

    pub fn from_row<'a, I>(cells: I) -> Result<MovieRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cells: Vec<&str> = cells.into_iter().collect();
        if cells.len() != COLUMNS.len() {
            return Err(anyhow!(
                "expected {} columns, found {}",
                COLUMNS.len(),
                cells.len()
            ));
        }

        let scalar = |i: usize| match cells[i] {
            NOT_FOUND => None,
            value => Some(value.to_string()),
        };
        let people = |i: usize| match cells[i] {
            NOT_FOUND | "" => Vec::new(),
            value => value.split(',').map(|name| name.to_string()).collect(),
        };

        Ok(MovieRecord {
            name: scalar(0),
            domestic_total_gross: scalar(1),
            distributor: scalar(2),
            genre: scalar(3),
            mpaa_rating: scalar(4),
            release_date: scalar(5),
            runtime: scalar(6),
            production_budget: scalar(7),
            directors: people(8),
            producers: people(9),
            actors: people(10),
        })
    }
}

/// Comma-joined names, or the sentinel when nobody was credited.
pub fn credits_cell(names: &[String]) -> String {
    if names.is_empty() {
        NOT_FOUND.to_string()
    } else {
        names.join(",")
    }
}
