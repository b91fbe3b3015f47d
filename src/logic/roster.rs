//! Roster import from CSV (`name,club,handicap`, header row required).

use crate::models::{Competitor, EngineError};
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct RosterRow {
    name: String,
    club: String,
    #[serde(default)]
    handicap: Option<f64>,
}

/// Read competitors from CSV. Rows with an empty name are an error; an empty handicap reads as 0.
pub fn read_roster_csv<R: Read>(reader: R) -> Result<Vec<Competitor>, EngineError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut competitors = Vec::new();
    for (line, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        if row.name.is_empty() {
            return Err(EngineError::Roster(format!("row {} has no name", line + 1)));
        }
        competitors.push(Competitor::new(row.name, row.club, row.handicap.unwrap_or(0.0)));
    }
    log::info!("Read {} competitor(s) from roster CSV", competitors.len());
    Ok(competitors)
}
