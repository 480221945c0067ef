//! JSON output shapes

use libremore_core::availability::{StatusTone, catalog_url, select_best};
use libremore_core::models::{AvailabilityRow, Recommendation};
use serde::Serialize;

/// Ranked availability of one book
#[derive(Debug, Serialize)]
pub struct BookAvailability {
    pub isbn13: String,
    /// Selected status; absent while no rows are known
    pub status: Option<String>,
    pub rank: Option<u8>,
    pub tone: Option<StatusTone>,
    pub recognized: bool,
    pub systemid: Option<String>,
    pub catalog_url: Option<String>,
    pub systems_checked: usize,
}

impl BookAvailability {
    pub fn from_rows(isbn13: &str, rows: &[AvailabilityRow]) -> Self {
        let best = select_best(rows);
        let ranked = best.best();
        Self {
            isbn13: isbn13.to_string(),
            status: ranked.map(|r| r.status().to_string()),
            rank: ranked.map(|r| r.rank),
            tone: ranked.map(|r| r.tone()),
            recognized: ranked.is_some_and(|r| r.is_recognized()),
            systemid: ranked.map(|r| r.row.systemid.clone()),
            catalog_url: catalog_url(rows).map(str::to_string),
            systems_checked: rows.len(),
        }
    }
}

/// A recommendation with its availability lookup outcome
#[derive(Debug, Serialize)]
pub struct BookReport {
    #[serde(flatten)]
    pub book: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<BookAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
