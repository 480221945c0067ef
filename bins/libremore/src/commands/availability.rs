//! Availability command

use crate::context::Context;
use crate::output::{OutputFormat, Status, print_json, status_badge};
use crate::types::BookAvailability;
use anyhow::Result;
use libremore_api_client::endpoints::availability::AvailabilityRequest;
use libremore_core::availability::{catalog_url, group_by_isbn, select_best};
use libremore_core::isbn::has_valid_check_digit;
use libremore_core::models::AvailabilityRow;
use owo_colors::OwoColorize;
use tracing::warn;

/// Look up books in one batch and show the best status per book
pub async fn run(ctx: &Context, isbns: &[String], city: Option<&str>) -> Result<()> {
    let request = AvailabilityRequest::new(isbns, ctx.city(city));
    for isbn in request.isbns.iter().filter(|isbn| !has_valid_check_digit(isbn)) {
        warn!(isbn = %isbn, "ISBN-13 check digit does not match");
    }
    let rows = ctx
        .client
        .availability()
        .fetch(&request.isbns, &request.city)
        .await?;
    let groups = group_by_isbn(&rows);

    let per_book: Vec<(&str, Vec<AvailabilityRow>)> = request
        .isbns
        .iter()
        .map(|isbn| {
            let rows = groups
                .iter()
                .find(|(key, _)| key == isbn)
                .map(|(_, members)| members.iter().map(|row| (*row).clone()).collect())
                .unwrap_or_default();
            (isbn.as_str(), rows)
        })
        .collect();

    if ctx.format == OutputFormat::Json {
        let report: Vec<BookAvailability> = per_book
            .iter()
            .map(|(isbn, rows)| BookAvailability::from_rows(isbn, rows))
            .collect();
        return print_json(&report);
    }

    Status::header(&format!("Availability in {}", request.city));
    for (isbn, rows) in &per_book {
        let status = select_best(rows);
        let system = status
            .best()
            .map(|best| format!(" ({})", best.row.systemid))
            .unwrap_or_default();
        println!("  {isbn}  {}{}", status_badge(&status), system.dimmed());
        if let Some(url) = catalog_url(rows) {
            println!("    └─ {}", url.underline());
        }
    }
    println!();

    Ok(())
}
