//! Recommend command

use crate::context::Context;
use crate::output::{OutputFormat, Status, format_count, print_json, status_badge};
use crate::types::{BookAvailability, BookReport};
use anyhow::{Context as _, Result};
use libremore_api_client::ApiResult;
use libremore_core::availability::{catalog_url, select_best};
use libremore_core::models::{AvailabilityRow, Recommendation};
use owo_colors::OwoColorize;
use tokio::task::JoinSet;

/// Fetch recommendations, optionally with per-book availability
pub async fn run(
    ctx: &Context,
    purpose: &str,
    city: Option<&str>,
    with_availability: bool,
) -> Result<()> {
    let books = ctx.client.recommendations().fetch(purpose).await?;

    let lookups = if with_availability {
        Some(lookup_each(ctx, &books, ctx.city(city)).await?)
    } else {
        None
    };

    if ctx.format == OutputFormat::Json {
        let reports: Vec<BookReport> = books
            .into_iter()
            .enumerate()
            .map(|(i, book)| {
                let lookup = lookups.as_ref().map(|l| &l[i]);
                BookReport {
                    availability: lookup
                        .and_then(|r| r.as_ref().ok())
                        .map(|rows| BookAvailability::from_rows(&book.isbn13, rows)),
                    error: lookup.and_then(|r| r.as_ref().err()).map(ToString::to_string),
                    book,
                }
            })
            .collect();
        return print_json(&reports);
    }

    if books.is_empty() {
        Status::info("No recommendations for that purpose");
        return Ok(());
    }

    Status::header(&format_count(books.len(), "recommendation", "recommendations"));
    for (i, book) in books.iter().enumerate() {
        println!();
        println!("  {}", book.title.bold());
        if let Some(author) = &book.author {
            println!("  {}", author);
        }
        if let Some(reason) = &book.reason {
            println!("  {}", reason.dimmed());
        }
        let codes: Vec<&str> = book.classifications().collect();
        if codes.is_empty() {
            println!("  {}", book.isbn13.dimmed());
        } else {
            println!("  {} {}", book.isbn13.dimmed(), codes.join(" / ").dimmed());
        }

        if let Some(lookups) = &lookups {
            match &lookups[i] {
                Ok(rows) => {
                    println!("  {}", status_badge(&select_best(rows)));
                    if let Some(url) = catalog_url(rows) {
                        println!("    └─ {}", url.underline());
                    }
                }
                Err(e) => println!("  {}", e.to_string().red()),
            }
        }
    }
    println!();

    Ok(())
}

/// One availability call per book, all in flight at once
///
/// Results come back in `books` order; each lookup fails on its own.
async fn lookup_each(
    ctx: &Context,
    books: &[Recommendation],
    city: &str,
) -> Result<Vec<ApiResult<Vec<AvailabilityRow>>>> {
    let mut set = JoinSet::new();
    for (i, book) in books.iter().enumerate() {
        let api = ctx.client.availability();
        let isbn = book.isbn13.clone();
        let city = city.to_string();
        set.spawn(async move { (i, api.fetch([isbn], &city).await) });
    }

    let mut results: Vec<Option<ApiResult<Vec<AvailabilityRow>>>> =
        books.iter().map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (i, result) = joined.context("Availability lookup task failed")?;
        results[i] = Some(result);
    }

    Ok(results.into_iter().flatten().collect())
}
