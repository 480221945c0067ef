//! Reading goal commands

use crate::context::Context;
use crate::output::{OutputFormat, Status, format_count, print_json, progress_bar};
use anyhow::Result;
use chrono::NaiveDate;
use libremore_core::models::{GoalBookStatus, GoalProgress, GoalSummary, NewGoal};
use owo_colors::OwoColorize;

/// List goals with progress
pub async fn list(ctx: &Context, include_archived: bool) -> Result<()> {
    let token = ctx.token()?;
    let goals = ctx.client.goals();
    let items = if include_archived {
        goals.list_all(&token).await?
    } else {
        goals.list(&token).await?
    };

    if ctx.format == OutputFormat::Json {
        return print_json(&items);
    }

    if items.is_empty() {
        Status::info("No goals yet");
        return Ok(());
    }

    Status::header(&format_count(items.len(), "goal", "goals"));
    for goal in &items {
        print_summary(goal);
    }
    println!();
    Ok(())
}

fn print_summary(goal: &GoalSummary) {
    let archived = if goal.archived { " (archived)" } else { "" };
    println!("  {}{}", goal.title.bold(), archived.dimmed());
    println!(
        "    {}  {}/{} done",
        progress_bar(goal.progress_percent()),
        goal.done_books,
        goal.total_books
    );
    if let Some(due) = goal.due_date {
        println!("    due {due}");
    }
    println!("    {}", goal.id.dimmed());
}

/// Show a goal and its books in position order
pub async fn show(ctx: &Context, goal_id: &str) -> Result<()> {
    let token = ctx.token()?;
    let detail = ctx.client.goals().detail(goal_id, &token).await?;

    if ctx.format == OutputFormat::Json {
        return print_json(&detail);
    }

    Status::header(&detail.summary.title);
    if let Some(description) = &detail.summary.description {
        println!("{description}");
    }
    println!(
        "{}  {}/{} done",
        progress_bar(detail.summary.progress_percent()),
        detail.summary.done_books,
        detail.summary.total_books
    );
    println!();

    for entry in detail.books_in_order() {
        let marker = match entry.status {
            GoalBookStatus::Done => "●".green().to_string(),
            GoalBookStatus::Reading => "◐".yellow().to_string(),
            GoalBookStatus::Unread => "○".dimmed().to_string(),
        };
        let finished = entry
            .completed_at
            .map(|at| format!(" finished {}", at.format("%Y-%m-%d")))
            .unwrap_or_default();
        println!(
            "  {marker} {} {}{}",
            entry.book.title,
            entry.book.isbn13.dimmed(),
            finished.dimmed()
        );
    }
    println!();
    Ok(())
}

/// Set one book's reading status
pub async fn set_status(
    ctx: &Context,
    goal_id: &str,
    isbn13: &str,
    status: GoalBookStatus,
) -> Result<()> {
    let token = ctx.token()?;
    let body = ctx
        .client
        .goals()
        .update_book_status(goal_id, isbn13, status, &token)
        .await?;

    if ctx.format == OutputFormat::Json {
        return print_json(&body);
    }

    Status::success(&format!("{isbn13} marked {status}"));
    if let Ok(progress) = serde_json::from_value::<GoalProgress>(body) {
        println!(
            "  {}  {}/{} done",
            progress_bar(progress.percent()),
            progress.done_books,
            progress.total_books
        );
    }
    Ok(())
}

/// Create a goal
pub async fn create(
    ctx: &Context,
    title: &str,
    description: Option<String>,
    due: Option<NaiveDate>,
    isbns: Vec<String>,
) -> Result<()> {
    let token = ctx.token()?;
    let mut goal = NewGoal::new(title).with_isbns(isbns);
    goal.description = description;
    goal.due_date = due;

    let created = ctx.client.goals().create(&goal, &token).await?;

    if ctx.format == OutputFormat::Json {
        return print_json(&created);
    }

    Status::success(&format!("Created goal {}", created.title));
    print_summary(&created);
    Ok(())
}

/// Archive or restore a goal
pub async fn archive(ctx: &Context, goal_id: &str, archived: bool) -> Result<()> {
    let token = ctx.token()?;
    let goal = ctx
        .client
        .goals()
        .set_archived(goal_id, archived, &token)
        .await?;

    if ctx.format == OutputFormat::Json {
        return print_json(&goal);
    }

    let verb = if goal.archived { "Archived" } else { "Restored" };
    Status::success(&format!("{verb} goal {}", goal.title));
    Ok(())
}
