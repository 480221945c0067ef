//! LibreMore CLI
//!
//! Book recommendations, library availability and reading goals from the
//! terminal.

use clap::{Parser, Subcommand};
use libremore_core::isbn::normalize_isbn13;
use libremore_core::models::GoalBookStatus;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;
mod token;
mod types;

use commands::{account, availability, goals, health, recommend};
use context::Context;
use output::OutputFormat;

/// Book recommendations and library availability
#[derive(Parser)]
#[command(name = "libremore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Backend base URL (overrides LIBREMORE_API_BASE and the config file)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Path to a libremore.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bearer token (overrides the stored login)
    #[arg(long, global = true, env = "LIBREMORE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend books for a reading purpose
    Recommend {
        /// What you want to read about
        purpose: String,

        /// City whose libraries to check (defaults to the configured city)
        #[arg(short, long)]
        city: Option<String>,

        /// Look up library availability for each recommended book
        #[arg(short, long)]
        availability: bool,
    },

    /// Check library availability for books
    Availability {
        /// ISBN-13 values
        #[arg(required = true, value_parser = parse_isbn)]
        isbns: Vec<String>,

        /// City whose libraries to check (defaults to the configured city)
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Manage reading goals
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },

    /// Log in and out, or show the current account
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Check backend health
    Health,
}

#[derive(Subcommand)]
enum GoalsAction {
    /// List goals with their progress
    List {
        /// Include archived goals
        #[arg(short, long)]
        all: bool,
    },

    /// Show one goal and its books
    Show {
        /// Goal id
        id: String,
    },

    /// Set the reading status of a book in a goal
    SetStatus {
        /// Goal id
        id: String,

        /// ISBN-13 of the book
        #[arg(value_parser = parse_isbn)]
        isbn: String,

        /// unread, reading or done
        #[arg(value_parser = parse_status)]
        status: GoalBookStatus,
    },

    /// Create a goal
    Create {
        /// Goal title
        title: String,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<chrono::NaiveDate>,

        /// ISBN-13 of a book to include (repeatable)
        #[arg(short, long = "isbn", value_parser = parse_isbn)]
        isbns: Vec<String>,
    },

    /// Archive a goal
    Archive {
        /// Goal id
        id: String,

        /// Restore instead of archiving
        #[arg(long)]
        undo: bool,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account
    Register {
        /// Email address
        email: String,

        /// Password (at least 8 characters)
        #[arg(long, env = "LIBREMORE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in and store the token for later commands
    Login {
        /// Email address
        email: String,

        /// Password
        #[arg(long, env = "LIBREMORE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored token
    Logout,

    /// Show the logged-in user
    Whoami,
}

fn parse_isbn(raw: &str) -> Result<String, String> {
    normalize_isbn13(raw).map_err(|e| e.to_string())
}

fn parse_status(raw: &str) -> Result<GoalBookStatus, String> {
    raw.parse().map_err(|e: libremore_core::Error| e.to_string())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("libremore=debug,libremore_api_client=debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match Context::new(
        cli.format,
        cli.config.as_deref(),
        cli.api_base.as_deref(),
        cli.token.as_deref(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Recommend {
            purpose,
            city,
            availability,
        } => recommend::run(&ctx, &purpose, city.as_deref(), availability).await,

        Commands::Availability { isbns, city } => {
            availability::run(&ctx, &isbns, city.as_deref()).await
        }

        Commands::Goals { action } => match action {
            GoalsAction::List { all } => goals::list(&ctx, all).await,
            GoalsAction::Show { id } => goals::show(&ctx, &id).await,
            GoalsAction::SetStatus { id, isbn, status } => {
                goals::set_status(&ctx, &id, &isbn, status).await
            }
            GoalsAction::Create {
                title,
                description,
                due,
                isbns,
            } => goals::create(&ctx, &title, description, due, isbns).await,
            GoalsAction::Archive { id, undo } => goals::archive(&ctx, &id, !undo).await,
        },

        Commands::Auth { action } => match action {
            AuthAction::Register { email, password } => {
                account::register(&ctx, &email, &password).await
            }
            AuthAction::Login { email, password } => account::login(&ctx, &email, &password).await,
            AuthAction::Logout => account::logout(&ctx),
            AuthAction::Whoami => account::whoami(&ctx).await,
        },

        Commands::Health => health::run(&ctx).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
