//! Client for the LibreMore recommendation and library-availability API
//!
//! This crate wraps the LibreMore backend in typed calls:
//!
//! - **Recommendations**: books for a free-text reading purpose
//! - **Availability**: lending status of books across a city's library systems
//! - **Goals**: reading goals and per-book reading status
//! - **Account**: registration, login and the current user
//!
//! Each call is exactly one HTTP exchange. A non-success response, a
//! transport failure or an undecodable body is reported as
//! [`ApiError::RequestFailed`] with a fixed message for the operation.
//! Authenticated calls take an [`AuthToken`] argument; the client keeps no
//! credential of its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use libremore_api_client::{AuthToken, LibremoreClient};
//! use libremore_core::availability::select_best;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LibremoreClient::new()?;
//!
//!     let books = client.recommendations().fetch("learn statistics").await?;
//!     let isbns: Vec<&str> = books.iter().map(|b| b.isbn13.as_str()).collect();
//!     let rows = client.availability().fetch(&isbns, "宮崎市").await?;
//!     if let Some(best) = select_best(&rows).best() {
//!         println!("best status: {}", best.status());
//!     }
//!
//!     let token = AuthToken::new(std::env::var("LIBREMORE_TOKEN")?);
//!     for goal in client.goals().list(&token).await? {
//!         println!("{} {}%", goal.title, goal.progress_percent());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use auth::AuthToken;
pub use client::LibremoreClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, Operation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::auth::AuthToken;
    pub use crate::client::LibremoreClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{AccountApi, AvailabilityApi, GoalsApi, HealthApi, RecommendationsApi};
    pub use crate::error::{ApiError, ApiResult, Operation};
}
