//! Core domain types for LibreMore clients
//!
//! This crate holds everything a LibreMore front end needs that does not
//! touch the network:
//!
//! - **Domain model**: recommendations, availability rows and reading goals
//!   in the backend's wire format
//! - **Availability ranking**: picks the one row to show for a book from a
//!   fixed status-priority table
//! - **ISBN-13 handling**: normalisation of user-typed identifiers
//! - **Configuration**: TOML file configuration shared by the tools
//!
//! # Example
//!
//! ```rust
//! use libremore_core::availability::{select_best, DisplayStatus, StatusTone};
//! use libremore_core::models::AvailabilityRow;
//!
//! let rows = vec![
//!     AvailabilityRow::new("9784003101018", "Miyazaki_Pref", "貸出中"),
//!     AvailabilityRow::new("9784003101018", "Miyazaki_City", "在架"),
//! ];
//!
//! match select_best(&rows) {
//!     DisplayStatus::Ranked(best) => {
//!         assert_eq!(best.row.systemid, "Miyazaki_City");
//!         assert_eq!(best.tone(), StatusTone::Positive);
//!     }
//!     DisplayStatus::Pending => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod availability;
pub mod config;
pub mod error;
pub mod isbn;
pub mod models;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::availability::{select_best, DisplayStatus, RankedRow, StatusTone};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{Error, Result};
    pub use crate::isbn::normalize_isbn13;
    pub use crate::models::{
        AvailabilityRow, GoalBook, GoalBookStatus, GoalDetail, GoalProgress, GoalSummary,
        NewGoal, Recommendation,
    };
}
