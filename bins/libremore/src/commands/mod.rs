//! Subcommand implementations

pub mod account;
pub mod availability;
pub mod goals;
pub mod health;
pub mod recommend;
