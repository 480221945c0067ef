//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of backend routes.
//!
//! | Module | Routes | Auth |
//! |--------|--------|------|
//! | `recommend` | `POST /recommend` | none |
//! | `availability` | `POST /availability` | none |
//! | `goals` | `GET /mypage/goals`, `POST /goals`, `GET /goals/{id}`, `PATCH /goals/{id}/books/{isbn13}`, `PATCH /goals/{id}/archive` | bearer |
//! | `account` | `POST /auth/register`, `POST /auth/login`, `GET /auth/me` | bearer for `me` |
//! | `health` | `GET /health` | none |

pub mod account;
pub mod availability;
pub mod goals;
pub mod health;
pub mod recommend;

pub use account::AccountApi;
pub use availability::AvailabilityApi;
pub use goals::GoalsApi;
pub use health::HealthApi;
pub use recommend::RecommendationsApi;
