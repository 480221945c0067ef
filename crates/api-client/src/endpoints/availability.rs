//! Library availability endpoint

use crate::client::LibremoreClient;
use crate::error::{ApiResult, Operation};
use libremore_core::models::AvailabilityRow;
use serde::Serialize;
use std::collections::HashSet;

/// Availability API interface
#[derive(Clone)]
pub struct AvailabilityApi {
    client: LibremoreClient,
}

impl AvailabilityApi {
    pub(crate) fn new(client: LibremoreClient) -> Self {
        Self { client }
    }

    /// Look up a set of books in one city's library systems
    ///
    /// POST /availability
    ///
    /// Duplicate ISBNs are sent once. The response has one row per book and
    /// library system; the batch succeeds or fails as a whole.
    pub async fn fetch<I, S>(&self, isbns: I, city: &str) -> ApiResult<Vec<AvailabilityRow>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = AvailabilityRequest::new(isbns, city);
        self.client
            .post(Operation::Availability, &["availability"], None, &body)
            .await
    }
}

/// Body of `POST /availability`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRequest {
    /// ISBN-13 values, unique, in first-seen order
    pub isbns: Vec<String>,
    /// City to search
    pub city: String,
}

impl AvailabilityRequest {
    /// Build a request, dropping duplicate ISBNs
    pub fn new<I, S>(isbns: I, city: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let isbns = isbns
            .into_iter()
            .map(|isbn| isbn.as_ref().to_string())
            .filter(|isbn| seen.insert(isbn.clone()))
            .collect();

        Self {
            isbns,
            city: city.to_string(),
        }
    }
}
