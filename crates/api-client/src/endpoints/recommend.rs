//! Recommendation endpoint

use crate::client::LibremoreClient;
use crate::error::{ApiResult, Operation};
use libremore_core::models::Recommendation;
use serde::Serialize;

/// Recommendation API interface
#[derive(Clone)]
pub struct RecommendationsApi {
    client: LibremoreClient,
}

impl RecommendationsApi {
    pub(crate) fn new(client: LibremoreClient) -> Self {
        Self { client }
    }

    /// Recommend books for a free-text reading purpose
    ///
    /// POST /recommend
    ///
    /// The purpose is sent as given; the backend decides what an empty or
    /// unusual purpose means.
    pub async fn fetch(&self, purpose: &str) -> ApiResult<Vec<Recommendation>> {
        self.client
            .post(
                Operation::Recommend,
                &["recommend"],
                None,
                &RecommendRequest { purpose },
            )
            .await
    }
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest<'a> {
    /// Reading purpose
    pub purpose: &'a str,
}
