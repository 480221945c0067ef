//! Health check endpoint

use crate::client::LibremoreClient;
use crate::error::{ApiResult, Operation};
use libremore_core::models::HealthStatus;
use std::time::{Duration, Instant};

/// Health check API interface
#[derive(Clone)]
pub struct HealthApi {
    client: LibremoreClient,
}

impl HealthApi {
    pub(crate) fn new(client: LibremoreClient) -> Self {
        Self { client }
    }

    /// GET /health
    pub async fn check(&self) -> ApiResult<HealthStatus> {
        self.client.get(Operation::Health, &["health"], None).await
    }

    /// Check health with timing information
    pub async fn check_timed(&self) -> ApiResult<(HealthStatus, Duration)> {
        let start = Instant::now();
        let status = self.check().await?;
        Ok((status, start.elapsed()))
    }
}
