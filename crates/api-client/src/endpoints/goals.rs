//! Reading goal endpoints
//!
//! Every call here needs a bearer token. The backend computes progress;
//! nothing is cached on this side, so a failed update leaves no local state
//! to roll back.

use crate::auth::AuthToken;
use crate::client::LibremoreClient;
use crate::error::{ApiResult, Operation};
use libremore_core::models::{GoalBookStatus, GoalDetail, GoalSummary, NewGoal};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Goals API interface
#[derive(Clone)]
pub struct GoalsApi {
    client: LibremoreClient,
}

impl GoalsApi {
    pub(crate) fn new(client: LibremoreClient) -> Self {
        Self { client }
    }

    /// List the user's active goals
    ///
    /// GET /mypage/goals
    pub async fn list(&self, token: &AuthToken) -> ApiResult<Vec<GoalSummary>> {
        self.list_goals(token, false).await
    }

    /// List the user's goals including archived ones
    ///
    /// GET /mypage/goals?include_archived=true
    pub async fn list_all(&self, token: &AuthToken) -> ApiResult<Vec<GoalSummary>> {
        self.list_goals(token, true).await
    }

    async fn list_goals(
        &self,
        token: &AuthToken,
        include_archived: bool,
    ) -> ApiResult<Vec<GoalSummary>> {
        let mut request =
            self.client
                .request_builder(Method::GET, &["mypage", "goals"], Some(token));
        if include_archived {
            request = request.query(&[("include_archived", "true")]);
        }

        let envelope: GoalListEnvelope = self.client.execute(Operation::ListGoals, request).await?;
        Ok(envelope.items)
    }

    /// Fetch one goal with its books
    ///
    /// GET /goals/{goal_id}
    pub async fn detail(&self, goal_id: &str, token: &AuthToken) -> ApiResult<GoalDetail> {
        self.client
            .get(Operation::GoalDetail, &["goals", goal_id], Some(token))
            .await
    }

    /// Change the reading status of one book in a goal
    ///
    /// PATCH /goals/{goal_id}/books/{isbn13}
    ///
    /// The response body is returned as-is; the current backend sends a
    /// [`GoalProgress`](libremore_core::models::GoalProgress).
    pub async fn update_book_status(
        &self,
        goal_id: &str,
        isbn13: &str,
        status: GoalBookStatus,
        token: &AuthToken,
    ) -> ApiResult<serde_json::Value> {
        self.client
            .patch(
                Operation::UpdateBookStatus,
                &["goals", goal_id, "books", isbn13],
                Some(token),
                &StatusUpdate { status },
            )
            .await
    }

    /// Create a goal, optionally seeded with books
    ///
    /// POST /goals
    pub async fn create(&self, goal: &NewGoal, token: &AuthToken) -> ApiResult<GoalSummary> {
        self.client
            .post(Operation::CreateGoal, &["goals"], Some(token), goal)
            .await
    }

    /// Archive or restore a goal
    ///
    /// PATCH /goals/{goal_id}/archive
    pub async fn set_archived(
        &self,
        goal_id: &str,
        archived: bool,
        token: &AuthToken,
    ) -> ApiResult<GoalSummary> {
        self.client
            .patch(
                Operation::ArchiveGoal,
                &["goals", goal_id, "archive"],
                Some(token),
                &ArchiveUpdate { archived },
            )
            .await
    }
}

/// Response of `GET /mypage/goals`
///
/// A body without `items` is an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalListEnvelope {
    /// Goals
    #[serde(default)]
    pub items: Vec<GoalSummary>,
}

/// Body of `PATCH /goals/{id}/books/{isbn13}`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusUpdate {
    /// New reading status
    pub status: GoalBookStatus,
}

/// Body of `PATCH /goals/{id}/archive`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArchiveUpdate {
    /// Whether the goal is archived
    pub archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_items() {
        let envelope: GoalListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.items.is_empty());
    }

    #[test]
    fn test_status_update_wire_format() {
        let body = serde_json::to_string(&StatusUpdate {
            status: GoalBookStatus::Reading,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"reading"}"#);
    }
}
