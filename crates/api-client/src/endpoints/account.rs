//! Account endpoints: registration, login and the current user

use crate::auth::AuthToken;
use crate::client::LibremoreClient;
use crate::error::{ApiResult, Operation};
use libremore_core::models::{AccessToken, UserAccount};
use reqwest::Method;
use serde::Serialize;

/// Account API interface
#[derive(Clone)]
pub struct AccountApi {
    client: LibremoreClient,
}

impl AccountApi {
    pub(crate) fn new(client: LibremoreClient) -> Self {
        Self { client }
    }

    /// Register a new user
    ///
    /// POST /auth/register
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<serde_json::Value> {
        self.client
            .post(
                Operation::Register,
                &["auth", "register"],
                None,
                &Credentials { email, password },
            )
            .await
    }

    /// Exchange email and password for a bearer token
    ///
    /// POST /auth/login, sent as an OAuth2 password form
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthToken> {
        let request = self
            .client
            .request_builder(Method::POST, &["auth", "login"], None)
            .form(&[("username", email), ("password", password)]);

        let issued: AccessToken = self.client.execute(Operation::Login, request).await?;
        Ok(AuthToken::from(issued))
    }

    /// The user the token belongs to
    ///
    /// GET /auth/me
    pub async fn me(&self, token: &AuthToken) -> ApiResult<UserAccount> {
        self.client
            .get(Operation::CurrentUser, &["auth", "me"], Some(token))
            .await
    }
}

/// Body of `POST /auth/register`
#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}
