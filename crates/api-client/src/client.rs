//! Main API client implementation

use crate::auth::AuthToken;
use crate::config::ClientConfig;
use crate::endpoints::{AccountApi, AvailabilityApi, GoalsApi, HealthApi, RecommendationsApi};
use crate::error::{ApiError, ApiResult, Operation};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// LibreMore API client
///
/// Every call is a single request/response exchange: no retry, no backoff
/// and no timeout beyond the configured one. The client holds no session
/// state; authenticated calls take an [`AuthToken`] each time. Cloning is
/// cheap and clones share the connection pool.
#[derive(Clone)]
pub struct LibremoreClient {
    inner: Client,
    config: Arc<ClientConfig>,
    base: Arc<Url>,
}

impl LibremoreClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let mut default_headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, user_agent);

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| ApiError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            base: Arc::new(base),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access recommendation endpoints
    #[must_use]
    pub fn recommendations(&self) -> RecommendationsApi {
        RecommendationsApi::new(self.clone())
    }

    /// Access library availability endpoints
    #[must_use]
    pub fn availability(&self) -> AvailabilityApi {
        AvailabilityApi::new(self.clone())
    }

    /// Access reading goal endpoints
    #[must_use]
    pub fn goals(&self) -> GoalsApi {
        GoalsApi::new(self.clone())
    }

    /// Access account endpoints
    #[must_use]
    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    /// Access health check endpoint
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Build an absolute URL from path segments
    ///
    /// Segments are percent-encoded, so identifiers may contain `/` or `?`.
    #[must_use]
    pub fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = (*self.base).clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Build a request builder, attaching the bearer token when given
    pub fn request_builder(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&AuthToken>,
    ) -> RequestBuilder {
        let request = self.inner.request(method, self.endpoint_url(segments));
        match token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        }
    }

    /// Perform a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        operation: Operation,
        segments: &[&str],
        token: Option<&AuthToken>,
    ) -> ApiResult<T> {
        let request = self.request_builder(Method::GET, segments, token);
        self.execute(operation, request).await
    }

    /// Perform a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        segments: &[&str],
        token: Option<&AuthToken>,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.request_builder(Method::POST, segments, token).json(body);
        self.execute(operation, request).await
    }

    /// Perform a PATCH request with a JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        segments: &[&str],
        token: Option<&AuthToken>,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.request_builder(Method::PATCH, segments, token).json(body);
        self.execute(operation, request).await
    }

    /// Send a request once and decode a successful JSON response
    ///
    /// Any transport error, non-2xx status or undecodable body becomes
    /// [`ApiError::RequestFailed`] for `operation`.
    #[instrument(skip(self, request))]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        let request = request
            .header(X_REQUEST_ID, &request_id)
            .build()
            .map_err(|e| ApiError::transport(operation, e))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Sending request"
        );

        let start = Instant::now();
        let response = match self.inner.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    url = %url,
                    error = %e,
                    "Request could not be sent"
                );
                return Err(ApiError::transport(operation, e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                request_id = %request_id,
                url = %url,
                status = status.as_u16(),
                elapsed_ms = start.elapsed().as_millis(),
                "Request failed"
            );
            return Err(ApiError::status(operation, status.as_u16()));
        }

        let value = response.json::<T>().await.map_err(|e| {
            warn!(
                request_id = %request_id,
                url = %url,
                error = %e,
                "Response body could not be decoded"
            );
            ApiError::transport(operation, e)
        })?;

        debug!(
            request_id = %request_id,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Request succeeded"
        );
        Ok(value)
    }
}
