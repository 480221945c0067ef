//! Per-invocation settings shared by all commands

use crate::output::OutputFormat;
use crate::token::TokenStore;
use anyhow::{Context as _, Result, anyhow};
use libremore_api_client::config::{BASE_URL_ENV, TIMEOUT_ENV};
use libremore_api_client::{AuthToken, ClientConfig, LibremoreClient};
use libremore_core::config::Config;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Resolved configuration, client and credential source
pub struct Context {
    pub client: LibremoreClient,
    pub config: Config,
    pub format: OutputFormat,
    token_override: Option<AuthToken>,
}

impl Context {
    /// Resolve settings: flag, then environment, then config file, then default
    pub fn new(
        format: OutputFormat,
        config_path: Option<&Path>,
        api_base: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self> {
        let config = Config::load(config_path)?;
        let mut client_config = ClientConfig::from_env()?;

        if !env_is_set(BASE_URL_ENV) {
            if let Some(url) = &config.schema.api.base_url {
                client_config = client_config.with_base_url(url.clone());
            }
        }
        if !env_is_set(TIMEOUT_ENV) {
            if let Some(secs) = config.schema.api.timeout_secs {
                client_config = client_config.with_timeout(Duration::from_secs(secs));
            }
        }
        if let Some(url) = api_base {
            client_config = client_config.with_base_url(url);
        }

        let client = LibremoreClient::with_config(client_config)?;
        let token_override = token.map(AuthToken::new).filter(|t| !t.is_empty());

        Ok(Self {
            client,
            config,
            format,
            token_override,
        })
    }

    /// City to search: the given one or the configured default
    pub fn city<'a>(&'a self, city: Option<&'a str>) -> &'a str {
        city.unwrap_or(&self.config.schema.library.default_city)
    }

    /// Where the login token is kept
    pub fn token_store(&self) -> Result<TokenStore> {
        self.config
            .token_path()
            .map(TokenStore::new)
            .ok_or_else(|| anyhow!("No location for the token file; set [auth] token_file"))
    }

    /// Credential for authenticated commands
    ///
    /// Fails without touching the network when no token is available.
    pub fn token(&self) -> Result<AuthToken> {
        if let Some(token) = &self.token_override {
            return Ok(token.clone());
        }
        self.token_store()?
            .load()
            .context("Failed to read stored token")?
            .ok_or_else(|| anyhow!("Not logged in: run `libremore auth login` or pass --token"))
    }
}

/// Whether an environment override is present; blank values count as unset
fn env_is_set(name: &str) -> bool {
    env::var(name).is_ok_and(|value| !value.trim().is_empty())
}
