//! Account commands

use crate::context::Context;
use crate::output::{OutputFormat, Status, print_json};
use anyhow::{Context as _, Result};
use serde_json::json;

/// Register a new account
pub async fn register(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let body = ctx.client.account().register(email, password).await?;

    if ctx.format == OutputFormat::Json {
        return print_json(&body);
    }

    Status::success(&format!("Registered {email}"));
    Status::info("Run `libremore auth login` to sign in");
    Ok(())
}

/// Log in and persist the token
pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let token = ctx.client.account().login(email, password).await?;

    let store = ctx.token_store()?;
    store
        .save(&token)
        .with_context(|| format!("Failed to save token to {}", store.path().display()))?;

    if ctx.format == OutputFormat::Json {
        return print_json(&json!({ "email": email, "token_file": store.path() }));
    }

    Status::success(&format!("Logged in as {email}"));
    Ok(())
}

/// Remove the stored token
pub fn logout(ctx: &Context) -> Result<()> {
    let store = ctx.token_store()?;
    let removed = store
        .clear()
        .with_context(|| format!("Failed to remove {}", store.path().display()))?;

    if ctx.format == OutputFormat::Json {
        return print_json(&json!({ "logged_out": removed }));
    }

    if removed {
        Status::success("Logged out");
    } else {
        Status::warning("No stored login");
    }
    Ok(())
}

/// Show the user the token belongs to
pub async fn whoami(ctx: &Context) -> Result<()> {
    let token = ctx.token()?;
    let user = ctx.client.account().me(&token).await?;

    if ctx.format == OutputFormat::Json {
        return print_json(&user);
    }

    println!("{} ({})", user.email, user.id);
    Ok(())
}
