//! Health check command

use crate::context::Context;
use crate::output::{OutputFormat, print_json};
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde_json::json;

/// Check the backend and report round-trip time
pub async fn run(ctx: &Context) -> Result<()> {
    let (health, elapsed) = ctx.client.health().check_timed().await?;

    if ctx.format == OutputFormat::Json {
        print_json(&json!({
            "base_url": ctx.client.base_url(),
            "status": health.status,
            "elapsed_ms": u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }))?;
    } else {
        let label = if health.is_ok() {
            "✓ OK".green().to_string()
        } else {
            format!("✗ {}", health.status).red().to_string()
        };
        println!(
            "  {}  {} {}",
            ctx.client.base_url(),
            label,
            format!("({}ms)", elapsed.as_millis()).dimmed()
        );
    }

    if !health.is_ok() {
        bail!("Backend reported status '{}'", health.status);
    }
    Ok(())
}
