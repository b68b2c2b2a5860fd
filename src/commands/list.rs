//! `wwset list` — print the installed distributions.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::ConfigStore;
use crate::distro;
use crate::error::DistroError;
use crate::output::OutputContext;
use crate::wsl::Wsl;

/// Run `wwset list`.
///
/// # Errors
///
/// Returns an error if no distributions are detected.
pub async fn run(
    ctx: &OutputContext,
    wsl: &impl Wsl,
    store: &ConfigStore,
    json: bool,
) -> Result<ExitCode> {
    let registry = distro::list_distros(wsl, ctx).await;
    if registry.is_empty() {
        return Err(DistroError::NoneDetected.into());
    }

    if json {
        println!(
            "{}",
            serde_json::to_string(&registry).context("serializing distribution list")?
        );
        return Ok(ExitCode::SUCCESS);
    }

    let default = store.load().default_distro;
    ctx.header("Installed distributions:");
    for name in &registry {
        if default.as_deref() == Some(name.as_str()) {
            ctx.item(&format!("{name} (default)"));
        } else {
            ctx.item(name);
        }
    }
    Ok(ExitCode::SUCCESS)
}
