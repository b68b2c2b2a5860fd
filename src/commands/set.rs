//! `wwset set` — resolve a distribution name and persist it as the default.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::ConfigStore;
use crate::distro;
use crate::error::DistroError;
use crate::output::OutputContext;
use crate::wsl::Wsl;

/// Run `wwset set <distro>`.
///
/// The name is matched case-insensitively against a fresh registry read and
/// stored in the registry's canonical casing, so later display is consistent
/// regardless of how the user typed it.
///
/// # Errors
///
/// Returns an error if no distributions are detected, the name does not
/// resolve, or the config cannot be written. The config is never mutated on
/// a failed resolution.
pub async fn run(
    ctx: &OutputContext,
    wsl: &impl Wsl,
    store: &ConfigStore,
    requested: &str,
) -> Result<ExitCode> {
    let registry = distro::list_distros(wsl, ctx).await;
    if registry.is_empty() {
        return Err(DistroError::NoneDetected.into());
    }

    ctx.header("Installed distributions:");
    for name in &registry {
        ctx.item(name);
    }

    let Some(canonical) = distro::resolve(requested, &registry) else {
        return Err(DistroError::NotFound {
            requested: requested.to_string(),
            listing: listing(&registry),
        }
        .into());
    };

    let mut config = store.load();
    config.default_distro = Some(canonical.to_string());
    store.save(&config).context("could not save config")?;

    ctx.success(&format!("Default distribution set to {canonical}"));
    Ok(ExitCode::SUCCESS)
}

fn listing(registry: &[String]) -> String {
    registry
        .iter()
        .map(|name| format!("  - {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}
