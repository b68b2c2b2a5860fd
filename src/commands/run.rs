//! Bare run form — `wwset <distro> <cmd...>` / `wwset <cmd...>`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::ConfigStore;
use crate::distro;
use crate::error::DistroError;
use crate::output::OutputContext;
use crate::wsl::Wsl;

/// A resolved run: which distribution, what command line.
#[derive(Debug, PartialEq, Eq)]
pub struct RunPlan {
    pub distro: String,
    pub command: String,
}

/// Decide where a command runs.
///
/// The first token names a distribution iff it resolves against the
/// registry; otherwise the whole argument list is the command and the
/// stored default supplies the distribution. A missing registry entry is
/// not an error here — an unrecognized first token is simply part of the
/// command.
pub fn plan(
    args: &[String],
    registry: &[String],
    default_distro: Option<&str>,
) -> Result<RunPlan, DistroError> {
    let Some((first, rest)) = args.split_first() else {
        return Err(DistroError::MissingCommand);
    };
    if let Some(canonical) = distro::resolve(first, registry) {
        if rest.is_empty() {
            return Err(DistroError::MissingCommand);
        }
        return Ok(RunPlan {
            distro: canonical.to_string(),
            command: rest.join(" "),
        });
    }
    let Some(default) = default_distro else {
        return Err(DistroError::NoDefault);
    };
    Ok(RunPlan {
        distro: default.to_string(),
        command: args.join(" "),
    })
}

/// Lines dropped from the relayed streams: `bash -ic` job-control noise and
/// Node deprecation chatter.
const NOISE_MARKERS: [&str; 4] = [
    "DeprecationWarning",
    "trace-deprecation",
    "cannot set terminal process group",
    "no job control in this shell",
];

fn is_noise(line: &str) -> bool {
    NOISE_MARKERS.iter().any(|m| line.contains(m))
}

/// Run a command inside a distribution, relaying its output.
///
/// # Errors
///
/// Returns an error if no distribution can be determined or the command
/// cannot be spawned. The child's own exit code is propagated, not treated
/// as an error.
pub async fn run(
    ctx: &OutputContext,
    wsl: &impl Wsl,
    store: &ConfigStore,
    args: &[String],
) -> Result<ExitCode> {
    let registry = distro::list_distros(wsl, ctx).await;
    let config = store.load();
    let plan = plan(args, &registry, config.default_distro.as_deref())?;
    execute(wsl, &plan).await
}

async fn execute(wsl: &impl Wsl, plan: &RunPlan) -> Result<ExitCode> {
    let mut child = wsl
        .spawn_command(&plan.distro, &plan.command)
        .with_context(|| format!("failed to launch command in '{}'", plan.distro))?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let out_task = tokio::spawn(async move {
        if let Some(stdout) = stdout {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if !is_noise(&line) {
                    println!("{line}");
                }
            }
        }
    });
    let err_task = tokio::spawn(async move {
        if let Some(stderr) = stderr {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if !is_noise(&line) {
                    eprintln!("{line}");
                }
            }
        }
    });

    let status = child.wait().await.context("waiting for wsl")?;
    let _ = out_task.await;
    let _ = err_task.await;

    let code = status.code().unwrap_or(1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(ExitCode::from(code as u8))
}
