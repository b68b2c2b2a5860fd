//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::ConfigStore;
use crate::output::OutputContext;
use crate::wsl::WslCli;

/// Run commands in WSL distributions without leaving the host shell
#[derive(Parser)]
#[command(
    name = "wwset",
    version,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format (list, version)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Persist a distribution as the default (name matched case-insensitively)
    Set {
        /// Distribution name
        distro: String,
    },

    /// List installed distributions
    List,

    /// Show version
    Version,

    // `wwset <distro> <cmd...>` runs in a named distribution;
    // `wwset <cmd...>` runs in the stored default.
    #[command(external_subcommand)]
    Run(Vec<String>),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails; the caller prints it and maps
    /// it to exit code 1.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(ExitCode::SUCCESS)
            }
            Command::Set { distro } => {
                let store = ConfigStore::new()?;
                commands::set::run(&ctx, &WslCli, &store, &distro).await
            }
            Command::List => {
                let store = ConfigStore::new()?;
                commands::list::run(&ctx, &WslCli, &store, json).await
            }
            Command::Run(args) => {
                let store = ConfigStore::new()?;
                commands::run::run(&ctx, &WslCli, &store, &args).await
            }
        }
    }
}
