//! wwset - run commands in WSL distributions from the host shell

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;

use wwset::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // clap exits 2 on usage errors by default; this tool reserves a single
    // failure code (1) for everything, so parse errors are mapped by hand.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
