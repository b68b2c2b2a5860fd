//! WSL CLI abstraction — enables test doubles for all `wsl.exe` commands.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};

/// Abstraction over the `wsl` command-line tool, enabling test doubles.
///
/// The production implementation delegates to the `wsl` binary via
/// [`tokio::process::Command`].
#[allow(async_fn_in_trait)]
pub trait Wsl {
    /// Run `wsl --list` and capture its raw output.
    ///
    /// The bytes are returned undecoded: `wsl.exe` writes UTF-16LE on stock
    /// Windows consoles and other encodings elsewhere, and decoding is the
    /// registry parser's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    async fn list(&self) -> Result<Output>;

    /// Spawn `wsl -d <distro> bash -ic <script>` with piped stdout/stderr.
    ///
    /// Stdin is inherited so interactive programs keep working; stdout and
    /// stderr are piped so the caller can relay them line by line.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_command(&self, distro: &str, command: &str) -> Result<tokio::process::Child>;
}

/// Production implementation — shells out to the `wsl` binary.
pub struct WslCli;

impl Wsl for WslCli {
    async fn list(&self) -> Result<Output> {
        // `--list` rather than `--list --quiet`: the verbose form is what the
        // parser's header/marker handling is written against, and it is
        // available on every WSL release.
        tokio::process::Command::new("wsl")
            .arg("--list")
            .output()
            .await
            .context("failed to run wsl --list")
    }

    fn spawn_command(&self, distro: &str, command: &str) -> Result<tokio::process::Child> {
        // NODE_NO_WARNINGS silences the deprecation chatter of Node-based
        // tools, the most common payload this wrapper is pointed at.
        let script = format!("export NODE_NO_WARNINGS=1; {command}");
        tokio::process::Command::new("wsl")
            .args(["-d", distro, "bash", "-ic", script.as_str()])
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to spawn wsl")
    }
}
