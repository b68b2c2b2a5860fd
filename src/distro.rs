//! Distribution registry: parse `wsl --list` output and resolve names.
//!
//! The registry is rebuilt fresh on every query — nothing is cached between
//! invocations — and preserves the order `wsl --list` reported. Duplicates,
//! if the underlying list ever reports them, pass through unchanged.

use encoding_rs::{Encoding, GBK, UTF_16LE, UTF_8};

use crate::output::OutputContext;
use crate::wsl::Wsl;

/// Candidate encodings, tried in order. `wsl.exe` writes UTF-16LE on every
/// stock Windows console; UTF-8 and GBK cover redirected output and legacy
/// Chinese codepages (cp936).
const ENCODINGS: [&Encoding; 3] = [UTF_16LE, UTF_8, GBK];

/// Substrings that mark the banner line of `wsl --list` output. The match is
/// deliberately loose: a header slipping through is a cosmetic defect, while
/// a tighter filter could swallow a real distribution name.
const HEADER_MARKERS: [&str; 2] = ["Windows Subsystem for Linux", "适用于 Linux"];

/// Localized "(default)" markers appended to the default distribution's line.
const DEFAULT_MARKERS: [&str; 3] = ["(默认)", "(Default)", "(default)"];

/// Decode raw command output with the first candidate encoding that accepts
/// it without error. `None` when every candidate rejects the bytes.
pub fn try_decode(raw: &[u8]) -> Option<String> {
    ENCODINGS.iter().find_map(|enc| {
        enc.decode_without_bom_handling_and_without_replacement(raw)
            .map(std::borrow::Cow::into_owned)
    })
}

/// Parse decoded `wsl --list` text into distribution names, in report order.
pub fn parse_names(text: &str) -> Vec<String> {
    text.lines().filter_map(extract_name).collect()
}

fn extract_name(line: &str) -> Option<String> {
    // wsl.exe may emit a UTF-16 BOM when redirected; strip it before trimming.
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() || HEADER_MARKERS.iter().any(|m| line.contains(m)) {
        return None;
    }
    for marker in DEFAULT_MARKERS {
        if let Some(idx) = line.find(marker) {
            let name = line[..idx].trim();
            return (!name.is_empty()).then(|| name.to_string());
        }
    }
    line.split_whitespace().next().map(str::to_string)
}

/// Query the installed distributions.
///
/// A listing failure (spawn error, non-zero exit, undecodable output) yields
/// an empty vector; callers treat that as "no distributions available",
/// never as a valid zero state to act on.
pub async fn list_distros(wsl: &impl Wsl, ctx: &OutputContext) -> Vec<String> {
    let Ok(output) = wsl.list().await else {
        return Vec::new();
    };
    if !output.status.success() {
        return Vec::new();
    }
    match try_decode(&output.stdout) {
        Some(text) => parse_names(&text),
        None => {
            ctx.warn("could not decode wsl --list output with any known encoding");
            Vec::new()
        }
    }
}

/// Resolve `requested` against the registry, case-insensitively.
///
/// Returns the registry's canonical casing — what gets persisted and
/// displayed, regardless of how the user typed the name. If several entries
/// differ only in case, the first in registry order wins.
pub fn resolve<'a>(requested: &str, registry: &'a [String]) -> Option<&'a str> {
    let wanted = requested.to_lowercase();
    registry
        .iter()
        .find(|name| name.to_lowercase() == wanted)
        .map(String::as_str)
}
