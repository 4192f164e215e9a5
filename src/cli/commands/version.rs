//! Version command implementation.

use std::fmt::Write as _;
use std::io::Write;

use serde::Serialize;

use crate::cli::VersionArgs;
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<&'a str>,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization or output fails.
pub fn execute<W: Write>(args: &VersionArgs, out: &mut W) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if args.short {
        writeln!(out, "{version}")?;
        return Ok(());
    }

    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };
    let commit = option_env!("ASTRO_GIT_SHA").filter(|s| !s.trim().is_empty());

    if args.json {
        let output = VersionOutput {
            version,
            build,
            commit,
        };
        serde_json::to_writer(&mut *out, &output).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut line = format!("astro version {version} ({build})");
    if let Some(commit) = commit {
        let _ = write!(line, " ({})", short_commit(commit));
    }
    writeln!(out, "{line}")?;
    Ok(())
}

/// First seven characters of a commit id, or all of it if shorter.
fn short_commit(commit: &str) -> &str {
    commit
        .char_indices()
        .nth(7)
        .map_or(commit, |(end, _)| &commit[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit("abc"), "abc");
        assert_eq!(
            short_commit("ab\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}xyz"),
            "ab\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"
        );
    }

    #[test]
    fn test_short_prints_bare_version() {
        let mut out = Vec::new();
        let args = VersionArgs {
            short: true,
            ..Default::default()
        };
        execute(&args, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap().trim(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let args = VersionArgs {
            json: true,
            ..Default::default()
        };
        execute(&args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }
}
