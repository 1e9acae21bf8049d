use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Element counts of a rendered diagram.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub elements: usize,
    pub rotatable_lines: usize,
}

/// Sidecar written next to every rendered artifact.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    version: &'static str,
    code_rev: String,
    callsite: String,
    command: &'a str,
    params: &'a Value,
    stats: &'a [Stats],
    outputs: Vec<String>,
}

/// Write `<artifact stem>.manifest.json` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(
    artifact: P,
    command: &str,
    params: &Value,
    stats: &[Stats],
) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let manifest = Manifest {
        version: geodiag::VERSION,
        code_rev: current_git_rev(),
        callsite: format!("{}:{}", callsite.file(), callsite.line()),
        command,
        params,
        stats,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    let path = manifest_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&manifest)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn manifest_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_owned());
    artifact.with_file_name(format!("{stem}.manifest.json"))
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}
