use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: subcommand name plus its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Write `<artifact>.provenance.json` with git commit, library version, params and outputs.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = json!({
        "code_rev": current_git_rev(),
        "planar_version": planar::VERSION,
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/name.ext` -> `dir/name.provenance.json`; a path without a file name
/// gets `artifact.provenance.json` inside it.
fn provenance_path(artifact: &Path) -> PathBuf {
    match artifact.file_name() {
        Some(_) => artifact.with_extension("provenance.json"),
        None => artifact.join("artifact.provenance.json"),
    }
}

/// Commit of the running binary: `GIT_COMMIT` at build time, then at run
/// time, then `git describe` of the working directory, else `"unknown"`.
pub fn current_git_rev() -> String {
    let nonempty = |s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_owned);
    option_env!("GIT_COMMIT")
        .and_then(nonempty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().as_deref().and_then(nonempty))
        .or_else(git_describe)
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Full hash, with a `-dirty` suffix when the tree has local changes.
fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=40"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}
