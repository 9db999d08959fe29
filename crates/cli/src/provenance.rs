//! Provenance sidecars: a `<stem>.provenance.json` next to every artifact the
//! CLI writes, recording the command, its parameters, and the build.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Versions of the code that produced an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub code_rev: String,
    pub geomkern_version: String,
    pub cli_version: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            code_rev: code_rev(),
            geomkern_version: geomkern::VERSION.to_string(),
            cli_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidecar {
    pub command: String,
    pub params: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    /// `file:line` of the call that wrote the sidecar.
    pub written_at: String,
    pub build: BuildInfo,
}

impl Sidecar {
    pub fn new(command: &str, params: Value) -> Self {
        Self {
            command: command.to_string(),
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
            written_at: String::new(),
            build: BuildInfo::current(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.display().to_string());
        self
    }

    /// Record `artifact` as the output and write the sidecar beside it.
    #[track_caller]
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let caller = Location::caller();
        self.written_at = format!("{}:{}", caller.file(), caller.line());
        self.outputs.push(artifact.display().to_string());

        let path = artifact.with_extension("provenance.json");
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(sidecar = %path.display(), command = %self.command, "provenance_written");
        Ok(path)
    }
}

/// `GIT_COMMIT` baked in at build time, then from the environment, then
/// `git rev-parse HEAD`; `"unknown"` when none of them answers.
fn code_rev() -> String {
    let from_git = || {
        let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
        out.status
            .success()
            .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
    };
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("GIT_COMMIT").ok())
        .find(|rev| !rev.is_empty())
        .or_else(from_git)
        .unwrap_or_else(|| "unknown".to_string())
}
