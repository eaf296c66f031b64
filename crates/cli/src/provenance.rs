use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the command, its parameters, and free-form tags.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tags.extend(tag);
        self
    }
}

/// Provenance block shared by sidecars and `report`.
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "geo2d_version": geo2d::VERSION,
        "command": payload.command,
        "tags": payload.tags,
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

pub fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let base = Path::new("/tmp/output/noise.parquet");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/noise.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("shake")),
            Path::new("shake.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_outputs_and_tags() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("grid.csv");
        fs::write(&artifact, "x,y,value\n").unwrap();
        let payload =
            Payload::new("noise", json!({"octaves": 4})).with_tag(Some("smoke".to_string()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "noise");
        assert_eq!(parsed["params"]["octaves"], 4);
        assert_eq!(parsed["tags"][0], "smoke");
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }

    #[test]
    fn document_without_outputs() {
        let doc = document(&Payload::new("report", json!({})), &[]);
        assert_eq!(doc["outputs"].as_array().map(Vec::len), Some(0));
        assert_eq!(doc["geo2d_version"], geo2d::VERSION);
        assert!(doc["code_rev"].is_string());
    }
}
