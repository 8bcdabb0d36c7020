//! Settings file persistence
//!
//! Whitelist patterns live in the `permissions.allow` array of the caller's
//! settings document. The store resolves which file to use (project-scoped
//! wins over user-global), appends patterns with set semantics, and leaves
//! every other field of the document untouched.
//!
//! There is no locking: the gate runs one invocation per process and the
//! caller serializes hook runs, so last-writer-wins on the residual race.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::core::error::GateError;
use crate::core::GateResult;

use super::pattern::PermissionPattern;

/// Settings file location, relative to the project root or home directory
const SETTINGS_RELATIVE_PATH: &str = ".claude/settings.local.json";

/// Manager for the permission settings document
#[derive(Debug, Clone)]
pub struct SettingsStore {
    project_root: PathBuf,
    home_dir: Option<PathBuf>,
}

impl SettingsStore {
    /// Create a store rooted at the current working directory
    pub fn new() -> GateResult<Self> {
        Ok(Self {
            project_root: std::env::current_dir()?,
            home_dir: dirs::home_dir(),
        })
    }

    /// Create a store with explicit roots
    pub fn with_roots(project_root: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            home_dir,
        }
    }

    /// The project-scoped settings file path
    pub fn project_settings_path(&self) -> PathBuf {
        self.project_root.join(SETTINGS_RELATIVE_PATH)
    }

    /// The user-global settings file path
    pub fn global_settings_path(&self) -> GateResult<PathBuf> {
        let home = self.home_dir.clone().ok_or(GateError::HomeDirNotFound)?;
        Ok(home.join(SETTINGS_RELATIVE_PATH))
    }

    /// Resolve the settings file to use: project-scoped if it exists, else global
    pub fn settings_path(&self) -> GateResult<PathBuf> {
        let project = self.project_settings_path();
        if project.exists() {
            return Ok(project);
        }
        self.global_settings_path()
    }

    /// Append a pattern to `permissions.allow` if not already present
    ///
    /// Returns whether the pattern was newly inserted. Creates the settings
    /// file and its parent directories when missing. A file that is not
    /// valid JSON (or not a JSON object) is replaced with a fresh document.
    pub fn append_pattern(&self, pattern: &PermissionPattern) -> GateResult<bool> {
        let path = self.settings_path()?;
        let mut settings = self.read_settings(&path);

        let mut permissions = match settings.remove("permissions") {
            Some(Value::Object(map)) => map,
            Some(_) => {
                tracing::warn!("Settings 'permissions' is not an object, resetting");
                Map::new()
            }
            None => Map::new(),
        };

        let mut allow = match permissions.remove("allow") {
            Some(Value::Array(list)) => list,
            Some(_) => {
                tracing::warn!("Settings 'permissions.allow' is not an array, resetting");
                Vec::new()
            }
            None => Vec::new(),
        };

        if allow.iter().any(|v| v.as_str() == Some(pattern.as_str())) {
            return Ok(false);
        }
        allow.push(Value::String(pattern.as_str().to_string()));

        permissions.insert("allow".to_string(), Value::Array(allow));
        settings.insert("permissions".to_string(), Value::Object(permissions));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &Value::Object(settings))?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(true)
    }

    /// Load the current `permissions.allow` patterns
    pub fn allow_patterns(&self) -> GateResult<Vec<String>> {
        let path = self.settings_path()?;
        let settings = self.read_settings(&path);

        let patterns = settings
            .get("permissions")
            .and_then(|p| p.get("allow"))
            .and_then(|a| a.as_array())
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(patterns)
    }

    /// Read the settings document, treating missing or malformed files as empty
    fn read_settings(&self, path: &Path) -> Map<String, Value> {
        if !path.exists() {
            return Map::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read settings file {}: {}", path.display(), e);
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::warn!("Settings file {} is not a JSON object", path.display());
                Map::new()
            }
            Err(e) => {
                tracing::warn!("Settings file {} is malformed: {}", path.display(), e);
                Map::new()
            }
        }
    }
}
