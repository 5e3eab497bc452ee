use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ThemeError};
use crate::json_file::load_document;

pub const DEFAULT_UI_THEME: &str = "vs-dark";

/// Extension manifest listing the themes to convert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub contributes: Contributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contributes {
    /// Raw entries; each is read with [`ThemeEntry::from_value`] so a
    /// malformed entry fails on its own.
    #[serde(default)]
    pub themes: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeEntry {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "uiTheme")]
    pub ui_theme: Option<String>,
}

impl ThemeEntry {
    pub fn from_value(value: &Value, manifest_path: &Path) -> Result<Self> {
        Self::deserialize(value).map_err(|error| {
            ThemeError::structure(manifest_path, format!("invalid theme entry: {error}"))
        })
    }

    /// Label of a raw entry, readable even when the entry itself is not.
    pub fn raw_label(value: &Value) -> Option<&str> {
        value.get("label").and_then(Value::as_str)
    }

    pub fn ui_theme(&self) -> &str {
        self.ui_theme.as_deref().unwrap_or(DEFAULT_UI_THEME)
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::from_ui_theme(self.ui_theme())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    /// Any UI mode mentioning "light" (`vs-light`, `hc-light`) is light;
    /// everything else is dark.
    pub fn from_ui_theme(ui_theme: &str) -> Self {
        if ui_theme.contains("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Loads a manifest, distinguishing a missing file from an unreadable one.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    if !path.is_file() {
        return Err(ThemeError::ManifestNotFound(path.to_path_buf()));
    }
    load_document(path)
}

/// Directory theme paths in `manifest_path` are relative to.
pub fn manifest_dir(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
