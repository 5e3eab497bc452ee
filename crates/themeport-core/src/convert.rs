//! File-system adapter around [`assemble`]: read a source theme, convert
//! it, write the result.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assemble::{assemble, output_file_name, DEFAULT_AUTHOR};
use crate::error::{Result, ThemeError};
use crate::json_file::{load_document, write_json, DEFAULT_INDENT};
use crate::manifest::{Manifest, ThemeEntry};
use crate::source::SourceTheme;
use crate::tables::ThemeMappings;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub output_dir: PathBuf,
    pub indent: usize,
    pub default_author: String,
    pub mappings: ThemeMappings,
}

impl ConvertOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            indent: DEFAULT_INDENT,
            default_author: DEFAULT_AUTHOR.to_string(),
            mappings: ThemeMappings::builtin(),
        }
    }

    /// Manifest publisher, or the configured default author.
    pub fn author_for<'a>(&'a self, manifest: &'a Manifest) -> &'a str {
        manifest
            .publisher
            .as_deref()
            .unwrap_or(self.default_author.as_str())
    }
}

/// Converts one manifest entry and returns the written output path.
///
/// `base_dir` is the directory the entry's `path` is relative to.
pub fn convert_entry(
    entry: &ThemeEntry,
    base_dir: &Path,
    author: &str,
    options: &ConvertOptions,
) -> Result<PathBuf> {
    let label = entry
        .label
        .as_deref()
        .ok_or_else(|| ThemeError::structure(base_dir, "theme entry has no label"))?;
    let relative = entry.path.as_deref().ok_or_else(|| {
        ThemeError::structure(base_dir, format!("theme entry {label:?} has no path"))
    })?;
    let source_path = base_dir.join(relative);

    let source: SourceTheme = load_document(&source_path)?;
    tracing::debug!(
        label,
        path = %source_path.display(),
        colors = source.colors.len(),
        rules = source.token_colors.len(),
        "loaded source theme"
    );

    let family = assemble(&source, label, entry.appearance(), author, &options.mappings);

    fs::create_dir_all(&options.output_dir).map_err(|source| ThemeError::Write {
        path: options.output_dir.clone(),
        source,
    })?;
    let output_path = options.output_dir.join(output_file_name(label));
    write_json(&output_path, &family, options.indent)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::json_file::load_json;

    fn entry(label: Option<&str>, path: Option<&str>, ui_theme: &str) -> ThemeEntry {
        ThemeEntry {
            label: label.map(str::to_string),
            path: path.map(str::to_string),
            ui_theme: Some(ui_theme.to_string()),
        }
    }

    #[test]
    fn converts_entry_into_output_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(
            dir.path().join("t.json"),
            r##"{
                // exported from the editor
                "colors": {"editor.background": "#fafafa",},
                "tokenColors": [{"scope": "keyword", "settings": {"foreground": "#0000ff"}}]
            }"##,
        )
        .expect("write source theme");
        let options = ConvertOptions::new(dir.path().join("themes"));

        let output = convert_entry(
            &entry(Some("Paper Light"), Some("t.json"), "vs-light"),
            dir.path(),
            "acme",
            &options,
        )
        .expect("conversion should succeed");

        assert_eq!(output, dir.path().join("themes").join("Paper_Light.json"));
        let written: Value = load_json(&output).expect("output should be valid json");
        assert_eq!(written["themes"][0]["appearance"], "light");
        assert_eq!(written["themes"][0]["style"]["background"], "#fafafa");
        assert_eq!(
            written["themes"][0]["style"]["syntax"]["keyword"]["color"],
            "#0000ff"
        );
    }

    #[test]
    fn missing_source_file_is_an_error_and_writes_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let options = ConvertOptions::new(dir.path().join("themes"));

        let error = convert_entry(
            &entry(Some("Ghost"), Some("missing.json"), "vs-dark"),
            dir.path(),
            DEFAULT_AUTHOR,
            &options,
        )
        .expect_err("missing file should fail");

        assert!(matches!(error, ThemeError::Read { .. }));
        assert!(!dir.path().join("themes").join("Ghost.json").exists());
    }

    #[test]
    fn entry_without_path_is_a_structure_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let options = ConvertOptions::new(dir.path().join("themes"));
        let error = convert_entry(
            &entry(Some("No Path"), None, "vs-dark"),
            dir.path(),
            DEFAULT_AUTHOR,
            &options,
        )
        .expect_err("entry without path should fail");
        assert!(matches!(error, ThemeError::Structure { .. }));
    }

    #[test]
    fn author_prefers_manifest_publisher() {
        let options = ConvertOptions::new("themes");
        let mut manifest = Manifest::default();
        assert_eq!(options.author_for(&manifest), DEFAULT_AUTHOR);
        manifest.publisher = Some("acme".to_string());
        assert_eq!(options.author_for(&manifest), "acme");
    }

    #[test]
    fn honors_four_space_indent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("t.json"), "{}").expect("write source theme");
        let mut options = ConvertOptions::new(dir.path());
        options.indent = 4;

        let output = convert_entry(
            &entry(Some("Wide"), Some("t.json"), "vs-dark"),
            dir.path(),
            DEFAULT_AUTHOR,
            &options,
        )
        .expect("conversion should succeed");
        let content = fs::read_to_string(output).expect("read output");
        assert!(content.starts_with("{\n    \"$schema\""));
    }
}
