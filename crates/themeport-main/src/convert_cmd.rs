use std::path::PathBuf;

use clap::Args;
use themeport_core::{convert_entry, load_manifest, manifest_dir, ConvertOptions, ThemeEntry};

use crate::config::{AppConfig, DEFAULT_OUTPUT_DIR_NAME};

const UNNAMED_THEME_LABEL: &str = "<unnamed>";

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Extension manifest listing the themes (default: package.json).
    #[arg(long)]
    pub manifest: Option<PathBuf>,
    /// Directory generated themes are written to (default: themes/ next to the manifest).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Spaces per indentation level in generated files.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=16))]
    pub indent: Option<u8>,
}

impl ConvertArgs {
    /// Fills options missing here from `outer`.
    pub fn or(self, outer: ConvertArgs) -> Self {
        Self {
            manifest: self.manifest.or(outer.manifest),
            out_dir: self.out_dir.or(outer.out_dir),
            indent: self.indent.or(outer.indent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.manifest.is_none() && self.out_dir.is_none() && self.indent.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub total: usize,
    pub converted: usize,
}

/// Converts every theme in the manifest. Per-theme failures are reported
/// and skipped; only a missing or unreadable manifest fails the run.
pub fn run_convert(args: &ConvertArgs, config: &AppConfig) -> Result<ConvertSummary, String> {
    let manifest_path = args
        .manifest
        .clone()
        .unwrap_or_else(|| config.convert.manifest.clone());
    let manifest = load_manifest(&manifest_path).map_err(|error| error.to_string())?;
    let base_dir = manifest_dir(&manifest_path);

    let output_dir = args
        .out_dir
        .clone()
        .or_else(|| config.convert.output_dir.clone())
        .unwrap_or_else(|| base_dir.join(DEFAULT_OUTPUT_DIR_NAME));
    let mut options = ConvertOptions::new(output_dir);
    options.indent = args
        .indent
        .map(usize::from)
        .unwrap_or(config.convert.indent);
    options.default_author = config.convert.default_author.clone();
    let author = options.author_for(&manifest).to_string();

    let themes = &manifest.contributes.themes;
    tracing::info!(
        manifest = %manifest_path.display(),
        themes = themes.len(),
        output_dir = %options.output_dir.display(),
        "converting themes"
    );

    let mut summary = ConvertSummary {
        total: themes.len(),
        converted: 0,
    };
    for raw in themes {
        let label = ThemeEntry::raw_label(raw).unwrap_or(UNNAMED_THEME_LABEL);
        println!("Processing {label}...");
        let converted = ThemeEntry::from_value(raw, &manifest_path)
            .and_then(|entry| convert_entry(&entry, &base_dir, &author, &options));
        match converted {
            Ok(path) => {
                summary.converted += 1;
                tracing::info!(label, path = %path.display(), "theme converted");
                println!("  -> Generated {}", path.display());
            }
            Err(error) => {
                tracing::warn!(label, %error, "theme conversion failed");
                println!("  -> Error converting {label}: {error}");
            }
        }
    }

    println!(
        "converted {} of {} themes",
        summary.converted, summary.total
    );
    Ok(summary)
}
