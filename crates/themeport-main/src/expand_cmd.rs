use std::path::PathBuf;

use clap::Args;
use themeport_core::{reconcile_files, ReconcilePaths, ThemeMappings};

use crate::config::AppConfig;

#[derive(Args, Debug, Clone, Default)]
pub struct ExpandArgs {
    /// Fully populated destination theme to copy the key set from.
    #[arg(long)]
    pub reference: Option<PathBuf>,
    /// Previously generated theme to fill in.
    #[arg(long)]
    pub target: Option<PathBuf>,
    /// Source theme the target was generated from.
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// Write the result here instead of rewriting the target.
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=16))]
    pub indent: Option<u8>,
}

pub fn run_expand(args: &ExpandArgs, config: &AppConfig) -> Result<(), String> {
    let reference = required(
        args.reference.as_ref(),
        config.expand.reference.as_ref(),
        "reference",
    )?;
    let target = required(args.target.as_ref(), config.expand.target.as_ref(), "target")?;
    let source = required(args.source.as_ref(), config.expand.source.as_ref(), "source")?;
    let indent = args
        .indent
        .map(usize::from)
        .unwrap_or(config.convert.indent);

    println!("Expanding {}...", target.display());
    let report = reconcile_files(
        ReconcilePaths {
            reference: &reference,
            target: &target,
            source: &source,
            output: args.out.as_deref(),
        },
        indent,
        &ThemeMappings::builtin(),
    )
    .map_err(|error| error.to_string())?;

    for (key, resolution) in &report.added {
        println!("  Added missing key: {key} ({resolution:?})");
    }
    for key in &report.added_syntax {
        println!("  Added missing syntax: {key}");
    }
    for key in &report.unresolved {
        println!("  Left unset: {key}");
    }

    let written = args.out.as_deref().unwrap_or(target.as_path());
    tracing::info!(
        path = %written.display(),
        added = report.added.len(),
        added_syntax = report.added_syntax.len(),
        unresolved = report.unresolved.len(),
        "theme expanded"
    );
    println!("  -> Wrote {}", written.display());
    Ok(())
}

fn required(
    flag: Option<&PathBuf>,
    configured: Option<&PathBuf>,
    name: &str,
) -> Result<PathBuf, String> {
    flag.or(configured)
        .cloned()
        .ok_or_else(|| format!("expand needs --{name} (or [expand].{name} in themeport.toml)"))
}
