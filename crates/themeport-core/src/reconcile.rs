//! Back-fills a generated theme with keys a fuller reference theme defines.
//!
//! Each style key present in the reference but missing from the target is
//! resolved in order: expanded table lookup in the source colors, a literal
//! table value, the terminal palette naming convention, then a guess based
//! on the key name. Keys nothing resolves are reported and left unset.

use std::fmt;
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::colors::ansi_source_key;
use crate::error::{Result, ThemeError};
use crate::json_file::{load_document, load_json, write_json};
use crate::source::{ColorMap, SourceColors};
use crate::tables::{MappedValue, ThemeMappings};

const SKIPPED_STYLE_KEYS: [&str; 3] = ["syntax", "players", "accents"];
const SYNTAX_KEY: &str = "syntax";

const FOCUS_BORDER_KEY: &str = "focusBorder";
const EDITOR_BACKGROUND_KEY: &str = "editor.background";
const EDITOR_FOREGROUND_KEY: &str = "editor.foreground";
pub const FALLBACK_BORDER: &str = "#00000000";
pub const FALLBACK_BACKGROUND: &str = "#000000";
pub const FALLBACK_FOREGROUND: &str = "#888888";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Mapped,
    Literal,
    Terminal,
    Heuristic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<(String, Resolution)>,
    pub unresolved: Vec<String>,
    pub added_syntax: Vec<String>,
}

impl ReconcileReport {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.added_syntax.is_empty()
    }
}

/// Which input lacked a `themes[0].style` object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingStyle {
    Reference,
    Target,
}

impl fmt::Display for MissingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = match self {
            Self::Reference => "reference",
            Self::Target => "target",
        };
        write!(f, "{document} theme has no themes[0].style object")
    }
}

impl std::error::Error for MissingStyle {}

/// Fills `target` in place from `reference` and the source color map.
pub fn reconcile(
    reference: &Value,
    target: &mut Value,
    source_colors: &ColorMap,
    mappings: &ThemeMappings,
) -> std::result::Result<ReconcileReport, MissingStyle> {
    let reference_style = style(reference).ok_or(MissingStyle::Reference)?;
    let target_style = style_mut(target).ok_or(MissingStyle::Target)?;
    let mut report = ReconcileReport::default();

    for key in reference_style.keys() {
        if SKIPPED_STYLE_KEYS.contains(&key.as_str()) || target_style.contains_key(key) {
            continue;
        }
        match resolve_style_key(key, source_colors, mappings) {
            Some((value, resolution)) => {
                tracing::debug!(key = %key, ?resolution, "adding missing style key");
                target_style.insert(key.clone(), value);
                report.added.push((key.clone(), resolution));
            }
            None => {
                tracing::warn!(key = %key, "no source color for missing style key");
                report.unresolved.push(key.clone());
            }
        }
    }

    if let Some(reference_syntax) = reference_style.get(SYNTAX_KEY).and_then(Value::as_object) {
        let default_color = source_colors
            .get(EDITOR_FOREGROUND_KEY)
            .cloned()
            .unwrap_or(Value::Null);
        // A non-object `syntax` entry is replaced in place, keeping its position.
        let slot = target_style.entry(SYNTAX_KEY).or_insert(Value::Null);
        let mut target_syntax = match std::mem::take(slot) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for key in reference_syntax.keys() {
            if target_syntax.contains_key(key) {
                continue;
            }
            tracing::debug!(key = %key, "adding missing syntax key");
            target_syntax.insert(
                key.clone(),
                json!({
                    "color": default_color.clone(),
                    "font_style": null,
                    "font_weight": null,
                }),
            );
            report.added_syntax.push(key.clone());
        }
        *slot = Value::Object(target_syntax);
    }

    Ok(report)
}

/// Resolves the value for one missing destination style key.
pub fn resolve_style_key(
    key: &str,
    source_colors: &ColorMap,
    mappings: &ThemeMappings,
) -> Option<(Value, Resolution)> {
    match mappings.expanded(key) {
        Some(MappedValue::Source(source_key)) => {
            if let Some(value) = source_colors.get(source_key) {
                return Some((value.clone(), Resolution::Mapped));
            }
        }
        Some(MappedValue::Literal(value)) => {
            return Some((Value::String(value.to_string()), Resolution::Literal));
        }
        None => {}
    }

    if let Some(value) = ansi_source_key(key).and_then(|source_key| source_colors.get(&source_key))
    {
        return Some((value.clone(), Resolution::Terminal));
    }

    heuristic_color(key, source_colors).map(|value| (value, Resolution::Heuristic))
}

fn heuristic_color(key: &str, source_colors: &ColorMap) -> Option<Value> {
    let (source_key, fallback) = if key.contains("border") {
        (FOCUS_BORDER_KEY, FALLBACK_BORDER)
    } else if key.contains("background") {
        (EDITOR_BACKGROUND_KEY, FALLBACK_BACKGROUND)
    } else if key.contains("foreground") || key.contains("text") {
        (EDITOR_FOREGROUND_KEY, FALLBACK_FOREGROUND)
    } else {
        return None;
    };
    Some(
        source_colors
            .get(source_key)
            .cloned()
            .unwrap_or_else(|| Value::String(fallback.to_string())),
    )
}

fn style(document: &Value) -> Option<&Map<String, Value>> {
    document
        .get("themes")?
        .get(0)?
        .get("style")?
        .as_object()
}

fn style_mut(document: &mut Value) -> Option<&mut Map<String, Value>> {
    document
        .get_mut("themes")?
        .get_mut(0)?
        .get_mut("style")?
        .as_object_mut()
}

/// Input and output locations for [`reconcile_files`].
#[derive(Debug, Clone, Copy)]
pub struct ReconcilePaths<'a> {
    pub reference: &'a Path,
    pub target: &'a Path,
    pub source: &'a Path,
    /// Where to write the result; the target is rewritten when `None`.
    pub output: Option<&'a Path>,
}

/// Loads the three documents, reconciles, and writes the target back.
pub fn reconcile_files(
    paths: ReconcilePaths<'_>,
    indent: usize,
    mappings: &ThemeMappings,
) -> Result<ReconcileReport> {
    let reference = load_json(paths.reference)?;
    let mut target = load_json(paths.target)?;
    let source: SourceColors = load_document(paths.source)?;

    let report = reconcile(&reference, &mut target, &source.colors, mappings).map_err(
        |missing| {
            let path = match missing {
                MissingStyle::Reference => paths.reference,
                MissingStyle::Target => paths.target,
            };
            ThemeError::structure(path, missing.to_string())
        },
    )?;

    let output = paths.output.unwrap_or(paths.target);
    write_json(output, &target, indent)?;
    Ok(report)
}
