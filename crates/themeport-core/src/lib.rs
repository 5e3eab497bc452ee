//! Conversion of editor color themes between two JSON theme schemas.
//!
//! Source themes carry a flat `colors` map and TextMate-scoped
//! `tokenColors` rules; destination themes are theme families with flat
//! style keys, a `syntax` table, `players` and `accents`. All mapping is
//! driven by the compiled-in tables in [`tables`].

pub mod assemble;
pub mod colors;
pub mod convert;
pub mod error;
pub mod json_file;
pub mod manifest;
pub mod reconcile;
pub mod source;
pub mod syntax;
pub mod tables;

pub use assemble::{
    assemble, output_file_name, Player, ThemeContent, ThemeFamily, ThemeStyle, DEFAULT_AUTHOR,
    THEME_SCHEMA_URL,
};
pub use colors::{ansi_source_key, map_ansi_colors, map_ui_colors};
pub use convert::{convert_entry, ConvertOptions};
pub use error::{Result, ThemeError};
pub use json_file::{load_document, load_json, parse_lenient, write_json, DEFAULT_INDENT};
pub use manifest::{load_manifest, manifest_dir, Appearance, Manifest, ThemeEntry};
pub use reconcile::{
    reconcile, reconcile_files, MissingStyle, ReconcilePaths, ReconcileReport, Resolution,
};
pub use source::{
    ColorMap, ScopeSelector, SourceColors, SourceTheme, TokenSettings, TokenStyleRule,
};
pub use syntax::{best_scope_match, map_scopes, FontStyle, SyntaxStyle, BOLD_FONT_WEIGHT};
pub use tables::ThemeMappings;
