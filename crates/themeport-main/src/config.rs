use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use themeport_core::{DEFAULT_AUTHOR, DEFAULT_INDENT};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "themeport.toml";
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "package.json";
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "themes";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub convert: ConvertConfig,
    pub expand: ExpandConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub manifest: PathBuf,
    /// `None` means `themes/` next to the manifest.
    pub output_dir: Option<PathBuf>,
    pub indent: usize,
    pub default_author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandConfig {
    pub reference: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ThemeportTomlFile {
    #[serde(default)]
    convert: ThemeportTomlConvert,
    #[serde(default)]
    expand: ThemeportTomlExpand,
    #[serde(default)]
    log: ThemeportTomlLog,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ThemeportTomlConvert {
    #[serde(default)]
    manifest: Option<String>,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    indent: Option<usize>,
    #[serde(default)]
    default_author: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ThemeportTomlExpand {
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ThemeportTomlLog {
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_toml(ThemeportTomlFile::default(), Path::new(""))
    }
}

impl AppConfig {
    fn from_toml(file: ThemeportTomlFile, base_dir: &Path) -> Self {
        let ThemeportTomlFile {
            convert,
            expand,
            log,
        } = file;

        Self {
            convert: ConvertConfig {
                manifest: resolve_path(
                    base_dir,
                    convert.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST_FILE_NAME),
                ),
                output_dir: convert
                    .output_dir
                    .as_deref()
                    .map(|value| resolve_path(base_dir, value)),
                indent: convert.indent.unwrap_or(DEFAULT_INDENT),
                default_author: non_empty(convert.default_author)
                    .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            },
            expand: ExpandConfig {
                reference: expand
                    .reference
                    .as_deref()
                    .map(|value| resolve_path(base_dir, value)),
                target: expand
                    .target
                    .as_deref()
                    .map(|value| resolve_path(base_dir, value)),
                source: expand
                    .source
                    .as_deref()
                    .map(|value| resolve_path(base_dir, value)),
            },
            log: LogConfig {
                level: non_empty(log.level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
                dir: log.path.as_deref().map(|value| resolve_path(base_dir, value)),
            },
        }
    }
}

/// Loads `explicit`, or `themeport.toml` in the working directory when it
/// exists. An explicitly named file must exist.
pub fn load_app_config(explicit: Option<&Path>) -> Result<AppConfig, String> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(format!("config file {} not found", path.display()));
            }
            path.to_path_buf()
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE_NAME);
            if !default_path.is_file() {
                return Ok(AppConfig::default());
            }
            default_path
        }
    };

    let content = fs::read_to_string(&path)
        .map_err(|error| format!("read {} failed: {error}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_app_config(&content, base_dir)
        .map_err(|error| format!("parse {} failed: {error}", path.display()))
}

/// Parses config text; relative paths resolve against `base_dir`.
pub fn parse_app_config(content: &str, base_dir: &Path) -> Result<AppConfig, String> {
    let parsed: ThemeportTomlFile = toml::from_str(content).map_err(|error| error.to_string())?;
    if let Some(indent) = parsed.convert.indent {
        if indent > MAX_INDENT {
            return Err(format!(
                "convert.indent must be at most {MAX_INDENT}, got {indent}"
            ));
        }
    }
    Ok(AppConfig::from_toml(parsed, base_dir))
}

fn resolve_path(base_dir: &Path, value: &str) -> PathBuf {
    let path = expand_home_path(value.trim());
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        return home_dir();
    }
    if let Some(suffix) = path.strip_prefix("~/") {
        return home_dir().join(suffix);
    }
    PathBuf::from(path)
}

fn home_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home);
    }
    if let Some(profile) = std::env::var_os("USERPROFILE") {
        return PathBuf::from(profile);
    }
    PathBuf::from(".")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let config = AppConfig::default();
        assert_eq!(config.convert.manifest, PathBuf::from("package.json"));
        assert_eq!(config.convert.output_dir, None);
        assert_eq!(config.convert.indent, 2);
        assert_eq!(config.convert.default_author, "Unknown");
        assert_eq!(config.expand, ExpandConfig::default());
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.dir, None);
    }

    #[test]
    fn relative_paths_resolve_against_config_directory() {
        let content = r#"
[convert]
manifest = "ext/package.json"
output_dir = "/abs/out"
indent = 4
default_author = "  Someone  "

[expand]
reference = "dracula.example.json"
target = "themes/Blank_Moonlight.json"
source = "vscode-themes/Blank-Moonlight.json"

[log]
level = "debug"
path = "logs"
"#;
        let config = parse_app_config(content, Path::new("/work")).expect("config should parse");
        assert_eq!(config.convert.manifest, PathBuf::from("/work/ext/package.json"));
        assert_eq!(config.convert.output_dir, Some(PathBuf::from("/abs/out")));
        assert_eq!(config.convert.indent, 4);
        assert_eq!(config.convert.default_author, "Someone");
        assert_eq!(
            config.expand.reference,
            Some(PathBuf::from("/work/dracula.example.json"))
        );
        assert_eq!(
            config.expand.target,
            Some(PathBuf::from("/work/themes/Blank_Moonlight.json"))
        );
        assert_eq!(
            config.expand.source,
            Some(PathBuf::from("/work/vscode-themes/Blank-Moonlight.json"))
        );
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.dir, Some(PathBuf::from("/work/logs")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = parse_app_config("[convert]\noutput = \"x\"\n", Path::new("."))
            .expect_err("unknown key should fail");
        assert!(error.contains("output"), "unexpected error: {error}");
    }

    #[test]
    fn oversized_indent_is_rejected() {
        let error = parse_app_config("[convert]\nindent = 64\n", Path::new("."))
            .expect_err("indent should be capped");
        assert!(error.contains("convert.indent"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let error = load_app_config(Some(&dir.path().join("themeport.toml")))
            .expect_err("missing explicit config");
        assert!(error.contains("not found"));
    }

    #[test]
    fn explicit_config_is_loaded_from_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("themeport.toml");
        fs::write(&path, "[convert]\noutput_dir = \"out\"\n").expect("write config");

        let config = load_app_config(Some(&path)).expect("config should load");
        assert_eq!(config.convert.output_dir, Some(dir.path().join("out")));
        assert_eq!(config.convert.manifest, dir.path().join("package.json"));
    }
}
