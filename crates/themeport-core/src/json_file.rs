//! JSON file reading and writing for theme and manifest files.
//!
//! Theme files in the wild are frequently JSONC: `//` line comments and
//! trailing commas are common. Strict parsing is always tried first; the
//! lenient rewrite only runs when it fails.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{ser::PrettyFormatter, Value};

use crate::error::{Result, ThemeError};

// A string literal (with escapes) is matched first so that `//` or `,]`
// inside a quoted value is never rewritten.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"("(?:\\.|[^"\\])*")|//.*"#).expect("valid line comment regex")
});
static TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"("(?:\\.|[^"\\])*")|,(\s*[}\]])"#).expect("valid trailing comma regex")
});

/// Parses `text` as JSON, falling back to comment and trailing comma removal.
pub fn parse_lenient(text: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(strict_error) => {
            let relaxed = strip_trailing_commas(&strip_line_comments(text)).into_owned();
            serde_json::from_str(&relaxed).map_err(|lenient_error| {
                tracing::debug!(%strict_error, %lenient_error, "lenient json parse failed");
                lenient_error
            })
        }
    }
}

pub fn strip_line_comments(text: &str) -> Cow<'_, str> {
    LINE_COMMENT.replace_all(text, |caps: &Captures<'_>| {
        caps.get(1)
            .map(|literal| literal.as_str().to_string())
            .unwrap_or_default()
    })
}

pub fn strip_trailing_commas(text: &str) -> Cow<'_, str> {
    TRAILING_COMMA.replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
        Some(literal) => literal.as_str().to_string(),
        None => caps
            .get(2)
            .map(|closing| closing.as_str().to_string())
            .unwrap_or_default(),
    })
}

/// Reads and leniently parses the JSON file at `path`.
pub fn load_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lenient(&content).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a JSON file and deserializes it into `T`.
///
/// Syntax problems surface as [`ThemeError::Parse`]; documents that parse but
/// do not have the expected shape surface as [`ThemeError::Structure`].
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let value = load_json(path)?;
    serde_json::from_value(value).map_err(|error| ThemeError::structure(path, error.to_string()))
}

pub const DEFAULT_INDENT: usize = 2;

/// Serializes `value` as pretty JSON indented with `indent` spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes `value` to `path` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, indent: usize) -> Result<()> {
    let mut content = to_pretty_json(value, indent).map_err(|error| {
        ThemeError::structure(path, format!("serialize failed: {error}"))
    })?;
    content.push('\n');
    fs::write(path, content).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_json_takes_fast_path_unchanged() {
        let raw = r#"{"name": "a // b", "list": [1, 2, 3], "nested": {"x": null}}"#;
        let lenient = parse_lenient(raw).expect("strict json should parse");
        let strict: Value = serde_json::from_str(raw).expect("strict parse");
        assert_eq!(lenient, strict);
    }

    #[test]
    fn strips_line_comments_outside_strings() {
        let raw = r#"{
            // leading comment
            "url": "https://example.com/theme", // trailing comment
            "note": "keep // this"
        }"#;
        let value = parse_lenient(raw).expect("jsonc should parse");
        assert_eq!(
            value,
            json!({"url": "https://example.com/theme", "note": "keep // this"})
        );
    }

    #[test]
    fn removes_trailing_commas_before_closing_brackets() {
        let raw = "{\"a\": [1, 2, ], \"b\": {\"c\": true,\n},\n}";
        let value = parse_lenient(raw).expect("trailing commas should be tolerated");
        assert_eq!(value, json!({"a": [1, 2], "b": {"c": true}}));
    }

    #[test]
    fn trailing_comma_pattern_leaves_string_contents_alone() {
        let raw = "{\"a\": \"x, ]\", // note\n \"b\": 1,}";
        let value = parse_lenient(raw).expect("jsonc should parse");
        assert_eq!(value, json!({"a": "x, ]", "b": 1}));
    }

    #[test]
    fn escaped_quotes_do_not_end_string_literals() {
        let raw = r#"{"a": "say \"//hi\"", // gone
        }"#;
        let value = parse_lenient(raw).expect("jsonc should parse");
        assert_eq!(value, json!({"a": "say \"//hi\""}));
    }

    #[test]
    fn still_invalid_after_rewrite_is_an_error() {
        let raw = "{\"a\": 1 \"b\": 2}";
        assert!(parse_lenient(raw).is_err());
    }

    #[test]
    fn load_json_reports_path_on_parse_failure() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write fixture");

        let error = load_json(&path).expect_err("broken json should fail");
        assert!(matches!(error, ThemeError::Parse { .. }));
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn load_json_reports_missing_file_as_read_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let error = load_json(&dir.path().join("absent.json")).expect_err("missing file");
        assert!(matches!(error, ThemeError::Read { .. }));
    }

    #[test]
    fn pretty_json_honors_indent_width() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(
            to_pretty_json(&value, 2).expect("serialize"),
            "{\n  \"a\": {\n    \"b\": 1\n  }\n}"
        );
        assert_eq!(
            to_pretty_json(&value, 4).expect("serialize"),
            "{\n    \"a\": {\n        \"b\": 1\n    }\n}"
        );
    }

    #[test]
    fn write_json_round_trips_through_load_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.json");
        let value = json!({"name": "x", "list": [1, 2]});
        write_json(&path, &value, DEFAULT_INDENT).expect("write json");
        assert_eq!(load_json(&path).expect("load json"), value);
    }
}
