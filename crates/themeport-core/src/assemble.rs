//! Destination theme document assembly.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::colors::{map_ansi_colors, map_ui_colors};
use crate::manifest::Appearance;
use crate::source::{ColorMap, SourceTheme};
use crate::syntax::{map_scopes, SyntaxStyle};
use crate::tables::ThemeMappings;

pub const THEME_SCHEMA_URL: &str = "https://zed.dev/schema/themes/v0.2.0.json";
pub const DEFAULT_AUTHOR: &str = "Unknown";
pub const DEFAULT_CURSOR_COLOR: &str = "#FFFFFF";
pub const DEFAULT_SELECTION_COLOR: &str = "#FFFFFF44";
pub const DEFAULT_ACCENT_COLOR: &str = "#FF0000";

const CURSOR_SOURCE_KEY: &str = "editorCursor.foreground";
const SELECTION_SOURCE_KEY: &str = "editor.selectionBackground";
const ACCENT_SOURCE_KEY: &str = "activityBarBadge.background";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeFamily {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    pub author: String,
    pub themes: Vec<ThemeContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeContent {
    pub name: String,
    pub appearance: Appearance,
    pub style: ThemeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeStyle {
    /// UI and terminal colors, written ahead of the nested collections.
    #[serde(flatten)]
    pub colors: ColorMap,
    pub syntax: IndexMap<String, SyntaxStyle>,
    pub players: Vec<Player>,
    pub accents: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub cursor: Value,
    pub background: Value,
    pub selection: Value,
}

/// Builds the destination document for one source theme.
pub fn assemble(
    source: &SourceTheme,
    label: &str,
    appearance: Appearance,
    author: &str,
    mappings: &ThemeMappings,
) -> ThemeFamily {
    let mut colors = map_ui_colors(&source.colors, mappings);
    colors.extend(map_ansi_colors(&source.colors, mappings));

    let cursor = color_or(&source.colors, CURSOR_SOURCE_KEY, DEFAULT_CURSOR_COLOR);
    let selection = color_or(&source.colors, SELECTION_SOURCE_KEY, DEFAULT_SELECTION_COLOR);
    let accent = color_or(&source.colors, ACCENT_SOURCE_KEY, DEFAULT_ACCENT_COLOR);

    let style = ThemeStyle {
        colors,
        syntax: map_scopes(&source.token_colors, mappings),
        players: vec![Player {
            cursor: cursor.clone(),
            background: cursor,
            selection,
        }],
        accents: vec![accent],
    };

    ThemeFamily {
        schema: THEME_SCHEMA_URL.to_string(),
        name: label.to_string(),
        author: author.to_string(),
        themes: vec![ThemeContent {
            name: label.to_string(),
            appearance,
            style,
        }],
    }
}

/// Output file name for a theme label: spaces become underscores.
pub fn output_file_name(label: &str) -> String {
    format!("{}.json", label.replace(' ', "_"))
}

fn color_or(colors: &ColorMap, key: &str, fallback: &str) -> Value {
    colors
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::String(fallback.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn source(value: Value) -> SourceTheme {
        serde_json::from_value(value).expect("source theme should deserialize")
    }

    #[test]
    fn assembles_metadata_and_style_sections() {
        let theme = source(json!({
            "colors": {
                "editor.background": "#1e1e1e",
                "editor.foreground": "#d4d4d4",
                "terminal.ansiGreen": "#00ff00"
            },
            "tokenColors": [
                {"scope": "comment", "settings": {"foreground": "#6a9955", "fontStyle": "italic"}}
            ]
        }));
        let family = assemble(
            &theme,
            "Test Dark",
            Appearance::Dark,
            "acme",
            &ThemeMappings::builtin(),
        );
        let value = serde_json::to_value(&family).expect("serialize family");

        assert_eq!(value["$schema"], THEME_SCHEMA_URL);
        assert_eq!(value["name"], "Test Dark");
        assert_eq!(value["author"], "acme");
        assert_eq!(value["themes"][0]["appearance"], "dark");
        let style = &value["themes"][0]["style"];
        assert_eq!(style["background"], "#1e1e1e");
        assert_eq!(style["text"], "#d4d4d4");
        assert_eq!(style["terminal.ansi.green"], "#00ff00");
        assert_eq!(
            style["syntax"]["comment"],
            json!({"color": "#6a9955", "font_style": "italic"})
        );
    }

    #[test]
    fn players_and_accents_fall_back_to_literals() {
        let family = assemble(
            &SourceTheme::default(),
            "Bare",
            Appearance::Light,
            DEFAULT_AUTHOR,
            &ThemeMappings::builtin(),
        );
        let style = &family.themes[0].style;
        assert_eq!(
            style.players,
            vec![Player {
                cursor: json!(DEFAULT_CURSOR_COLOR),
                background: json!(DEFAULT_CURSOR_COLOR),
                selection: json!(DEFAULT_SELECTION_COLOR),
            }]
        );
        assert_eq!(style.accents, vec![json!(DEFAULT_ACCENT_COLOR)]);
        assert!(style.colors.is_empty());
        assert!(style.syntax.is_empty());
    }

    #[test]
    fn players_use_cursor_and_selection_colors() {
        let theme = source(json!({
            "colors": {
                "editorCursor.foreground": "#aeafad",
                "editor.selectionBackground": "#264f78",
                "activityBarBadge.background": "#007acc"
            }
        }));
        let family = assemble(
            &theme,
            "Cursor",
            Appearance::Dark,
            DEFAULT_AUTHOR,
            &ThemeMappings::builtin(),
        );
        let style = &family.themes[0].style;
        assert_eq!(style.players[0].cursor, json!("#aeafad"));
        assert_eq!(style.players[0].background, json!("#aeafad"));
        assert_eq!(style.players[0].selection, json!("#264f78"));
        assert_eq!(style.accents, vec![json!("#007acc")]);
    }

    #[test]
    fn style_keys_keep_table_order_before_collections() {
        let theme = source(json!({
            "colors": {
                "terminal.ansiBlack": "#000000",
                "editor.foreground": "#d4d4d4",
                "editor.background": "#1e1e1e"
            }
        }));
        let family = assemble(
            &theme,
            "Order",
            Appearance::Dark,
            DEFAULT_AUTHOR,
            &ThemeMappings::builtin(),
        );
        let value = serde_json::to_value(&family.themes[0].style).expect("serialize style");
        let keys: Vec<&str> = value
            .as_object()
            .expect("style object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.first(), Some(&"background"));
        assert_eq!(
            &keys[keys.len() - 4..],
            ["terminal.ansi.black", "syntax", "players", "accents"]
        );
    }

    #[test]
    fn output_file_name_replaces_spaces() {
        assert_eq!(output_file_name("Test Dark"), "Test_Dark.json");
        assert_eq!(output_file_name("Blank  Moonlight"), "Blank__Moonlight.json");
    }
}
