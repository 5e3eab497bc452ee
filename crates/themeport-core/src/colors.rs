use crate::source::ColorMap;
use crate::tables::ThemeMappings;

const DESTINATION_ANSI_PREFIX: &str = "terminal.ansi.";
const SOURCE_ANSI_PREFIX: &str = "terminal.ansi";

/// Copies every mapped UI color present in `colors`. Keys whose source is
/// missing are left out rather than defaulted.
pub fn map_ui_colors(colors: &ColorMap, mappings: &ThemeMappings) -> ColorMap {
    let mut style = ColorMap::new();
    for mapping in mappings.ui_colors {
        if let Some(value) = colors.get(mapping.source) {
            style.insert(mapping.destination.to_string(), value.clone());
        }
    }
    style
}

/// Copies the terminal palette, same presence rules as [`map_ui_colors`].
pub fn map_ansi_colors(colors: &ColorMap, mappings: &ThemeMappings) -> ColorMap {
    let mut style = ColorMap::new();
    for mapping in mappings.ansi {
        if let Some(value) = colors.get(mapping.source) {
            style.insert(mapping.destination.to_string(), value.clone());
        }
    }
    style
}

/// Rebuilds the camelCase source key for a destination terminal color key,
/// e.g. `terminal.ansi.bright_red` -> `terminal.ansiBrightRed`.
pub fn ansi_source_key(destination: &str) -> Option<String> {
    let suffix = destination.strip_prefix(DESTINATION_ANSI_PREFIX)?;
    if suffix.is_empty() {
        return None;
    }
    let camel: String = suffix.split('_').map(capitalize).collect();
    Some(format!("{SOURCE_ANSI_PREFIX}{camel}"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::tables::ANSI_MAPPINGS;

    fn colors(value: serde_json::Value) -> ColorMap {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn absent_source_keys_are_omitted() {
        let source = colors(json!({"editor.background": "#1e1e1e"}));
        let style = map_ui_colors(&source, &ThemeMappings::builtin());

        assert_eq!(style.get("background"), Some(&json!("#1e1e1e")));
        assert_eq!(style.get("editor.background"), Some(&json!("#1e1e1e")));
        assert_eq!(style.get("scrollbar.track.background"), Some(&json!("#1e1e1e")));
        assert!(!style.contains_key("editor.foreground"));
        assert!(!style.contains_key("border"));
        assert_eq!(style.len(), 3);
    }

    #[test]
    fn values_are_copied_verbatim() {
        let source = colors(json!({"focusBorder": "not-a-color", "foreground": null}));
        let style = map_ui_colors(&source, &ThemeMappings::builtin());
        assert_eq!(style.get("border"), Some(&json!("not-a-color")));
        assert_eq!(style.get("icon.muted"), Some(&json!(null)));
    }

    #[test]
    fn ansi_palette_uses_snake_case_destination_keys() {
        let source = colors(json!({
            "terminal.ansiRed": "#ff0000",
            "terminal.ansiBrightMagenta": "#ff00ff"
        }));
        let style = map_ansi_colors(&source, &ThemeMappings::builtin());
        assert_eq!(style.get("terminal.ansi.red"), Some(&json!("#ff0000")));
        assert_eq!(
            style.get("terminal.ansi.bright_magenta"),
            Some(&json!("#ff00ff"))
        );
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn ansi_source_key_reverses_every_table_entry() {
        for mapping in ANSI_MAPPINGS {
            assert_eq!(
                ansi_source_key(mapping.destination).as_deref(),
                Some(mapping.source)
            );
        }
        assert_eq!(
            ansi_source_key("terminal.ansi.dim_white").as_deref(),
            Some("terminal.ansiDimWhite")
        );
        assert_eq!(ansi_source_key("terminal.ansi."), None);
        assert_eq!(ansi_source_key("terminal.background"), None);
    }
}
