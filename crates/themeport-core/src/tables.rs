//! Compiled-in lookup tables between the source and destination schemas.
//!
//! Every table is an ordered slice. Order matters: it decides output key
//! order and breaks ties between equally specific scope patterns.

/// Destination UI color key copied from a source color key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMapping {
    pub destination: &'static str,
    pub source: &'static str,
}

/// Value a reconciled destination key is filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedValue {
    /// Look the key up in the source theme's color map.
    Source(&'static str),
    /// Use the value as-is.
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedMapping {
    pub destination: &'static str,
    pub value: MappedValue,
}

/// Source scope pattern and the destination syntax keys it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeRule {
    pub scope: &'static str,
    pub targets: &'static [&'static str],
}

/// Source terminal color key and its destination counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiMapping {
    pub source: &'static str,
    pub destination: &'static str,
}

/// The full set of tables a conversion runs against.
#[derive(Debug, Clone, Copy)]
pub struct ThemeMappings {
    pub ui_colors: &'static [ColorMapping],
    pub expanded_colors: &'static [ExpandedMapping],
    pub scopes: &'static [ScopeRule],
    pub ansi: &'static [AnsiMapping],
}

impl ThemeMappings {
    pub const fn builtin() -> Self {
        Self {
            ui_colors: UI_COLOR_MAPPINGS,
            expanded_colors: EXPANDED_COLOR_MAPPINGS,
            scopes: SCOPE_RULES,
            ansi: ANSI_MAPPINGS,
        }
    }

    pub fn expanded(&self, destination: &str) -> Option<MappedValue> {
        self.expanded_colors
            .iter()
            .find(|mapping| mapping.destination == destination)
            .map(|mapping| mapping.value)
    }
}

impl Default for ThemeMappings {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn ui(destination: &'static str, source: &'static str) -> ColorMapping {
    ColorMapping {
        destination,
        source,
    }
}

const fn from_source(destination: &'static str, source: &'static str) -> ExpandedMapping {
    ExpandedMapping {
        destination,
        value: MappedValue::Source(source),
    }
}

const fn literal(destination: &'static str, value: &'static str) -> ExpandedMapping {
    ExpandedMapping {
        destination,
        value: MappedValue::Literal(value),
    }
}

const fn scope(scope: &'static str, targets: &'static [&'static str]) -> ScopeRule {
    ScopeRule { scope, targets }
}

const fn ansi(source: &'static str, destination: &'static str) -> AnsiMapping {
    AnsiMapping {
        source,
        destination,
    }
}

pub const UI_COLOR_MAPPINGS: &[ColorMapping] = &[
    ui("background", "editor.background"),
    ui("editor.background", "editor.background"),
    ui("editor.foreground", "editor.foreground"),
    ui("elevated_surface.background", "editorWidget.background"),
    ui("surface.background", "sideBar.background"),
    ui("panel.background", "sideBar.background"),
    ui("terminal.background", "terminal.background"),
    ui("element.background", "input.background"),
    ui("element.hover", "list.hoverBackground"),
    ui("element.active", "list.activeSelectionBackground"),
    ui("element.selected", "list.activeSelectionBackground"),
    ui("border", "focusBorder"),
    ui("border.variant", "sideBar.border"),
    ui("border.focused", "focusBorder"),
    ui("border.selected", "focusBorder"),
    ui("border.disabled", "disabledForeground"),
    ui("text", "editor.foreground"),
    ui("text.muted", "descriptionForeground"),
    ui("text.placeholder", "input.placeholderForeground"),
    ui("text.disabled", "disabledForeground"),
    ui("text.accent", "textLink.foreground"),
    ui("icon", "icon.foreground"),
    ui("icon.muted", "foreground"),
    ui("icon.accent", "activityBarBadge.background"),
    ui("status_bar.background", "statusBar.background"),
    ui("title_bar.background", "titleBar.activeBackground"),
    ui("title_bar.inactive_background", "titleBar.inactiveBackground"),
    ui("tab_bar.background", "editorGroupHeader.tabsBackground"),
    ui("toolbar.background", "breadcrumb.background"),
    ui("tab.active_background", "tab.activeBackground"),
    ui("tab.inactive_background", "tab.inactiveBackground"),
    ui("editor.active_line.background", "editor.lineHighlightBackground"),
    ui("editor.highlighted_line.background", "editor.lineHighlightBackground"),
    ui("editor.line_number", "editorLineNumber.foreground"),
    ui("editor.active_line_number", "editorLineNumber.activeForeground"),
    ui("editor.invisible", "editorWhitespace.foreground"),
    ui("editor.wrap_guide", "editorIndentGuide.background"),
    ui("editor.active_wrap_guide", "editorIndentGuide.activeBackground"),
    ui("editor.indent_guide", "editorIndentGuide.background"),
    ui("editor.indent_guide_active", "editorIndentGuide.activeBackground"),
    ui("search.match_background", "editor.findMatchBackground"),
    ui("editor.document_highlight.read_background", "editor.selectionBackground"),
    ui("editor.document_highlight.write_background", "editor.selectionBackground"),
    ui("editor.document_highlight.bracket_background", "editorBracketMatch.background"),
    ui("conflict", "gitDecoration.conflictingResourceForeground"),
    ui("created", "gitDecoration.addedResourceForeground"),
    ui("deleted", "gitDecoration.deletedResourceForeground"),
    ui("modified", "gitDecoration.modifiedResourceForeground"),
    ui("ignored", "gitDecoration.ignoredResourceForeground"),
    ui("renamed", "gitDecoration.renamedResourceForeground"),
    ui("error", "editorError.foreground"),
    ui("warning", "editorWarning.foreground"),
    ui("info", "editorInfo.foreground"),
    ui("hint", "editorHint.foreground"),
    ui("scrollbar.thumb.background", "scrollbarSlider.background"),
    ui("scrollbar.thumb.hover_background", "scrollbarSlider.hoverBackground"),
    // Usually transparent on the source side.
    ui("scrollbar.track.background", "editor.background"),
];

pub const EXPANDED_COLOR_MAPPINGS: &[ExpandedMapping] = &[
    literal("background.appearance", "opaque"),
    from_source("border", "focusBorder"),
    from_source("border.variant", "sideBar.border"),
    from_source("border.focused", "focusBorder"),
    from_source("border.selected", "focusBorder"),
    literal("border.transparent", "#00000000"),
    from_source("border.disabled", "disabledForeground"),
    from_source("elevated_surface.background", "editorWidget.background"),
    from_source("surface.background", "sideBar.background"),
    from_source("background", "editor.background"),
    from_source("element.background", "input.background"),
    from_source("element.hover", "list.hoverBackground"),
    from_source("element.active", "list.activeSelectionBackground"),
    from_source("element.selected", "list.activeSelectionBackground"),
    from_source("element.disabled", "disabledForeground"),
    from_source("drop_target.background", "list.dropBackground"),
    literal("ghost_element.background", "#00000000"),
    from_source("ghost_element.hover", "list.hoverBackground"),
    from_source("ghost_element.active", "list.activeSelectionBackground"),
    from_source("ghost_element.selected", "list.activeSelectionBackground"),
    from_source("ghost_element.disabled", "disabledForeground"),
    from_source("text", "editor.foreground"),
    from_source("text.muted", "descriptionForeground"),
    from_source("text.placeholder", "input.placeholderForeground"),
    from_source("text.disabled", "disabledForeground"),
    from_source("text.accent", "textLink.foreground"),
    from_source("icon", "icon.foreground"),
    from_source("icon.muted", "foreground"),
    from_source("icon.disabled", "disabledForeground"),
    from_source("icon.placeholder", "input.placeholderForeground"),
    from_source("icon.accent", "activityBarBadge.background"),
    from_source("status_bar.background", "statusBar.background"),
    from_source("title_bar.background", "titleBar.activeBackground"),
    from_source("title_bar.inactive_background", "titleBar.inactiveBackground"),
    from_source("toolbar.background", "breadcrumb.background"),
    from_source("tab_bar.background", "editorGroupHeader.tabsBackground"),
    from_source("tab.inactive_background", "tab.inactiveBackground"),
    from_source("tab.active_background", "tab.activeBackground"),
    from_source("search.match_background", "editor.findMatchBackground"),
    from_source("panel.background", "panel.background"),
    from_source("panel.focused_border", "focusBorder"),
    from_source("panel.indent_guide", "editorIndentGuide.background"),
    from_source("panel.indent_guide_active", "editorIndentGuide.activeBackground"),
    from_source("panel.indent_guide_hover", "editorIndentGuide.activeBackground"),
    from_source("pane.focused_border", "focusBorder"),
    from_source("pane_group.border", "editorGroup.border"),
    from_source("scrollbar.thumb.background", "scrollbarSlider.background"),
    from_source("scrollbar.thumb.hover_background", "scrollbarSlider.hoverBackground"),
    from_source("scrollbar.thumb.border", "scrollbarSlider.background"),
    from_source("scrollbar.track.background", "editor.background"),
    from_source("scrollbar.track.border", "editor.background"),
    from_source("editor.foreground", "editor.foreground"),
    from_source("editor.background", "editor.background"),
    from_source("editor.gutter.background", "editorGutter.background"),
    from_source("editor.subheader.background", "editorWidget.background"),
    from_source("editor.active_line.background", "editor.lineHighlightBackground"),
    from_source("editor.highlighted_line.background", "editor.lineHighlightBackground"),
    from_source("editor.line_number", "editorLineNumber.foreground"),
    from_source("editor.active_line_number", "editorLineNumber.activeForeground"),
    from_source("editor.invisible", "editorWhitespace.foreground"),
    from_source("editor.wrap_guide", "editorIndentGuide.background"),
    from_source("editor.active_wrap_guide", "editorIndentGuide.activeBackground"),
    from_source("editor.document_highlight.read_background", "editor.selectionBackground"),
    from_source("editor.document_highlight.write_background", "editor.selectionBackground"),
    from_source(
        "editor.document_highlight.bracket_background",
        "editorBracketMatch.background",
    ),
    from_source("editor.indent_guide", "editorIndentGuide.background"),
    from_source("editor.indent_guide_active", "editorIndentGuide.activeBackground"),
    from_source("link_text.hover", "textLink.activeForeground"),
    from_source("conflict", "gitDecoration.conflictingResourceForeground"),
    from_source("conflict.background", "diffEditor.removedTextBackground"),
    from_source("conflict.border", "gitDecoration.conflictingResourceForeground"),
    from_source("created", "gitDecoration.addedResourceForeground"),
    from_source("created.background", "diffEditor.insertedTextBackground"),
    from_source("created.border", "gitDecoration.addedResourceForeground"),
    from_source("deleted", "gitDecoration.deletedResourceForeground"),
    from_source("deleted.background", "diffEditor.removedTextBackground"),
    from_source("deleted.border", "gitDecoration.deletedResourceForeground"),
    from_source("error", "editorError.foreground"),
    from_source("error.background", "inputValidation.errorBackground"),
    from_source("error.border", "inputValidation.errorBorder"),
    from_source("hidden", "editorWhitespace.foreground"),
    from_source("hidden.background", "editor.background"),
    from_source("hidden.border", "editorWhitespace.foreground"),
    from_source("hint", "editorHint.foreground"),
    from_source("hint.background", "editor.background"),
    from_source("hint.border", "editorHint.border"),
    from_source("ignored", "gitDecoration.ignoredResourceForeground"),
    from_source("ignored.background", "editor.background"),
    from_source("ignored.border", "gitDecoration.ignoredResourceForeground"),
    from_source("info", "editorInfo.foreground"),
    from_source("info.background", "inputValidation.infoBackground"),
    from_source("info.border", "inputValidation.infoBorder"),
    from_source("modified", "gitDecoration.modifiedResourceForeground"),
    from_source("modified.background", "editor.background"),
    from_source("modified.border", "gitDecoration.modifiedResourceForeground"),
    from_source("predictive", "editorGhostText.foreground"),
    from_source("predictive.background", "editor.background"),
    from_source("predictive.border", "editorGhostText.foreground"),
    from_source("renamed", "gitDecoration.renamedResourceForeground"),
    from_source("renamed.background", "editor.background"),
    from_source("renamed.border", "gitDecoration.renamedResourceForeground"),
    from_source("success", "debugIcon.startForeground"),
    from_source("success.background", "editor.background"),
    from_source("success.border", "debugIcon.startForeground"),
    from_source("unreachable", "editorUnnecessaryCode.opacity"),
    from_source("unreachable.border", "editorUnnecessaryCode.border"),
    from_source("warning", "editorWarning.foreground"),
    from_source("warning.background", "inputValidation.warningBackground"),
    from_source("warning.border", "inputValidation.warningBorder"),
];

pub const SCOPE_RULES: &[ScopeRule] = &[
    scope("comment", &["comment"]),
    scope("string", &["string"]),
    scope("string.regexp", &["string.regex"]),
    scope("string.escape", &["string.escape"]),
    scope("constant", &["constant"]),
    scope("constant.numeric", &["number"]),
    scope("constant.language", &["boolean"]),
    scope("constant.character.escape", &["string.escape"]),
    // Misspelling shipped by several popular themes.
    scope("constant.charcter.escape", &["string.escape"]),
    scope("keyword", &["keyword"]),
    scope("keyword.control", &["keyword"]),
    scope("keyword.operator", &["operator"]),
    scope("storage", &["keyword"]),
    scope("storage.type", &["keyword"]),
    scope("storage.modifier", &["keyword"]),
    scope("entity.name.type", &["type"]),
    scope("entity.name.class", &["type"]),
    scope("entity.name.function", &["function"]),
    scope("entity.name.function.constructor", &["constructor"]),
    scope("entity.name.section", &["type"]),
    scope("entity.name.namespace", &["type"]),
    scope("entity.name.tag", &["tag"]),
    scope("entity.other.attribute-name", &["attribute"]),
    scope("variable", &["variable", "property"]),
    scope("variable.parameter", &["variable.parameter", "parameter"]),
    scope("entity.name.variable.parameter", &["variable.parameter"]),
    scope("variable.argument", &["variable.parameter", "parameter"]),
    scope("variable.language", &["variable.special"]),
    scope("variable.other", &["variable"]),
    scope("variable.other.property", &["property"]),
    scope("support.type.property-name", &["property"]),
    scope("punctuation", &["punctuation"]),
    scope("punctuation.definition.tag", &["punctuation"]),
    scope("punctuation.definition.string", &["punctuation"]),
    scope("punctuation.separator.key-value", &["punctuation"]),
    scope("punctuation.section", &["punctuation.bracket"]),
    scope("punctuation.terminator", &["punctuation.delimiter"]),
    scope("meta.function-call", &["function"]),
    // Themes without entity.name.function often color functions here.
    scope("entity.name", &["function"]),
    scope("markup.bold", &["emphasis.strong"]),
    scope("markup.italic", &["emphasis"]),
];

pub const ANSI_MAPPINGS: &[AnsiMapping] = &[
    ansi("terminal.ansiBlack", "terminal.ansi.black"),
    ansi("terminal.ansiRed", "terminal.ansi.red"),
    ansi("terminal.ansiGreen", "terminal.ansi.green"),
    ansi("terminal.ansiYellow", "terminal.ansi.yellow"),
    ansi("terminal.ansiBlue", "terminal.ansi.blue"),
    ansi("terminal.ansiMagenta", "terminal.ansi.magenta"),
    ansi("terminal.ansiCyan", "terminal.ansi.cyan"),
    ansi("terminal.ansiWhite", "terminal.ansi.white"),
    ansi("terminal.ansiBrightBlack", "terminal.ansi.bright_black"),
    ansi("terminal.ansiBrightRed", "terminal.ansi.bright_red"),
    ansi("terminal.ansiBrightGreen", "terminal.ansi.bright_green"),
    ansi("terminal.ansiBrightYellow", "terminal.ansi.bright_yellow"),
    ansi("terminal.ansiBrightBlue", "terminal.ansi.bright_blue"),
    ansi("terminal.ansiBrightMagenta", "terminal.ansi.bright_magenta"),
    ansi("terminal.ansiBrightCyan", "terminal.ansi.bright_cyan"),
    ansi("terminal.ansiBrightWhite", "terminal.ansi.bright_white"),
];
