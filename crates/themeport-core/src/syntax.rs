//! Token style rules to destination syntax styles.
//!
//! Each source scope is matched against the scope table by dot-delimited
//! prefix, and the most specific (longest) pattern wins. A pattern matches a
//! scope when it is equal to it or is one of its dotted ancestors, so
//! `constant.numeric` matches `constant.numeric.hex` but `const` does not
//! match `constant`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::source::{TokenSettings, TokenStyleRule};
use crate::tables::{ScopeRule, ThemeMappings};

pub const BOLD_FONT_WEIGHT: u16 = 700;

/// The only font style source themes can request; anything else is
/// written as an explicit `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Italic,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SyntaxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// `Some(None)` is written as an explicit `null`, clearing any style the
    /// destination editor would otherwise infer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<Option<FontStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
}

impl SyntaxStyle {
    /// Builds the attributes a rule contributes, or `None` when it carries
    /// neither a foreground nor a font style.
    pub fn from_settings(settings: &TokenSettings) -> Option<Self> {
        let color = settings.foreground().map(str::to_string);
        let font_style = settings.font_style();
        if color.is_none() && font_style.is_none() {
            return None;
        }

        let mut style = Self {
            color,
            ..Self::default()
        };
        if let Some(font_style) = font_style {
            if font_style.contains("bold") {
                style.font_weight = Some(BOLD_FONT_WEIGHT);
            }
            style.font_style = Some(font_style.contains("italic").then_some(FontStyle::Italic));
        }
        Some(style)
    }

    /// Overwrites every attribute `later` carries; the rest are kept.
    pub fn merge(&mut self, later: &SyntaxStyle) {
        if later.color.is_some() {
            self.color.clone_from(&later.color);
        }
        if later.font_style.is_some() {
            self.font_style = later.font_style;
        }
        if later.font_weight.is_some() {
            self.font_weight = later.font_weight;
        }
    }
}

pub fn scope_matches(scope: &str, pattern: &str) -> bool {
    scope == pattern
        || scope
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Returns the most specific rule matching `scope`. Among equally long
/// patterns the first declared one wins.
pub fn best_scope_match<'a>(scope: &str, rules: &'a [ScopeRule]) -> Option<&'a ScopeRule> {
    let mut best: Option<&ScopeRule> = None;
    for rule in rules {
        if rule.scope.is_empty() || !scope_matches(scope, rule.scope) {
            continue;
        }
        if best.map_or(true, |current| rule.scope.len() > current.scope.len()) {
            best = Some(rule);
        }
    }
    best
}

/// Maps all token style rules to destination syntax styles.
///
/// Keys keep the order in which they were first produced. When a later rule
/// maps to a key that already exists, its attributes overwrite the earlier
/// ones attribute by attribute.
pub fn map_scopes(
    rules: &[TokenStyleRule],
    mappings: &ThemeMappings,
) -> IndexMap<String, SyntaxStyle> {
    let mut syntax: IndexMap<String, SyntaxStyle> = IndexMap::new();

    for rule in rules {
        let Some(style) = SyntaxStyle::from_settings(&rule.settings) else {
            continue;
        };
        let Some(selector) = rule.scope.as_ref() else {
            continue;
        };

        for scope in selector.scopes() {
            let Some(matched) = best_scope_match(scope, mappings.scopes) else {
                tracing::trace!(scope = %scope, "no syntax mapping for scope");
                continue;
            };
            for target in matched.targets {
                tracing::trace!(
                    scope = %scope,
                    pattern = matched.scope,
                    destination = *target,
                    "mapped scope"
                );
                match syntax.get_mut(*target) {
                    Some(existing) => existing.merge(&style),
                    None => {
                        syntax.insert((*target).to_string(), style.clone());
                    }
                }
            }
        }
    }

    syntax
}
