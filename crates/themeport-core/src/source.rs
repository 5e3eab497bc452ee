use serde::Deserialize;
use serde_json::{Map, Value};

/// Flat source color map. Values are carried through untouched.
pub type ColorMap = Map<String, Value>;

/// A source theme file: UI colors plus token style rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceTheme {
    #[serde(default)]
    pub colors: ColorMap,
    #[serde(default, rename = "tokenColors")]
    pub token_colors: Vec<TokenStyleRule>,
}

/// Only the `colors` section of a source theme; `tokenColors` is not read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceColors {
    #[serde(default)]
    pub colors: ColorMap,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenStyleRule {
    #[serde(default)]
    pub scope: Option<ScopeSelector>,
    #[serde(default)]
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
    Single(String),
    Multiple(Vec<String>),
    /// Anything else (numbers, objects). Rules carrying it are skipped.
    Other(Value),
}

impl ScopeSelector {
    pub fn scopes(&self) -> &[String] {
        match self {
            Self::Single(scope) => std::slice::from_ref(scope),
            Self::Multiple(scopes) => scopes,
            Self::Other(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSettings {
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default, rename = "fontStyle")]
    pub font_style: Option<String>,
}

impl TokenSettings {
    /// Foreground color, treating an empty string as unset.
    pub fn foreground(&self) -> Option<&str> {
        self.foreground.as_deref().filter(|value| !value.is_empty())
    }

    /// Font style, treating an empty string as unset.
    pub fn font_style(&self) -> Option<&str> {
        self.font_style.as_deref().filter(|value| !value.is_empty())
    }
}
