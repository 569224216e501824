//! Theme tokens and the style map derived from them
//!
//! `ThemeTokens` carries the handful of visual parameters the sign-in page
//! needs. `sign_in_styles` turns them into a `StyleMap`, one inline style
//! declaration per semantic class name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Background used when nothing overrides it
pub const DEFAULT_BACKGROUND: &str = "#fafafa";
/// Background of the dark palette
pub const DARK_BACKGROUND: &str = "#303030";
/// Base spacing unit in pixels
pub const DEFAULT_SPACING_UNIT: u32 = 8;

/// Number of spacing units used to pad the sign-in content
const CONTENT_PADDING_UNITS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub unit: u32,
}

/// Visual parameters supplied by the theme provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub palette: Palette,
    pub spacing: Spacing,
}

impl ThemeTokens {
    pub fn new(background: impl Into<String>, spacing_unit: u32) -> Self {
        Self {
            palette: Palette {
                background: Background {
                    default: background.into(),
                },
            },
            spacing: Spacing { unit: spacing_unit },
        }
    }

    /// Same spacing, dark background
    pub fn to_dark(&self) -> Self {
        Self::new(DARK_BACKGROUND, self.spacing.unit)
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND, DEFAULT_SPACING_UNIT)
    }
}

/// An ordered list of CSS declarations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDecl {
    entries: Vec<(&'static str, String)>,
}

impl StyleDecl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((property, value.into()));
        self
    }

    /// Value of a property, if declared
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No trailing separator; the renderer terminates the attribute itself
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

/// Semantic class names mapped to their declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap {
    pub root: StyleDecl,
    pub content: StyleDecl,
}

/// Derive the sign-in page styles from theme tokens
pub fn sign_in_styles(tokens: &ThemeTokens) -> StyleMap {
    let root = StyleDecl::new()
        .with("flex-grow", "1")
        .with("z-index", "1")
        .with("overflow", "hidden")
        .with("position", "relative")
        .with("display", "flex")
        .with("height", "100%");

    let padding = u64::from(tokens.spacing.unit) * CONTENT_PADDING_UNITS;
    let content = StyleDecl::new()
        .with("flex-grow", "1")
        .with("background-color", tokens.palette.background.default.clone())
        .with("padding", format!("{}px", padding))
        // Lets nested no-wrap text truncate instead of widening the flex item
        .with("min-width", "0");

    StyleMap { root, content }
}
