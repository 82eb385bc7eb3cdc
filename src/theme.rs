//! Host theme tokens and their resolution to terminal styling
//!
//! The host frame may hand the widget a set of theme tokens. Resolution is
//! a pure mapping: pick light or dark mode from the `base` indicator, then
//! fill every visual slot from the matching token or from the built-in
//! palette for that mode. Unparseable tokens degrade to the same fallbacks
//! as absent ones.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::utils::color::color_or;

/// Value of `base` that selects dark mode; anything else is light.
const DARK_BASE: &str = "dark";

const DEFAULT_PRIMARY: Color = Color::Rgb(246, 51, 102); // #F63366
const DARK_BACKGROUND: Color = Color::Rgb(14, 17, 23); // #0e1117
const LIGHT_BACKGROUND: Color = Color::Rgb(255, 255, 255); // #FFFFFF
const DARK_PAPER: Color = Color::Rgb(30, 30, 30); // #1e1e1e
const LIGHT_PAPER: Color = Color::Rgb(240, 242, 246); // #F0F2F6
const DARK_TEXT: Color = Color::Rgb(250, 250, 250); // #FAFAFA
const LIGHT_TEXT: Color = Color::Rgb(38, 39, 48); // #262730
const DEFAULT_FONT: &str = "Inter, system-ui, sans-serif";

/// Raw theme tokens as supplied by the host frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeTokens {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Fully-resolved visual style, every slot populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub mode: ThemeMode,
    /// Accent color for the focused field and the active picker segment.
    pub primary: Color,
    pub background: Color,
    /// Elevated surface color used for the field and the popup.
    pub paper: Color,
    pub text: Color,
    /// Carried for host fidelity; a terminal cannot switch fonts.
    pub font: String,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        resolve(None)
    }
}

/// Map optional host tokens to a fully-resolved style record.
#[must_use]
pub fn resolve(tokens: Option<&ThemeTokens>) -> ResolvedTheme {
    let mode = match tokens.and_then(|t| t.base.as_deref()) {
        Some(DARK_BASE) => ThemeMode::Dark,
        _ => ThemeMode::Light,
    };
    let (background, paper, text) = match mode {
        ThemeMode::Dark => (DARK_BACKGROUND, DARK_PAPER, DARK_TEXT),
        ThemeMode::Light => (LIGHT_BACKGROUND, LIGHT_PAPER, LIGHT_TEXT),
    };

    ResolvedTheme {
        mode,
        primary: color_or(tokens.and_then(|t| t.primary_color.as_deref()), DEFAULT_PRIMARY),
        background: color_or(tokens.and_then(|t| t.background_color.as_deref()), background),
        paper: color_or(
            tokens.and_then(|t| t.secondary_background_color.as_deref()),
            paper,
        ),
        text: color_or(tokens.and_then(|t| t.text_color.as_deref()), text),
        font: tokens
            .and_then(|t| t.font.clone())
            .unwrap_or_else(|| DEFAULT_FONT.to_string()),
    }
}
