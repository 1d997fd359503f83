//! Palette families, display modes, and mood-indexed color stops.
//!
//! The dashboard renders against one of two palette families, light or
//! dark. Users pick a [`DisplayMode`]; `Automatic` is not OS detection:
//! it always resolves against the dark family and additionally drives the
//! mood-reactive CSS variables. That asymmetry is deliberate: the ambient
//! gradients are tuned for dark backgrounds, so the reactive experience is
//! a dark-family feature.
//!
//! Color stops ([`CssVariables`]) are keyed by mood alone. Both families
//! inject the same four values; only the class-name tables differ per
//! family.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mood::{MoodState, ParseTokenError};

/// The base style set a theme lookup resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteFamily {
    /// Light backgrounds, dark text.
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

/// The user's display-mode preference.
///
/// This is the only durable state the theming core owns. It is persisted
/// by `marketmood`'s preference store and defaults to [`Automatic`]
/// (`DisplayMode::Automatic`) when nothing has been saved yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Always the light family.
    Light,
    /// Always the dark family.
    Dark,
    /// Dark family plus mood-reactive CSS variables.
    #[default]
    Automatic,
}

impl DisplayMode {
    /// The palette family this mode resolves against.
    ///
    /// `Automatic` resolves to [`PaletteFamily::Dark`] unconditionally.
    pub fn family(self) -> PaletteFamily {
        match self {
            DisplayMode::Light => PaletteFamily::Light,
            DisplayMode::Dark | DisplayMode::Automatic => PaletteFamily::Dark,
        }
    }

    /// True when the document should carry the dark-mode flag.
    pub fn is_dark(self) -> bool {
        self.family() == PaletteFamily::Dark
    }

    /// The lowercase token used in serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
            DisplayMode::Automatic => "automatic",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            "automatic" => Ok(DisplayMode::Automatic),
            other => Err(ParseTokenError::new("display mode", other)),
        }
    }
}

/// Canonical custom-property name for the gradient start stop.
pub const VAR_GRADIENT_FROM: &str = "--mood-gradient-from";
/// Canonical custom-property name for the gradient end stop.
pub const VAR_GRADIENT_TO: &str = "--mood-gradient-to";
/// Canonical custom-property name for the accent color.
pub const VAR_ACCENT: &str = "--mood-accent";
/// Canonical custom-property name for the glow color.
pub const VAR_GLOW: &str = "--mood-glow";

/// The four raw color values injected as CSS custom properties.
///
/// Keyed by mood only; the same stops serve both palette families. Values
/// come from a fixed table, so every field is a `'static` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CssVariables {
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub accent_color: &'static str,
    pub glow_color: &'static str,
}

impl CssVariables {
    /// Looks up the color stops for a mood state.
    ///
    /// Exhaustive over [`MoodState`]; adding a state without a row here is
    /// a compile error, never a runtime gap.
    pub fn for_mood(state: MoodState) -> CssVariables {
        match state {
            MoodState::Neutral => CssVariables {
                gradient_from: "#334155",
                gradient_to: "#0f172a",
                accent_color: "#22d3ee",
                glow_color: "rgba(34, 211, 238, 0.25)",
            },
            MoodState::Bearish => CssVariables {
                gradient_from: "#7f1d1d",
                gradient_to: "#1c0a0a",
                accent_color: "#fb7185",
                glow_color: "rgba(251, 113, 133, 0.35)",
            },
            MoodState::Bullish => CssVariables {
                gradient_from: "#064e3b",
                gradient_to: "#02201a",
                accent_color: "#34d399",
                glow_color: "rgba(52, 211, 153, 0.35)",
            },
            MoodState::Extreme => CssVariables {
                gradient_from: "#4c1d95",
                gradient_to: "#1e1b4b",
                accent_color: "#e879f9",
                glow_color: "rgba(232, 121, 249, 0.45)",
            },
        }
    }

    /// The (custom-property name, value) pairs in injection order.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            (VAR_GRADIENT_FROM, self.gradient_from),
            (VAR_GRADIENT_TO, self.gradient_to),
            (VAR_ACCENT, self.accent_color),
            (VAR_GLOW, self.glow_color),
        ]
    }
}
