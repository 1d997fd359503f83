//! Theme bundle resolution.
//!
//! A [`ThemeBundle`] is the fully-resolved set of visual tokens for one
//! `(display mode, mood state)` pair: utility class names for the shell
//! components, the mood emoji and label, and the raw color stops consumers
//! reference through the injected custom properties.
//!
//! Resolution is a pure table lookup. The class tables are exhaustive
//! nested matches over [`PaletteFamily`] and [`MoodState`], so a new mood
//! state cannot ship without a row for both families; the build fails
//! first. Bundles are value objects: recomputed on every change, never
//! mutated in place.
//!
//! # Example
//!
//! ```rust
//! use marketmood_theme::{DisplayMode, MoodState, ThemeBundle};
//!
//! let bundle = ThemeBundle::resolve(DisplayMode::Automatic, MoodState::Bullish);
//! assert_eq!(bundle.label, "Bullish");
//! assert_eq!(bundle.emoji, "📈");
//! // Automatic always resolves against the dark family.
//! assert_eq!(
//!     bundle.background_class,
//!     ThemeBundle::resolve(DisplayMode::Dark, MoodState::Bullish).background_class,
//! );
//! ```

use serde::Serialize;

use crate::mood::MoodState;
use crate::palette::{CssVariables, DisplayMode, PaletteFamily};

/// The resolved visual tokens for one (mode, state) pair.
///
/// Every field is always populated; there is no partial bundle. The class
/// fields are Tailwind-style utility strings consumed verbatim by the view
/// layer, and `css_variables` carries the values behind the
/// `--mood-*` custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeBundle {
    /// Page background for the dashboard shell.
    pub background_class: &'static str,
    /// Ambient background gradient stops.
    pub gradient_classes: &'static str,
    /// Accent gradient used on cards, buttons, and the mood badge.
    pub accent_gradient_classes: &'static str,
    /// Glow shadow around mood-reactive surfaces.
    pub glow_class: &'static str,
    /// Primary text color.
    pub text_primary_class: &'static str,
    /// Secondary / muted text color.
    pub text_secondary_class: &'static str,
    /// Mood emoji, palette-independent.
    pub emoji: &'static str,
    /// Mood label, palette-independent.
    pub label: &'static str,
    /// Raw color stops for CSS custom-property injection.
    pub css_variables: CssVariables,
}

impl ThemeBundle {
    /// Resolves the bundle for a display mode and mood state.
    ///
    /// `Automatic` resolves against the dark family (see
    /// [`DisplayMode::family`]). Pure and deterministic: the same inputs
    /// always produce a structurally identical bundle.
    pub fn resolve(mode: DisplayMode, state: MoodState) -> ThemeBundle {
        Self::for_family(mode.family(), state)
    }

    /// Resolves the bundle for an explicit palette family.
    pub fn for_family(family: PaletteFamily, state: MoodState) -> ThemeBundle {
        let classes = class_table(family, state);
        ThemeBundle {
            background_class: classes.background,
            gradient_classes: classes.gradient,
            accent_gradient_classes: classes.accent_gradient,
            glow_class: classes.glow,
            text_primary_class: classes.text_primary,
            text_secondary_class: classes.text_secondary,
            emoji: state.emoji(),
            label: state.label(),
            css_variables: CssVariables::for_mood(state),
        }
    }
}

/// One row of the class-name table.
struct ClassRow {
    background: &'static str,
    gradient: &'static str,
    accent_gradient: &'static str,
    glow: &'static str,
    text_primary: &'static str,
    text_secondary: &'static str,
}

/// The two-level class table, `[family][state]`.
///
/// Nested exhaustive matches stand in for the object-literal lookup a
/// dynamic implementation would use: a missing `(family, state)` row is a
/// compile error rather than an `undefined` at render time.
fn class_table(family: PaletteFamily, state: MoodState) -> ClassRow {
    match family {
        PaletteFamily::Dark => match state {
            MoodState::Neutral => ClassRow {
                background: "bg-slate-950",
                gradient: "bg-gradient-to-br from-slate-800 to-slate-950",
                accent_gradient: "bg-gradient-to-r from-cyan-500 to-blue-600",
                glow: "shadow-lg shadow-cyan-500/20",
                text_primary: "text-slate-100",
                text_secondary: "text-slate-400",
            },
            MoodState::Bearish => ClassRow {
                background: "bg-slate-950",
                gradient: "bg-gradient-to-br from-rose-950 to-slate-950",
                accent_gradient: "bg-gradient-to-r from-rose-400 to-red-600",
                glow: "shadow-lg shadow-rose-500/30",
                text_primary: "text-slate-100",
                text_secondary: "text-rose-200/70",
            },
            MoodState::Bullish => ClassRow {
                background: "bg-slate-950",
                gradient: "bg-gradient-to-br from-emerald-950 to-slate-950",
                accent_gradient: "bg-gradient-to-r from-emerald-400 to-green-600",
                glow: "shadow-lg shadow-emerald-500/30",
                text_primary: "text-slate-100",
                text_secondary: "text-emerald-200/70",
            },
            MoodState::Extreme => ClassRow {
                background: "bg-slate-950",
                gradient: "bg-gradient-to-br from-violet-950 to-slate-950",
                accent_gradient: "bg-gradient-to-r from-fuchsia-400 to-violet-600",
                glow: "shadow-xl shadow-fuchsia-500/40",
                text_primary: "text-slate-100",
                text_secondary: "text-fuchsia-200/70",
            },
        },
        PaletteFamily::Light => match state {
            MoodState::Neutral => ClassRow {
                background: "bg-slate-50",
                gradient: "bg-gradient-to-br from-white to-slate-200",
                accent_gradient: "bg-gradient-to-r from-cyan-500 to-blue-600",
                glow: "shadow-md shadow-cyan-500/10",
                text_primary: "text-slate-900",
                text_secondary: "text-slate-500",
            },
            MoodState::Bearish => ClassRow {
                background: "bg-slate-50",
                gradient: "bg-gradient-to-br from-rose-50 to-slate-100",
                accent_gradient: "bg-gradient-to-r from-rose-500 to-red-600",
                glow: "shadow-md shadow-rose-500/15",
                text_primary: "text-slate-900",
                text_secondary: "text-rose-700/80",
            },
            MoodState::Bullish => ClassRow {
                background: "bg-slate-50",
                gradient: "bg-gradient-to-br from-emerald-50 to-slate-100",
                accent_gradient: "bg-gradient-to-r from-emerald-500 to-green-600",
                glow: "shadow-md shadow-emerald-500/15",
                text_primary: "text-slate-900",
                text_secondary: "text-emerald-700/80",
            },
            MoodState::Extreme => ClassRow {
                background: "bg-slate-50",
                gradient: "bg-gradient-to-br from-violet-50 to-slate-100",
                accent_gradient: "bg-gradient-to-r from-fuchsia-500 to-violet-600",
                glow: "shadow-lg shadow-fuchsia-500/20",
                text_primary: "text-slate-900",
                text_secondary: "text-violet-700/80",
            },
        },
    }
}
