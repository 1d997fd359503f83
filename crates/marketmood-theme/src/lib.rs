//! # Marketmood Theme - Mood Classification & Theme Resolution
//!
//! `marketmood-theme` is the pure layer of the marketmood dashboard core:
//! it turns a composite sentiment score into a discrete mood state and
//! resolves that state, together with the user's display-mode preference,
//! into a complete bundle of visual tokens.
//!
//! This crate performs no I/O and holds no state. Persistence of the
//! display-mode preference and application of the resolved tokens to a
//! live document live in the `marketmood` crate.
//!
//! ## Core Concepts
//!
//! - [`MoodState`]: one of four sentiment bands (`classify` is total over
//!   all finite scores)
//! - [`DisplayMode`]: the user's light/dark/automatic preference
//! - [`PaletteFamily`]: the light or dark base style set a lookup
//!   resolves against
//! - [`ThemeBundle`]: fully-populated class names, emoji/label, and color
//!   stops for one `(mode, state)` pair
//! - [`CssVariables`]: the four mood-keyed custom-property values
//!
//! ## Quick Start
//!
//! ```rust
//! use marketmood_theme::{DisplayMode, MoodState, SentimentSnapshot, ThemeBundle};
//!
//! let snapshot = SentimentSnapshot::new(34.0, 40.0, 28.0, 31.0);
//! let state = snapshot.mood();
//! assert_eq!(state, MoodState::Bullish);
//!
//! let bundle = ThemeBundle::resolve(DisplayMode::Automatic, state);
//! assert_eq!(bundle.label, "Bullish");
//! assert_eq!(bundle.css_variables.accent_color, "#34d399");
//! ```
//!
//! ## Design Notes
//!
//! The lookup tables are exhaustive `match` expressions rather than keyed
//! maps. Every `(family, state)` pair is guaranteed a fully-populated row
//! at compile time; there is no runtime miss path and no fallback bundle.

mod bundle;
mod mood;
mod palette;
mod snapshot;

pub use bundle::ThemeBundle;
pub use mood::{MoodState, ParseTokenError};
pub use palette::{
    CssVariables, DisplayMode, PaletteFamily, VAR_ACCENT, VAR_GLOW, VAR_GRADIENT_FROM,
    VAR_GRADIENT_TO,
};
pub use snapshot::SentimentSnapshot;
