//! # Marketmood - Sentiment Dashboard Theming Core
//!
//! Marketmood is the mood/theme core of a financial-sentiment dashboard:
//! it classifies a composite sentiment score into a discrete mood state,
//! resolves a complete visual theme for that state and the user's
//! display-mode preference, persists the preference, and keeps a live
//! document in sync as either input changes.
//!
//! The pure layer (classification, palette tables, bundle resolution)
//! lives in `marketmood-theme` and is re-exported here. This crate adds
//! the stateful pieces:
//!
//! - [`PreferenceStore`] + [`PreferenceBackend`]: the persisted
//!   display-mode preference over a host-supplied key/value surface
//! - [`RenderTarget`]: the two-method seam the engine applies derived
//!   state through (dark-mode flag, `--mood-*` custom properties)
//! - [`MoodEngine`]: single owner of the preference and the latest
//!   snapshot; re-applies after every change
//!
//! ## Quick Start
//!
//! ```rust
//! use marketmood::{
//!     DisplayMode, MemoryBackend, MoodEngine, MoodState, RecordingTarget,
//!     SentimentSnapshot,
//! };
//!
//! let mut engine = MoodEngine::new(MemoryBackend::new(), RecordingTarget::new());
//!
//! engine.observe(SentimentSnapshot::new(34.0, 40.0, 28.0, 31.0));
//! assert_eq!(engine.mood(), MoodState::Bullish);
//! assert_eq!(engine.theme().emoji, "📈");
//!
//! engine.set_display_mode(DisplayMode::Light);
//! assert_eq!(engine.target().dark_mode, Some(false));
//! ```
//!
//! A desktop or web shell supplies real implementations of
//! [`PreferenceBackend`] (e.g. [`FileBackend`]) and [`RenderTarget`]
//! (its document root); the view layer reads [`MoodEngine::theme`] for
//! class names and the emoji/label pair.

mod document;
mod engine;
mod preference;

pub use document::{RecordingTarget, RenderTarget};
pub use engine::MoodEngine;
pub use preference::{FileBackend, MemoryBackend, PreferenceBackend, PreferenceError, PreferenceStore};

// Re-export the pure layer so most consumers need a single dependency.
pub use marketmood_theme::{
    CssVariables, DisplayMode, MoodState, PaletteFamily, ParseTokenError, SentimentSnapshot,
    ThemeBundle, VAR_ACCENT, VAR_GLOW, VAR_GRADIENT_FROM, VAR_GRADIENT_TO,
};
