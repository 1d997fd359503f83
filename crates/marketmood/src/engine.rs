//! The mood engine: single owner of preference and snapshot state.
//!
//! [`MoodEngine`] ties the pure layer to the runtime. It owns the
//! preference store, the latest sentiment snapshot, and the render
//! target, and it re-applies derived state to the target after every
//! change to either input. Consumers read [`MoodEngine::theme`] for the
//! current bundle; they never compute theme state themselves.
//!
//! The engine is single-threaded by design. Both inputs are single-writer
//! values, so applying after each mutation is enough to guarantee the
//! target always reflects the values current at the time of the call. A
//! multi-threaded port must keep one owner serializing writes to preserve
//! that.
//!
//! # Apply rules
//!
//! - The dark-mode flag follows the effective palette family: set for
//!   `Dark` and `Automatic`, cleared for `Light`.
//! - The `--mood-*` custom properties are injected only when the mode is
//!   `Automatic` and a snapshot has arrived. In any other case they are
//!   left untouched, so stops injected earlier can outlive a mode switch
//!   (see `stale_variables_persist_across_mode_toggle` in the crate's
//!   integration tests).

use tracing::debug;

use marketmood_theme::{
    CssVariables, DisplayMode, MoodState, SentimentSnapshot, ThemeBundle,
};

use crate::document::RenderTarget;
use crate::preference::{PreferenceBackend, PreferenceStore};

/// Owns the display-mode preference and the latest snapshot, and keeps a
/// render target in sync with both.
#[derive(Debug)]
pub struct MoodEngine<B: PreferenceBackend, T: RenderTarget> {
    store: PreferenceStore<B>,
    target: T,
    latest: Option<SentimentSnapshot>,
}

impl<B: PreferenceBackend, T: RenderTarget> MoodEngine<B, T> {
    /// Creates an engine, loading the persisted display mode and applying
    /// the initial state to the target.
    ///
    /// No snapshot has arrived yet, so only the dark-mode flag is
    /// applied; variable injection waits for the first
    /// [`observe`](Self::observe) in automatic mode.
    pub fn new(backend: B, target: T) -> Self {
        let mut engine = Self {
            store: PreferenceStore::load(backend),
            target,
            latest: None,
        };
        engine.apply();
        engine
    }

    /// Records a new sentiment snapshot and re-applies derived state.
    ///
    /// Only the latest snapshot is retained.
    pub fn observe(&mut self, snapshot: SentimentSnapshot) {
        debug!(overall = snapshot.overall, mood = %snapshot.mood(), "snapshot observed");
        self.latest = Some(snapshot);
        self.apply();
    }

    /// Updates the display-mode preference, persists it, and re-applies
    /// derived state.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.store.set(mode);
        self.apply();
    }

    /// The current display-mode preference.
    pub fn display_mode(&self) -> DisplayMode {
        self.store.current()
    }

    /// The current mood state: the latest snapshot's classification, or
    /// `Neutral` before the first snapshot arrives.
    pub fn mood(&self) -> MoodState {
        self.latest
            .as_ref()
            .map(SentimentSnapshot::mood)
            .unwrap_or(MoodState::Neutral)
    }

    /// The latest snapshot, if one has arrived.
    pub fn snapshot(&self) -> Option<&SentimentSnapshot> {
        self.latest.as_ref()
    }

    /// Resolves the theme bundle for the current mode and mood.
    pub fn theme(&self) -> ThemeBundle {
        ThemeBundle::resolve(self.display_mode(), self.mood())
    }

    /// Read access to the render target, mainly for tests and headless
    /// inspection.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Consumes the engine, returning backend and target. Used by tests
    /// that simulate a session restart.
    pub fn into_parts(self) -> (B, T) {
        (self.store.into_backend(), self.target)
    }

    /// Pushes derived state onto the target for the values current now.
    fn apply(&mut self) {
        let mode = self.display_mode();
        self.target.set_dark_mode(mode.is_dark());

        // Variables follow the snapshot, not the default mood: before the
        // first observation there is nothing to inject, and outside
        // automatic mode previously injected values are left in place.
        if mode == DisplayMode::Automatic {
            if let Some(snapshot) = &self.latest {
                let vars = CssVariables::for_mood(snapshot.mood());
                self.target.set_css_variables(&vars);
            }
        }
    }
}
