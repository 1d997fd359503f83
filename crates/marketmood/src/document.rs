//! Render target abstraction for runtime document sync.
//!
//! The engine never touches a DOM or a window handle directly. Everything
//! it pushes onto the live document goes through [`RenderTarget`], a
//! two-method seam: a dark-mode flag and the four `--mood-*` custom
//! properties. A UI runtime implements this against its document root;
//! tests use [`RecordingTarget`].
//!
//! Variables are additive by contract: an implementation must leave
//! previously-set custom properties in place when `set_css_variables` is
//! not called. The engine relies on this: switching out of automatic
//! mode leaves the last injected stops untouched rather than clearing
//! them.

use marketmood_theme::CssVariables;

/// A live document the engine applies derived visual state to.
pub trait RenderTarget {
    /// Marks the document dark-mode-enabled or -disabled.
    fn set_dark_mode(&mut self, enabled: bool);

    /// Pushes the four mood custom properties onto the document root,
    /// replacing any previously injected values.
    fn set_css_variables(&mut self, variables: &CssVariables);
}

/// Render target that records what was applied, for tests and headless
/// runs.
///
/// `css_variables` holds the last injected stops and survives calls that
/// do not inject, mirroring how custom properties behave on a real
/// document root.
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    /// Last dark-mode flag applied, `None` before the first apply.
    pub dark_mode: Option<bool>,
    /// Last injected custom-property values, `None` if never injected.
    pub css_variables: Option<CssVariables>,
    /// Number of times variables were injected.
    pub variable_pushes: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for RecordingTarget {
    fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = Some(enabled);
    }

    fn set_css_variables(&mut self, variables: &CssVariables) {
        self.css_variables = Some(*variables);
        self.variable_pushes += 1;
    }
}
