//! Mood classification from composite sentiment scores.
//!
//! A sentiment score is a single finite number, typically in the −100..=100
//! range but not clamped upstream. [`MoodState::classify`] partitions the
//! whole real line into four contiguous bands:
//!
//! | Score            | State     |
//! |------------------|-----------|
//! | `>= 51`          | `Extreme` |
//! | `11..=50`        | `Bullish` |
//! | `-10..=10`       | `Neutral` |
//! | `-50..=-11`      | `Bearish` |
//! | `<= -51`         | `Extreme` |
//!
//! The band edges are part of the public contract: 50 is still `Bullish`
//! and −50 is still `Bearish`. The extreme comparisons are `>= 51` and
//! `<= -51`, not `> 50` / `< -50`, so fractional scores between 50 and 51
//! stay in the bullish band. Callers that round scores before display must
//! classify the raw value, not the rounded one.
//!
//! Classification is a pure function. Emoji and label lookups are keyed by
//! state alone and do not vary with the palette family.
//!
//! # Example
//!
//! ```rust
//! use marketmood_theme::MoodState;
//!
//! assert_eq!(MoodState::classify(50.0), MoodState::Bullish);
//! assert_eq!(MoodState::classify(51.0), MoodState::Extreme);
//! assert_eq!(MoodState::classify(-3.2), MoodState::Neutral);
//! assert_eq!(MoodState::classify(-3.2).label(), "Neutral");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A discrete market mood derived from a composite sentiment score.
///
/// Mood states are always derived via [`MoodState::classify`]; nothing in
/// the dashboard sets one directly. Every finite score maps to exactly one
/// state, so downstream lookups (palettes, emoji, CSS variables) can match
/// exhaustively without a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodState {
    /// Sentiment close to flat: score in `-10..=10`.
    Neutral,
    /// Negative sentiment: score in `-50..=-11`.
    Bearish,
    /// Positive sentiment: score in `11..=50`.
    Bullish,
    /// Strong conviction in either direction: score `>= 51` or `<= -51`.
    Extreme,
}

impl MoodState {
    /// All states, in a fixed display order.
    ///
    /// Useful for iterating palette tables in tests and for rendering
    /// legend rows consistently.
    pub const ALL: [MoodState; 4] = [
        MoodState::Extreme,
        MoodState::Bearish,
        MoodState::Neutral,
        MoodState::Bullish,
    ];

    /// Classifies a sentiment score into its mood band.
    ///
    /// First-match-wins over ordered bands; see the module docs for the
    /// full table. Total over all finite scores, no clamping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketmood_theme::MoodState;
    ///
    /// assert_eq!(MoodState::classify(0.0), MoodState::Neutral);
    /// assert_eq!(MoodState::classify(72.0), MoodState::Extreme);
    /// assert_eq!(MoodState::classify(-11.0), MoodState::Bearish);
    /// ```
    pub fn classify(score: f64) -> MoodState {
        if score >= 51.0 {
            MoodState::Extreme
        } else if score <= -51.0 {
            MoodState::Extreme
        } else if score >= 11.0 {
            MoodState::Bullish
        } else if score <= -11.0 {
            MoodState::Bearish
        } else {
            MoodState::Neutral
        }
    }

    /// The display emoji for this state.
    ///
    /// Palette-independent: the same emoji is shown in light and dark mode.
    pub fn emoji(self) -> &'static str {
        match self {
            MoodState::Neutral => "😐",
            MoodState::Bearish => "📉",
            MoodState::Bullish => "📈",
            MoodState::Extreme => "⚡",
        }
    }

    /// The human-readable label for this state.
    pub fn label(self) -> &'static str {
        match self {
            MoodState::Neutral => "Neutral",
            MoodState::Bearish => "Bearish",
            MoodState::Bullish => "Bullish",
            MoodState::Extreme => "Extreme",
        }
    }

    /// The lowercase token used in serialized form and CSS hooks.
    pub fn as_str(self) -> &'static str {
        match self {
            MoodState::Neutral => "neutral",
            MoodState::Bearish => "bearish",
            MoodState::Bullish => "bullish",
            MoodState::Extreme => "extreme",
        }
    }
}

impl fmt::Display for MoodState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized mood or mode token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    kind: &'static str,
    token: String,
}

impl ParseTokenError {
    pub(crate) fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized {} token: {:?}", self.kind, self.token)
    }
}

impl std::error::Error for ParseTokenError {}

impl FromStr for MoodState {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(MoodState::Neutral),
            "bearish" => Ok(MoodState::Bearish),
            "bullish" => Ok(MoodState::Bullish),
            "extreme" => Ok(MoodState::Extreme),
            other => Err(ParseTokenError::new("mood state", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_neutral_band() {
        assert_eq!(MoodState::classify(0.0), MoodState::Neutral);
        assert_eq!(MoodState::classify(10.0), MoodState::Neutral);
        assert_eq!(MoodState::classify(-10.0), MoodState::Neutral);
        assert_eq!(MoodState::classify(10.9), MoodState::Neutral);
        assert_eq!(MoodState::classify(-10.9), MoodState::Neutral);
    }

    #[test]
    fn test_classify_bullish_band() {
        assert_eq!(MoodState::classify(11.0), MoodState::Bullish);
        assert_eq!(MoodState::classify(32.0), MoodState::Bullish);
        assert_eq!(MoodState::classify(50.0), MoodState::Bullish);
        // 50 < score < 51 never reaches the extreme comparison
        assert_eq!(MoodState::classify(50.5), MoodState::Bullish);
    }

    #[test]
    fn test_classify_bearish_band() {
        assert_eq!(MoodState::classify(-11.0), MoodState::Bearish);
        assert_eq!(MoodState::classify(-32.0), MoodState::Bearish);
        assert_eq!(MoodState::classify(-50.0), MoodState::Bearish);
        assert_eq!(MoodState::classify(-50.5), MoodState::Bearish);
    }

    #[test]
    fn test_classify_extreme_band() {
        assert_eq!(MoodState::classify(51.0), MoodState::Extreme);
        assert_eq!(MoodState::classify(-51.0), MoodState::Extreme);
        assert_eq!(MoodState::classify(72.0), MoodState::Extreme);
        assert_eq!(MoodState::classify(-60.0), MoodState::Extreme);
        assert_eq!(MoodState::classify(1000.0), MoodState::Extreme);
    }

    #[test]
    fn test_labels_and_emoji_cover_all_states() {
        for state in MoodState::ALL {
            assert!(!state.label().is_empty());
            assert!(!state.emoji().is_empty());
        }
        assert_eq!(MoodState::Bullish.emoji(), "📈");
        assert_eq!(MoodState::Extreme.label(), "Extreme");
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for state in MoodState::ALL {
            let parsed: MoodState = state.to_string().parse().unwrap();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_token() {
        let err = "euphoric".parse::<MoodState>().unwrap_err();
        assert!(err.to_string().contains("euphoric"));
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&MoodState::Bearish).unwrap();
        assert_eq!(json, "\"bearish\"");
        let back: MoodState = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(back, MoodState::Extreme);
    }

    proptest! {
        // Totality: every finite score lands in exactly one band, and the
        // band agrees with the documented edges.
        #[test]
        fn prop_classify_is_total_and_banded(score in -500.0f64..500.0) {
            let state = MoodState::classify(score);
            let expected = if score >= 51.0 || score <= -51.0 {
                MoodState::Extreme
            } else if score >= 11.0 {
                MoodState::Bullish
            } else if score <= -11.0 {
                MoodState::Bearish
            } else {
                MoodState::Neutral
            };
            prop_assert_eq!(state, expected);
        }

        // Classification is symmetric in band width: negating a score never
        // moves it between the neutral and extreme bands.
        #[test]
        fn prop_negation_preserves_neutral_and_extreme(score in -500.0f64..500.0) {
            let a = MoodState::classify(score);
            let b = MoodState::classify(-score);
            if a == MoodState::Neutral || a == MoodState::Extreme {
                prop_assert_eq!(a, b);
            }
        }
    }
}
