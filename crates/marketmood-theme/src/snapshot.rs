//! Composite sentiment snapshots.
//!
//! A snapshot is the read-only input to mood classification. It is produced
//! by the dashboard's data-fetching layer on its own cadence; this crate
//! only ever reads the `overall` score. Snapshots are immutable once built
//! and the engine retains only the most recent one.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::mood::MoodState;

/// One observation of composite market sentiment.
///
/// All four scores share the same nominal −100..=100 scale, but nothing
/// upstream clamps them; [`MoodState::classify`] is total regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    /// The composite score mood classification runs on.
    pub overall: f64,
    /// Equity-market component of the composite.
    pub stocks: f64,
    /// News-flow component of the composite.
    pub news: f64,
    /// Social-media component of the composite.
    pub social: f64,
    /// When the upstream source observed these values.
    #[serde(with = "time::serde::rfc3339")]
    pub observed_at: OffsetDateTime,
}

impl SentimentSnapshot {
    /// Builds a snapshot observed now.
    pub fn new(overall: f64, stocks: f64, news: f64, social: f64) -> Self {
        Self::at(overall, stocks, news, social, OffsetDateTime::now_utc())
    }

    /// Builds a snapshot with an explicit observation time.
    pub fn at(
        overall: f64,
        stocks: f64,
        news: f64,
        social: f64,
        observed_at: OffsetDateTime,
    ) -> Self {
        Self {
            overall,
            stocks,
            news,
            social,
            observed_at,
        }
    }

    /// Classifies the composite score of this snapshot.
    pub fn mood(&self) -> MoodState {
        MoodState::classify(self.overall)
    }
}
