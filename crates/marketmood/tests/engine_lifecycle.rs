//! End-to-end engine scenarios: snapshot flow, mode switches, and the
//! documented stale-variable behavior.

use marketmood::{
    CssVariables, DisplayMode, MemoryBackend, MoodEngine, MoodState, RecordingTarget,
    SentimentSnapshot,
};

fn fresh_engine() -> MoodEngine<MemoryBackend, RecordingTarget> {
    MoodEngine::new(MemoryBackend::new(), RecordingTarget::new())
}

#[test]
fn automatic_mode_tracks_mood_through_snapshots() {
    let mut engine = fresh_engine();

    engine.observe(SentimentSnapshot::new(4.0, 2.0, 8.0, 1.0));
    assert_eq!(engine.mood(), MoodState::Neutral);
    assert_eq!(
        engine.target().css_variables,
        Some(CssVariables::for_mood(MoodState::Neutral))
    );

    engine.observe(SentimentSnapshot::new(-38.0, -30.0, -45.0, -40.0));
    assert_eq!(engine.mood(), MoodState::Bearish);
    assert_eq!(
        engine.target().css_variables,
        Some(CssVariables::for_mood(MoodState::Bearish))
    );
    assert_eq!(engine.target().variable_pushes, 2);
}

#[test]
fn extreme_score_resolves_extreme_bundle_in_any_mode() {
    for mode in [
        DisplayMode::Light,
        DisplayMode::Dark,
        DisplayMode::Automatic,
    ] {
        let mut engine = fresh_engine();
        engine.set_display_mode(mode);
        engine.observe(SentimentSnapshot::new(-60.0, -70.0, -55.0, -62.0));

        assert_eq!(engine.mood(), MoodState::Extreme);
        assert_eq!(engine.theme().label, "Extreme");
    }
}

#[test]
fn dark_flag_follows_effective_mode_for_all_moods() {
    let scores = [0.0, -30.0, 30.0, 80.0];
    for score in scores {
        for (mode, expected) in [
            (DisplayMode::Light, false),
            (DisplayMode::Dark, true),
            (DisplayMode::Automatic, true),
        ] {
            let mut engine = fresh_engine();
            engine.observe(SentimentSnapshot::new(score, score, score, score));
            engine.set_display_mode(mode);
            assert_eq!(engine.target().dark_mode, Some(expected));
        }
    }
}

#[test]
fn switching_automatic_to_light_transitions_dark_flag() {
    let mut engine = fresh_engine();
    engine.observe(SentimentSnapshot::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(engine.target().dark_mode, Some(true));

    engine.set_display_mode(DisplayMode::Light);
    assert_eq!(engine.target().dark_mode, Some(false));
}

// Documented behavior, not an accident: leaving automatic mode does not
// clear previously injected custom properties. Toggling automatic off and
// back on without a new snapshot re-injects from the retained snapshot;
// the values in between are the stale ones from the last injection.
#[test]
fn stale_variables_persist_across_mode_toggle() {
    let mut engine = fresh_engine();
    engine.observe(SentimentSnapshot::new(34.0, 30.0, 40.0, 32.0));
    let bullish_vars = CssVariables::for_mood(MoodState::Bullish);
    assert_eq!(engine.target().css_variables, Some(bullish_vars));

    // Leaving automatic mode leaves the stops untouched.
    engine.set_display_mode(DisplayMode::Light);
    assert_eq!(engine.target().css_variables, Some(bullish_vars));

    // Coming back re-injects from the retained snapshot.
    let pushes_before = engine.target().variable_pushes;
    engine.set_display_mode(DisplayMode::Automatic);
    assert_eq!(engine.target().css_variables, Some(bullish_vars));
    assert_eq!(engine.target().variable_pushes, pushes_before + 1);
}

#[test]
fn theme_bundle_reflects_mode_and_mood_together() {
    let mut engine = fresh_engine();
    engine.observe(SentimentSnapshot::new(34.0, 30.0, 40.0, 32.0));

    let auto_bundle = engine.theme();
    assert_eq!(auto_bundle.emoji, "📈");
    assert_eq!(auto_bundle.label, "Bullish");

    engine.set_display_mode(DisplayMode::Dark);
    // Automatic and explicit dark resolve identical bundles.
    assert_eq!(engine.theme(), auto_bundle);

    engine.set_display_mode(DisplayMode::Light);
    assert_ne!(engine.theme().background_class, auto_bundle.background_class);
    assert_eq!(engine.theme().label, "Bullish");
}
