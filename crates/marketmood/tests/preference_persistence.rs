//! File-backed preference behavior across simulated sessions.

use marketmood::{
    DisplayMode, FileBackend, MoodEngine, PreferenceStore, RecordingTarget,
};

#[test]
fn display_mode_round_trips_through_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marketmood/prefs.json");

    let mut store = PreferenceStore::load(FileBackend::new(&path));
    assert_eq!(store.current(), DisplayMode::Automatic);
    store.set(DisplayMode::Dark);

    // Fresh session against the same file.
    let store = PreferenceStore::load(FileBackend::new(&path));
    assert_eq!(store.current(), DisplayMode::Dark);
}

#[test]
fn engine_restart_picks_up_persisted_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut engine = MoodEngine::new(FileBackend::new(&path), RecordingTarget::new());
    engine.set_display_mode(DisplayMode::Light);
    drop(engine);

    let engine = MoodEngine::new(FileBackend::new(&path), RecordingTarget::new());
    assert_eq!(engine.display_mode(), DisplayMode::Light);
    assert_eq!(engine.target().dark_mode, Some(false));
}

#[test]
fn corrupt_preference_file_degrades_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = PreferenceStore::load(FileBackend::new(&path));
    assert_eq!(store.current(), DisplayMode::Automatic);
}

#[test]
fn persisted_document_uses_lowercase_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut store = PreferenceStore::load(FileBackend::new(&path));
    store.set(DisplayMode::Automatic);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"automatic\""));
    assert!(raw.contains("marketmood.display_mode"));
}
