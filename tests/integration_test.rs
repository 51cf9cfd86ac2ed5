use quickbin::{BinAction, ClickDisambiguator, ClickEvent, Settings};
use std::time::{Duration, Instant};
use tempfile::TempDir;

const WINDOW: Duration = Duration::from_millis(200);

#[test]
fn test_lone_single_click_opens_after_the_window() {
    let mut clicks = ClickDisambiguator::new(WINDOW);
    let t0 = Instant::now();

    assert_eq!(clicks.on_event(ClickEvent::Single, t0), None);

    // 250ms later: exactly one open action, nothing else pending.
    let mut opens = 0;
    let mut empties = 0;
    match clicks.fire_due(t0 + Duration::from_millis(250)) {
        Some(BinAction::Open) => opens += 1,
        Some(BinAction::Empty) => empties += 1,
        None => {}
    }
    assert_eq!(opens, 1);
    assert_eq!(empties, 0);
    assert_eq!(clicks.fire_due(t0 + Duration::from_millis(500)), None);
}

#[test]
fn test_double_click_within_window_empties_without_opening() {
    let mut clicks = ClickDisambiguator::new(WINDOW);
    let t0 = Instant::now();

    assert_eq!(clicks.on_event(ClickEvent::Single, t0), None);
    assert_eq!(
        clicks.on_event(ClickEvent::Double, t0 + Duration::from_millis(50)),
        Some(BinAction::Empty)
    );

    // The single-click deadline was cancelled; no open ever fires.
    assert_eq!(clicks.fire_due(t0 + Duration::from_millis(250)), None);
    assert_eq!(clicks.fire_due(t0 + Duration::from_millis(1000)), None);
}

#[test]
fn test_settings_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.empty_on_double_click = false;
    settings.start_at_boot = true;
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_settings_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.json");

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.empty_on_double_click);
    assert!(!settings.start_at_boot);
    assert!(settings.empty_flags.no_confirmation);
    assert!(settings.empty_flags.no_sound);
    assert!(settings.empty_flags.no_progress_ui);
}

#[test]
fn test_save_creates_the_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("settings.json");

    Settings::default().save(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_partial_settings_file_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "start_at_boot": true }"#).unwrap();

    let settings = Settings::load(&path).unwrap();
    assert!(settings.start_at_boot);
    assert!(settings.empty_on_double_click);
    assert_eq!(settings.empty_flags, Settings::default().empty_flags);
}

#[test]
fn test_corrupt_settings_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(Settings::load(&path).is_err());
}
