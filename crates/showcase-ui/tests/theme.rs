use showcase_test_support::fakes::FakeThemeEnvironment;
use showcase_ui::core::theme::{SyncReport, ThemeError, ThemeMode, ThemePreferenceController};

#[test]
fn stored_dark_wins_over_system_preference() {
    for system_dark in [true, false] {
        let env = FakeThemeEnvironment::new()
            .with_stored("dark")
            .with_system_dark(system_dark);
        let controller = ThemePreferenceController::initialize(env).unwrap();
        assert!(controller.is_dark());
        assert_eq!(controller.environment().system_reads(), 0);
    }
}

#[test]
fn stored_light_wins_over_dark_system() {
    let env = FakeThemeEnvironment::new()
        .with_stored("light")
        .with_system_dark(true);
    let controller = ThemePreferenceController::initialize(env).unwrap();
    assert_eq!(controller.mode(), ThemeMode::Light);
}

#[test]
fn system_preference_used_without_stored_choice() {
    let dark = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new().with_system_dark(true),
    )
    .unwrap();
    assert!(dark.is_dark());
    assert_eq!(dark.environment().system_reads(), 1);
    drop(dark);

    let light = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new().with_system_dark(false),
    )
    .unwrap();
    assert!(!light.is_dark());
}

#[test]
fn empty_stored_value_falls_back_to_system() {
    let env = FakeThemeEnvironment::new()
        .with_stored("")
        .with_system_dark(true);
    let controller = ThemePreferenceController::initialize(env).unwrap();
    assert!(controller.is_dark());
}

#[test]
fn toggle_round_trip_updates_storage_and_flag() {
    let mut controller = ThemePreferenceController::initialize(FakeThemeEnvironment::new()).unwrap();
    assert!(!controller.is_dark());

    controller.toggle();
    assert!(controller.is_dark());
    assert_eq!(controller.environment().stored(), Some("dark"));
    assert!(controller.environment().dark_flag());
    assert_eq!(controller.toggle_label(), "Switch to light mode");

    controller.toggle();
    assert!(!controller.is_dark());
    assert_eq!(controller.environment().stored(), Some("light"));
    assert!(!controller.environment().dark_flag());
    assert_eq!(controller.toggle_label(), "Switch to dark mode");

    assert_eq!(controller.environment().writes(), ["light", "dark", "light"]);
    assert_eq!(controller.environment().system_reads(), 1);
}

#[test]
fn set_dark_writes_even_when_unchanged() {
    let mut controller = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new().with_stored("dark"),
    )
    .unwrap();
    let report = controller.set_dark(true);
    assert!(report.is_complete());
    assert_eq!(controller.environment().writes(), ["dark", "dark"]);
}

#[test]
fn choice_survives_reload() {
    let mut controller = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new().with_system_dark(false),
    )
    .unwrap();
    controller.toggle();
    let reloaded_env = controller.environment().reloaded();
    drop(controller);

    let reloaded = ThemePreferenceController::initialize(reloaded_env).unwrap();
    assert!(reloaded.is_dark());
    assert!(reloaded.environment().dark_flag());
}

#[test]
fn missing_document_keeps_persisting() {
    let mut controller = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new().without_document(),
    )
    .unwrap();
    let report = controller.toggle();
    assert_eq!(
        report,
        SyncReport {
            persisted: true,
            styled: false
        }
    );
    assert!(controller.is_dark());
    assert_eq!(controller.environment().stored(), Some("dark"));
}

#[test]
fn unreadable_storage_falls_back_to_system_preference() {
    let controller = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new()
            .without_storage()
            .without_document()
            .with_system_dark(true),
    )
    .unwrap();
    assert!(controller.is_dark());
    assert!(!controller.last_sync().persisted);
    assert!(!controller.last_sync().styled);
}

#[test]
fn unreadable_system_preference_resolves_to_light() {
    let mut controller = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new().without_media_query(),
    )
    .unwrap();
    assert_eq!(controller.mode(), ThemeMode::Light);
    assert_eq!(controller.environment().system_reads(), 1);
    assert_eq!(controller.environment().stored(), Some("light"));
    assert!(!controller.environment().dark_flag());

    controller.toggle();
    assert!(controller.is_dark());
    assert_eq!(controller.environment().system_reads(), 1);
}

#[test]
fn nothing_readable_resolves_to_light() {
    let controller = ThemePreferenceController::initialize(
        FakeThemeEnvironment::new()
            .without_storage()
            .without_media_query(),
    )
    .unwrap();
    assert_eq!(controller.mode(), ThemeMode::Light);
    assert!(controller.last_sync().styled);
    assert!(!controller.last_sync().persisted);
}

#[test]
fn only_one_controller_owns_theme_state() {
    let first = ThemePreferenceController::initialize(FakeThemeEnvironment::new()).unwrap();
    let second = ThemePreferenceController::initialize(FakeThemeEnvironment::new());
    assert_eq!(second.unwrap_err(), ThemeError::AlreadyActive);
    drop(first);
    assert!(ThemePreferenceController::initialize(FakeThemeEnvironment::new()).is_ok());
}
