// SPDX-License-Identifier: MPL-2.0
use library_admin::config::{self, Config};
use library_admin::debounce::debounce_with_clock;
use library_admin::timing::ManualClock;
use library_admin::ui::notifications::{Admission, Manager, Phase, Severity, ToastRequest};
use library_admin::ui::theming::ThemeMode;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

fn messages(manager: &Manager<ManualClock>) -> Vec<String> {
    manager.visible().map(|t| t.message().to_string()).collect()
}

#[test]
fn burst_of_toasts_is_shown_three_at_a_time() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());

    for name in ["a", "b", "c", "d", "e"] {
        manager.notify(ToastRequest::info(name).duration_ms(1_000));
    }
    assert_eq!(messages(&manager), ["a", "b", "c"]);
    assert_eq!(manager.queued_count(), 2);

    clock.advance_ms(10);
    manager.tick();
    assert!(manager.visible().all(|t| t.phase() == Phase::Shown));

    // Display time plus exit animation.
    clock.advance_ms(1_390);
    manager.tick();
    assert_eq!(messages(&manager), ["d", "e"]);
    assert_eq!(manager.queued_count(), 0);

    clock.advance_ms(1_400);
    manager.tick();
    assert!(!manager.has_notifications());
    assert!(manager.has_surface());
}

#[test]
fn dismissing_frees_a_slot_for_the_oldest_queued_request() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());

    let first = manager.notify(ToastRequest::error("first"));
    manager.notify(ToastRequest::warning("second"));
    manager.notify(ToastRequest::success("third"));
    let fourth = manager.notify(ToastRequest::info("fourth"));
    assert!(matches!(fourth, Admission::Queued { position: 0, .. }));

    assert!(manager.dismiss(first.id()));
    assert_eq!(messages(&manager), ["second", "third", "fourth"]);

    let severities: Vec<_> = manager.visible().map(|t| t.severity()).collect();
    assert_eq!(
        severities,
        [Severity::Warning, Severity::Success, Severity::Info]
    );
}

#[test]
fn debounced_save_fires_once_after_quiet_period() {
    let clock = ManualClock::new();
    let saved = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&saved);
    let mut save = debounce_with_clock(
        move |value: &'static str| sink.borrow_mut().push(value),
        Duration::from_millis(300),
        clock.clone(),
    );

    save.call("E");
    clock.advance_ms(200);
    save.call("Em");
    clock.advance_ms(200);
    save.call("Emma");
    clock.advance_ms(299);
    assert!(!save.poll());

    clock.advance_ms(1);
    assert!(save.poll());
    assert_eq!(*saved.borrow(), ["Emma"]);
}

#[test]
fn settings_round_trip_through_toml() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Light;
    settings.api.base_url = "http://library.test/".to_string();
    config::save_to_path(&settings, &path).expect("write settings");

    let loaded = config::load_from_path(&path).expect("read settings");
    assert_eq!(loaded, settings);
}

#[test]
fn broken_settings_fall_back_with_warning() {
    let dir = tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
