//! Integration tests for the configuration-to-countdown flow

use crossterm::event::{KeyCode, KeyEvent};
use tickdown::app::{AppState, ConfigAction, ConfigScreen, CountdownScreen, StateManager};
use tickdown::timer::Phase;

#[test]
fn test_default_config_starts_one_minute_countdown() {
    let mut config = ConfigScreen::new();
    assert_eq!(config.total_seconds(), 60);

    let action = config.handle_key_event(KeyEvent::from(KeyCode::Enter));
    let total = match action {
        Some(ConfigAction::Start(total)) => total,
        other => panic!("expected start action, got {:?}", other),
    };

    let countdown = CountdownScreen::new(total);
    assert_eq!(countdown.remaining_seconds(), 60);
    assert_eq!(countdown.display(), "00:01:00");
}

#[test]
fn test_zero_duration_warns_and_stays_on_config() {
    let mut config = ConfigScreen::new();

    // Zero out the default minute: move to the minutes field, step down
    config.handle_key_event(KeyEvent::from(KeyCode::Right));
    config.handle_key_event(KeyEvent::from(KeyCode::Down));
    assert_eq!(config.total_seconds(), 0);

    let action = config.handle_key_event(KeyEvent::from(KeyCode::Enter));
    assert!(action.is_none());
    assert!(config.has_validation_error());

    // Fully recoverable: dismiss, fix the input, confirm again
    config.handle_key_event(KeyEvent::from(KeyCode::Esc));
    assert!(!config.has_validation_error());
    config.handle_key_event(KeyEvent::from(KeyCode::Up));
    let action = config.handle_key_event(KeyEvent::from(KeyCode::Enter));
    assert_eq!(action, Some(ConfigAction::Start(60)));
}

#[test]
fn test_sixty_ticks_expire_exactly_on_the_sixtieth() {
    let mut countdown = CountdownScreen::new(60);

    for i in 1..60 {
        assert_eq!(countdown.tick(), Phase::Running, "tick {} should run", i);
    }
    assert_eq!(countdown.tick(), Phase::Expired);
    assert_eq!(countdown.remaining_seconds(), 0);
}

#[test]
fn test_manual_close_mid_countdown_skips_the_notice() {
    let mut countdown = CountdownScreen::new(60);
    for _ in 0..23 {
        countdown.tick();
    }
    assert_eq!(countdown.remaining_seconds(), 37);

    countdown.close();
    assert_eq!(countdown.phase(), Phase::Terminated);

    // No further decrements after the close cancelled the tick
    countdown.tick();
    assert_eq!(countdown.remaining_seconds(), 37);
    assert_eq!(countdown.phase(), Phase::Terminated);
}

#[test]
fn test_expiry_terminates_the_process_exactly_once() {
    let mut state_manager = StateManager::new();
    state_manager.transition_to(AppState::Countdown);
    state_manager.transition_to(AppState::Finished);

    state_manager.terminate(0);
    assert!(state_manager.should_quit());
    assert_eq!(state_manager.exit_code(), 0);

    // A racing second termination must not override the first
    state_manager.terminate(1);
    assert_eq!(state_manager.exit_code(), 0);
}
