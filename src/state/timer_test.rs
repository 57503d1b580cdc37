use super::*;

fn run_for(countdown: &mut Countdown, secs: u32) -> u32 {
    (0..secs).filter(|_| countdown.tick()).count().try_into().unwrap()
}

// =============================================================
// Start / pause / reset
// =============================================================

#[test]
fn new_countdown_is_full_and_paused() {
    let countdown = Countdown::new(DEFAULT_TIMER_MINUTES);
    assert_eq!(countdown.remaining_secs(), 60);
    assert!(!countdown.is_running());
    assert_eq!(countdown.label(), "1:00");
    assert!((countdown.percent_left() - 100.0).abs() < 1e-9);
}

#[test]
fn ticks_while_paused_are_ignored() {
    let mut countdown = Countdown::new(1);
    assert!(!countdown.tick());
    assert_eq!(countdown.remaining_secs(), 60);
}

#[test]
fn toggle_starts_and_pauses() {
    let mut countdown = Countdown::new(1);
    countdown.toggle();
    assert!(countdown.is_running());
    run_for(&mut countdown, 5);
    countdown.toggle();
    assert!(!countdown.is_running());
    run_for(&mut countdown, 5);
    assert_eq!(countdown.label(), "0:55");
}

#[test]
fn reset_restores_length_and_pauses() {
    let mut countdown = Countdown::new(2);
    countdown.toggle();
    run_for(&mut countdown, 30);
    countdown.reset();
    assert_eq!(countdown.remaining_secs(), 120);
    assert!(!countdown.is_running());
}

// =============================================================
// Finishing
// =============================================================

#[test]
fn reaching_zero_reports_once_and_stops() {
    let mut countdown = Countdown::new(1);
    countdown.toggle();
    assert_eq!(run_for(&mut countdown, 59), 0);
    assert!(countdown.tick());
    assert!(countdown.is_finished());
    assert!(!countdown.is_running());
    assert!(!countdown.tick());
    assert_eq!(countdown.label(), "0:00");
    assert!(countdown.percent_left().abs() < 1e-9);
}

#[test]
fn finished_countdown_does_not_restart_until_reset() {
    let mut countdown = Countdown::new(1);
    countdown.toggle();
    run_for(&mut countdown, 60);
    countdown.toggle();
    assert!(!countdown.is_running());

    countdown.reset();
    countdown.toggle();
    assert!(countdown.is_running());
}

#[test]
fn zero_length_countdown_never_runs() {
    let mut countdown = Countdown::new(0);
    countdown.toggle();
    assert!(!countdown.is_running());
    assert!(countdown.percent_left().abs() < 1e-9);
}

#[test]
fn label_pads_seconds() {
    let mut countdown = Countdown::new(10);
    countdown.toggle();
    run_for(&mut countdown, 51);
    assert_eq!(countdown.label(), "9:09");
}
