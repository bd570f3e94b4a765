use super::*;

#[test]
fn step_budget_follows_fps() {
    assert!((FrameClock::new(50).step_ms() - 20.0).abs() < 1e-9);
    assert!((FrameClock::new(0).step_ms() - 1000.0).abs() < 1e-9);
}

#[test]
fn step_is_due_only_past_the_budget() {
    let mut c = FrameClock::new(50);
    assert!(!c.advance(10.0));
    assert!(!c.advance(10.0));
    // Exactly one budget is not enough.
    assert!((c.accumulated_ms() - 20.0).abs() < 1e-9);
    assert!(c.advance(1.0));
    assert!((c.accumulated_ms() - 1.0).abs() < 1e-9);
}

#[test]
fn long_gaps_release_one_step_per_call() {
    let mut c = FrameClock::new(50);
    assert!(c.advance(70.0));
    assert!(c.advance(0.0));
    assert!(c.advance(0.0));
    assert!(!c.advance(0.0));
}

#[test]
fn bad_deltas_are_ignored() {
    let mut c = FrameClock::new(60);
    assert!(!c.advance(f64::NAN));
    assert!(!c.advance(-5.0));
    assert_eq!(c.accumulated_ms(), 0.0);
}
