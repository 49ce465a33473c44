// Rate-limiting gates: coalescing, trailing edges, cancellation

use marginalia_wasm::timing::{Debounce, Throttle};

#[test]
fn test_event_burst_collapses_to_one_recompute() {
    // Ten resize events inside one 60ms window arm exactly one timer
    // and produce exactly one execution.
    let mut throttle = Throttle::new(60.0);
    let mut armed = Vec::new();
    for i in 0..10 {
        if let Some(deadline) = throttle.call(i as f64 * 6.0) {
            armed.push(deadline);
        }
    }
    assert_eq!(armed, vec![60.0]);

    assert!(throttle.fire());
    assert!(!throttle.fire(), "second fire must be a no-op");
}

#[test]
fn test_throttle_keeps_firing_during_stream() {
    // A steady scroll stream recomputes once per interval, during the
    // stream rather than only after it ends.
    let mut throttle = Throttle::new(60.0);
    let mut fired_at = Vec::new();
    let mut deadline: Option<f64> = None;

    let mut t = 0.0;
    while t <= 250.0 {
        if let Some(d) = deadline {
            if t >= d && throttle.fire() {
                fired_at.push(d);
                deadline = None;
            }
        }
        if let Some(d) = throttle.call(t) {
            deadline = Some(d);
        }
        t += 10.0;
    }

    assert_eq!(fired_at, vec![60.0, 120.0, 180.0, 240.0]);
}

#[test]
fn test_debounce_waits_for_settle() {
    let mut debounce = Debounce::new(80.0);
    debounce.call(0.0);
    debounce.call(30.0);
    let deadline = debounce.call(70.0);
    assert_eq!(deadline, 150.0);

    // Timers armed for the earlier calls are stale.
    assert!(!debounce.fire(80.0));
    assert!(!debounce.fire(110.0));
    assert!(debounce.fire(150.0));
}

#[test]
fn test_gates_cancel_cleanly() {
    let mut throttle = Throttle::new(60.0);
    let mut debounce = Debounce::new(60.0);

    throttle.call(0.0);
    debounce.call(0.0);
    throttle.cancel();
    debounce.cancel();

    assert!(!throttle.fire());
    assert!(!debounce.fire(60.0));
    assert!(!throttle.is_pending());
    assert!(!debounce.is_pending());
}

#[test]
fn test_gates_are_reusable_after_cancel() {
    let mut throttle = Throttle::new(60.0);
    throttle.call(0.0);
    throttle.cancel();

    assert_eq!(throttle.call(100.0), Some(160.0));
    assert!(throttle.fire());
}
