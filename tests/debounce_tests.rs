// Host-side tests for the ticket debounce used by the secure input ticks.

use fx_core::debounce::Debounce;

#[test]
fn burst_collapses_to_the_last_event() {
    let gate = Debounce::new();
    let tickets: Vec<u64> = (0..5).map(|_| gate.arm()).collect();
    let fired: Vec<bool> = tickets.iter().map(|t| gate.fire(*t)).collect();
    assert_eq!(fired, [false, false, false, false, true]);
}

#[test]
fn quiet_events_each_fire() {
    let gate = Debounce::new();
    let first = gate.arm();
    assert!(gate.fire(first));
    let second = gate.arm();
    assert!(gate.fire(second));
    assert!(!gate.fire(first));
}
