use std::cell::Cell;

/// Trailing-edge debounce keyed by tickets.
///
/// Each event calls [`Debounce::arm`] and schedules a timer carrying the
/// ticket. When a timer fires, [`Debounce::fire`] lets it through only if no
/// newer event armed the gate in the meantime, so a burst collapses into one
/// call after the burst goes quiet.
#[derive(Debug, Default)]
pub struct Debounce {
    latest: Cell<u64>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn fire(&self, ticket: u64) -> bool {
        ticket == self.latest.get()
    }
}
