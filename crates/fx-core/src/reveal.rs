use fnv::FnvHashSet;

/// Remembers which elements already had their initial reveal, so a visibility
/// report that arrives twice for the same element starts only one transition.
#[derive(Debug, Default)]
pub struct RevealGate {
    revealed: FnvHashSet<u32>,
}

impl RevealGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time `key` is admitted, `false` ever after.
    pub fn admit(&mut self, key: u32) -> bool {
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
