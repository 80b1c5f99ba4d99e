use crate::models::Turn;

/// The canonical, ordered turn sequence for one scope. Display convention
/// is newest-first: index 0 is the most recent turn. Turns are never
/// mutated in place; every update is a prepend or a whole-sequence swap.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    turns: Vec<Turn>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a turn at the newest-first position (the front).
    pub fn append(&mut self, turn: Turn) {
        self.turns.insert(0, turn);
    }

    /// Atomically substitute the entire sequence, as returned by the
    /// backend. Ordering of the input is preserved verbatim.
    pub fn replace_all(&mut self, turns: Vec<Turn>) {
        self.turns = turns;
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
