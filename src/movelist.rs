//! A destination list that avoids heap allocations.

use crate::square::Square;

/// A chariot or cannon in the open reaches at most 8 + 9 squares; nothing
/// else comes close.
pub const MAX_DESTINATIONS: usize = 17;

/// Legal destinations of one piece, in generation order.
#[derive(Debug, Clone)]
pub struct MoveList {
    squares: [Square; MAX_DESTINATIONS],
    count: usize,
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            squares: [Square::ORIGIN; MAX_DESTINATIONS],
            count: 0,
        }
    }

    pub fn add(&mut self, sq: Square) {
        debug_assert!(self.count < MAX_DESTINATIONS, "destination list overflow");
        if self.count < MAX_DESTINATIONS {
            self.squares[self.count] = sq;
            self.count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.squares[0..self.count]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
