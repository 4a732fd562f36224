use std::cell::Cell;
use std::rc::Rc;

use crate::direction::Direction;

/// Latest requested heading, shared between event listeners and the loop.
///
/// Single slot, last write wins: two key presses between frames leave only
/// the second one.
#[derive(Debug, Clone, Default)]
pub struct InputSlot(Rc<Cell<Option<Direction>>>);

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self, dir: Direction) {
        self.0.set(Some(dir));
    }

    /// Consumes the pending request, if any.
    pub fn take(&self) -> Option<Direction> {
        self.0.take()
    }
}
