//! Per-player piece queue.
//!
//! Each player's live pieces are tracked in placement order so the
//! oldest can be evicted when a fourth piece lands. A fixed-capacity
//! ring buffer replaces the ad hoc shift-from-front list the rule is
//! usually written with.

use crate::position::Position;
use serde::{Deserialize, Serialize};

const CAPACITY: usize = 3;

/// FIFO queue of a player's live pieces, capped at three.
///
/// Pushing into a full queue evicts and returns the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceQueue {
    slots: [Option<Position>; CAPACITY],
    head: usize,
    len: usize,
}

impl PieceQueue {
    /// Maximum number of live pieces per player.
    pub const CAPACITY: usize = CAPACITY;

    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; Self::CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Number of live pieces.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push will evict.
    pub fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    /// Oldest surviving piece, if any.
    pub fn oldest(&self) -> Option<Position> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.head]
        }
    }

    /// Appends a piece, evicting and returning the oldest when full.
    pub fn push(&mut self, pos: Position) -> Option<Position> {
        let evicted = if self.len == Self::CAPACITY {
            let oldest = self.slots[self.head].take();
            self.head = (self.head + 1) % Self::CAPACITY;
            self.len -= 1;
            oldest
        } else {
            None
        };

        let tail = (self.head + self.len) % Self::CAPACITY;
        self.slots[tail] = Some(pos);
        self.len += 1;
        evicted
    }

    /// Removes all pieces.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns true if the queue holds the given position.
    pub fn contains(&self, pos: Position) -> bool {
        self.iter().any(|p| p == pos)
    }

    /// Iterates live pieces, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % Self::CAPACITY])
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
