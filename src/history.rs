// This file is part of the sakk library.
// Copyright (C) 2026 the sakk authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Snapshot history for undo.
//!
//! Undo replaces the current position with a stored snapshot instead of
//! un-applying moves, so there is no inverse move logic to get wrong.
//!
//! # Examples
//!
//! ```
//! use sakk::{find_destination, History, Position, Square};
//!
//! let mut history = History::new();
//! let mut pos = Position::new();
//!
//! history.push(pos.clone());
//! let m = find_destination(&pos.legal_moves(Square::E2), Square::E4).unwrap();
//! pos.play(&m)?;
//!
//! // take it back
//! pos = history.revert_to(0).expect("snapshot exists");
//! assert_eq!(pos, Position::new());
//! # Ok::<_, sakk::PlayError>(())
//! ```

use crate::position::Position;

/// Maximum number of snapshots a [`History`] retains; the oldest snapshot
/// is dropped beyond that.
pub const MAX_SNAPSHOTS: usize = 200;

/// A capped, append-only buffer of position snapshots.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    snapshots: Vec<Position>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Appends a snapshot, dropping the oldest when the cap is reached.
    pub fn push(&mut self, pos: Position) {
        if self.snapshots.len() == MAX_SNAPSHOTS {
            self.snapshots.remove(0);
        }
        self.snapshots.push(pos);
    }

    /// Looks up a snapshot without modifying the history.
    pub fn get(&self, index: usize) -> Option<&Position> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Position> {
        self.snapshots.last()
    }

    /// Returns the snapshot at `index` and discards everything recorded
    /// after it, or `None` (leaving the history untouched) when `index` is
    /// out of range.
    pub fn revert_to(&mut self, index: usize) -> Option<Position> {
        let snapshot = self.snapshots.get(index)?.clone();
        self.snapshots.truncate(index + 1);
        Some(snapshot)
    }
}
