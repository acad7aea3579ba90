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

//! Count legal move paths.
//!
//! Useful for comparing, testing and debugging move generation
//! correctness.
//!
//! # Examples
//!
//! ```
//! use sakk::{perft, Position};
//!
//! let pos = Position::new();
//! assert_eq!(perft(&pos, 1), 20);
//! assert_eq!(perft(&pos, 2), 400);
//! ```

use crate::{position::Position, role::Role};

/// Counts legal move paths of a given length.
///
/// A move that leaves a promotion pending counts once per promotion
/// piece, the usual convention.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    let mut nodes = 0;
    for (from, _) in pos.board().pieces_of(pos.turn()) {
        for m in pos.legal_moves(from) {
            let mut child = pos.clone();
            child.play_unchecked(&m);
            if child.pending_promotion().is_some() {
                for role in Role::PROMOTION_TARGETS {
                    if depth == 1 {
                        nodes += 1;
                    } else {
                        let mut resolved = child.clone();
                        resolved.resolve_promotion(role);
                        nodes += perft(&resolved, depth - 1);
                    }
                }
            } else if depth == 1 {
                nodes += 1;
            } else {
                nodes += perft(&child, depth - 1);
            }
        }
    }
    nodes
}
