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

use arrayvec::ArrayVec;

use crate::{square::Square, types::Move};

/// A container for the moves of one piece, stored inline on the stack.
///
/// A queen in the open reaches at most 27 squares; 32 leaves headroom for
/// every piece type including a castling king.
pub type MoveList = ArrayVec<Move, 32>;

/// Looks up the move in `moves` that lands on `to`.
///
/// The presentation layer asks this before applying: a `None` answer means
/// the released square is not a legal destination and nothing happens.
///
/// # Examples
///
/// ```
/// use sakk::{find_destination, Position, Square};
///
/// let pos = Position::new();
/// let moves = pos.legal_moves(Square::E2);
/// assert!(find_destination(&moves, Square::E4).is_some());
/// assert!(find_destination(&moves, Square::E5).is_none());
/// ```
pub fn find_destination(moves: &[Move], to: Square) -> Option<Move> {
    moves.iter().copied().find(|m| m.to == to)
}
