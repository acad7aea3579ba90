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

//! Square attack tests.
//!
//! [`is_attacked`] answers whether a side exerts an attack on a square,
//! occupied or not. It drives check detection, the legality filter, and
//! the castling-path rule, and must therefore not depend on legality
//! filtering itself.

use crate::{board::Board, color::Color, role::Role, square::Square};

/// Orthogonal unit steps, the rook's directions.
pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal unit steps, the bishop's directions.
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The knight's eight jumps.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The king's eight steps.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Tests if `by` attacks `target`.
///
/// Pawn attacks count even when `target` is empty (a pawn defends the
/// squares diagonally ahead of it whether or not something stands there);
/// pawn advances never count. Castling is not an attack.
///
/// # Examples
///
/// ```
/// use sakk::{attacks::is_attacked, Board, Color, Square};
///
/// let board = Board::default();
/// assert!(is_attacked(&board, Square::F3, Color::White));
/// assert!(!is_attacked(&board, Square::E4, Color::White));
/// ```
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    // A pawn of `by` attacks `target` from one rank behind it.
    for file_delta in [-1, 1] {
        if let Some(from) = target.offset(file_delta, -by.pawn_step()) {
            if board.piece_at(from) == Some(by.pawn()) {
                return true;
            }
        }
    }

    for &(file_delta, rank_delta) in &KNIGHT_JUMPS {
        if let Some(from) = target.offset(file_delta, rank_delta) {
            if board.piece_at(from) == Some(by.knight()) {
                return true;
            }
        }
    }

    for &(file_delta, rank_delta) in &KING_STEPS {
        if let Some(from) = target.offset(file_delta, rank_delta) {
            if board.piece_at(from) == Some(by.king()) {
                return true;
            }
        }
    }

    slider_attacks(board, target, by, &ROOK_DIRS, Role::Rook)
        || slider_attacks(board, target, by, &BISHOP_DIRS, Role::Bishop)
}

/// Scans outward from `target`: the nearest piece on each ray attacks it
/// iff it belongs to `by` and slides along that ray.
fn slider_attacks(
    board: &Board,
    target: Square,
    by: Color,
    dirs: &[(i8, i8); 4],
    slider: Role,
) -> bool {
    for &(file_delta, rank_delta) in dirs {
        let mut sq = target;
        while let Some(next) = sq.offset(file_delta, rank_delta) {
            sq = next;
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == by && (piece.role == slider || piece.role == Role::Queen) {
                    return true;
                }
                break;
            }
        }
    }
    false
}
