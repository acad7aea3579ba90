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

//! Pseudo-legal move generation.
//!
//! Pseudo-legal moves follow the movement pattern and board occupancy but
//! may still leave the mover's own king attacked; the legality filter in
//! [`Position`](crate::Position) prunes those. Castling candidates are the
//! exception: their no-attacked-crossing rule is part of generation.

use crate::{
    attacks::{self, BISHOP_DIRS, KING_STEPS, KNIGHT_JUMPS, ROOK_DIRS},
    castling::{CastlingRights, CastlingSide},
    color::Color,
    movelist::MoveList,
    position::Position,
    role::Role,
    square::{File, Square},
    types::{Move, MoveKind, Piece},
};

pub(crate) fn pseudo_legal_moves(
    pos: &Position,
    from: Square,
    piece: Piece,
    moves: &mut MoveList,
) {
    match piece.role {
        Role::Pawn => pawn_moves(pos, from, piece.color, moves),
        Role::Knight => step_moves(pos, from, piece.color, &KNIGHT_JUMPS, moves),
        Role::Bishop => ray_moves(pos, from, piece.color, &BISHOP_DIRS, moves),
        Role::Rook => ray_moves(pos, from, piece.color, &ROOK_DIRS, moves),
        Role::Queen => {
            ray_moves(pos, from, piece.color, &ROOK_DIRS, moves);
            ray_moves(pos, from, piece.color, &BISHOP_DIRS, moves);
        }
        Role::King => {
            step_moves(pos, from, piece.color, &KING_STEPS, moves);
            castle_moves(pos, from, piece.color, moves);
        }
    }
}

/// Fixed-offset movers: knight jumps and king steps.
fn step_moves(
    pos: &Position,
    from: Square,
    color: Color,
    table: &[(i8, i8); 8],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in table {
        if let Some(to) = from.offset(file_delta, rank_delta) {
            match pos.board().color_at(to) {
                None => moves.push(Move {
                    from,
                    to,
                    kind: MoveKind::Quiet,
                }),
                Some(occupant) if occupant != color => moves.push(Move {
                    from,
                    to,
                    kind: MoveKind::Capture,
                }),
                Some(_) => {}
            }
        }
    }
}

/// Sliders: scan each direction until the board edge, an own piece
/// (excluded) or an enemy piece (included, then stop).
fn ray_moves(
    pos: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8); 4],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in dirs {
        let mut sq = from;
        while let Some(to) = sq.offset(file_delta, rank_delta) {
            sq = to;
            match pos.board().color_at(to) {
                None => moves.push(Move {
                    from,
                    to,
                    kind: MoveKind::Quiet,
                }),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(Move {
                            from,
                            to,
                            kind: MoveKind::Capture,
                        });
                    }
                    break;
                }
            }
        }
    }
}

fn pawn_moves(pos: &Position, from: Square, color: Color, moves: &mut MoveList) {
    let step = color.pawn_step();

    if let Some(one) = from.offset(0, step) {
        if pos.board().piece_at(one).is_none() {
            moves.push(Move {
                from,
                to: one,
                kind: MoveKind::Quiet,
            });
            // the double advance needs both squares clear
            if from.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, step) {
                    if pos.board().piece_at(two).is_none() {
                        moves.push(Move {
                            from,
                            to: two,
                            kind: MoveKind::Quiet,
                        });
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(to) = from.offset(file_delta, step) {
            match pos.board().color_at(to) {
                Some(occupant) if occupant != color => moves.push(Move {
                    from,
                    to,
                    kind: MoveKind::Capture,
                }),
                Some(_) => {}
                None => {
                    if en_passant_allowed(pos, from, color, to) {
                        moves.push(Move {
                            from,
                            to,
                            kind: MoveKind::EnPassant,
                        });
                    }
                }
            }
        }
    }
}

/// En passant is only open on the very next move: the last move played
/// must have been the victim pawn's two-square advance, landing it beside
/// the capturing pawn on the file the capture crosses into.
fn en_passant_allowed(pos: &Position, from: Square, color: Color, to: Square) -> bool {
    let Some(last) = pos.last_move() else {
        return false;
    };
    let Some(victim) = pos.board().piece_at(last.to) else {
        return false;
    };
    victim.role == Role::Pawn
        && victim.color != color
        && last.to.file() == to.file()
        && last.to.rank() == from.rank()
        && (last.from.rank() as i8 - last.to.rank() as i8).abs() == 2
}

fn castle_moves(pos: &Position, from: Square, color: Color, moves: &mut MoveList) {
    // castling only ever originates from the king's home square
    if from != Square::from_coords(File::E, color.back_rank()) {
        return;
    }

    let back = color.back_rank();
    for side in CastlingSide::ALL {
        if !pos
            .castling_rights()
            .contains(CastlingRights::single(color, side))
        {
            continue;
        }

        // every square on the rook's path must be empty
        let between: &[File] = match side {
            CastlingSide::KingSide => &[File::F, File::G],
            CastlingSide::QueenSide => &[File::B, File::C, File::D],
        };
        if between
            .iter()
            .any(|&file| pos.board().piece_at(Square::from_coords(file, back)).is_some())
        {
            continue;
        }

        // the king's start, crossing and landing squares must be safe;
        // the king crosses the rook's destination square
        let crossing = Square::from_coords(side.rook_to_file(), back);
        let landing = side.king_to(color);
        if [from, crossing, landing]
            .iter()
            .any(|&sq| attacks::is_attacked(pos.board(), sq, !color))
        {
            continue;
        }

        moves.push(Move {
            from,
            to: landing,
            kind: match side {
                CastlingSide::KingSide => MoveKind::CastleKingSide,
                CastlingSide::QueenSide => MoveKind::CastleQueenSide,
            },
        });
    }
}
