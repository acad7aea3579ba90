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

//! Write short algebraic notation.
//!
//! A move is rendered against the position it is about to be played in;
//! the position itself is never modified.
//!
//! # Examples
//!
//! ```
//! use sakk::{san::SanPlus, Move, MoveKind, Position, Square};
//!
//! let pos = Position::new();
//! let m = Move {
//!     from: Square::G1,
//!     to: Square::F3,
//!     kind: MoveKind::Quiet,
//! };
//! assert_eq!(SanPlus::from_move(&pos, &m).to_string(), "Nf3");
//! ```

use std::fmt;

use crate::{
    attacks,
    castling::CastlingSide,
    position::Position,
    role::Role,
    square::{File, Rank, Square},
    types::Move,
};

/// A move in short algebraic notation, without check suffix.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum San {
    #[allow(missing_docs)]
    Normal {
        role: Role,
        file: Option<File>,
        rank: Option<Rank>,
        capture: bool,
        to: Square,
    },
    /// `O-O` or `O-O-O`.
    Castle(CastlingSide),
}

impl San {
    /// Renders a legal move against the position it would be played in.
    ///
    /// Pawn captures carry their origin file. Knights, bishops, rooks and
    /// queens get a disambiguator when another piece of the same type and
    /// side could also legally reach the destination: the origin file
    /// letter, or the origin rank digit when a rival stands on the same
    /// file.
    pub fn from_move(pos: &Position, m: &Move) -> San {
        if let Some(side) = m.castling_side() {
            return San::Castle(side);
        }

        let piece = pos
            .board()
            .piece_at(m.from)
            .expect("piece on origin square");

        let (file, rank) = match piece.role {
            Role::Pawn => (m.is_capture().then(|| m.from.file()), None),
            // a side never has two kings
            Role::King => (None, None),
            _ => {
                let mut any_rival = false;
                let mut rival_shares_file = false;
                for (sq, other) in pos.board().pieces() {
                    if sq == m.from || other != piece {
                        continue;
                    }
                    if pos.legal_moves(sq).iter().any(|c| c.to == m.to) {
                        any_rival = true;
                        if sq.file() == m.from.file() {
                            rival_shares_file = true;
                        }
                    }
                }
                if !any_rival {
                    (None, None)
                } else if rival_shares_file {
                    (None, Some(m.from.rank()))
                } else {
                    (Some(m.from.file()), None)
                }
            }
        };

        San::Normal {
            role: piece.role,
            file,
            rank,
            capture: m.is_capture(),
            to: m.to,
        }
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            San::Normal {
                role,
                file,
                rank,
                capture,
                to,
            } => {
                if role != Role::Pawn {
                    write!(f, "{}", role.upper_char())?;
                }
                if let Some(file) = file {
                    write!(f, "{}", file.char())?;
                }
                if let Some(rank) = rank {
                    write!(f, "{}", rank.char())?;
                }
                if capture {
                    f.write_str("x")?;
                }
                write!(f, "{to}")
            }
            San::Castle(CastlingSide::KingSide) => f.write_str("O-O"),
            San::Castle(CastlingSide::QueenSide) => f.write_str("O-O-O"),
        }
    }
}

/// Check (`+`) or checkmate (`#`) suffix.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Suffix {
    Check,
    Checkmate,
}

impl Suffix {
    pub const fn char(self) -> char {
        match self {
            Suffix::Check => '+',
            Suffix::Checkmate => '#',
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A [`San`] and its check or checkmate suffix.
#[allow(missing_docs)]
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct SanPlus {
    pub san: San,
    pub suffix: Option<Suffix>,
}

impl SanPlus {
    /// Renders a legal move including its suffix.
    ///
    /// The suffix is decided by applying the move to a scratch copy; the
    /// given position is left untouched. An illegal move renders without
    /// a suffix.
    pub fn from_move(pos: &Position, m: &Move) -> SanPlus {
        let san = San::from_move(pos, m);
        let mut scratch = pos.clone();
        let suffix = if scratch.play(m).is_ok() {
            if scratch.pending_promotion().is_some() {
                // promotion undecided: the pawn attacks from the far rank
                let mover = scratch.turn();
                let king = scratch.board().king_of(!mover).expect("king on board");
                attacks::is_attacked(scratch.board(), king, mover).then_some(Suffix::Check)
            } else if scratch.is_checkmate() {
                Some(Suffix::Checkmate)
            } else if scratch.is_check() {
                Some(Suffix::Check)
            } else {
                None
            }
        } else {
            None
        };
        SanPlus { san, suffix }
    }
}

impl fmt::Display for SanPlus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.san)?;
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}
