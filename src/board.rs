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

use std::fmt;

use crate::{
    color::Color,
    role::Role,
    square::{File, Rank, Square},
    types::Piece,
};

/// The 8×8 grid of squares, each holding an optional piece.
///
/// At most one piece occupies a square. Any position reachable through
/// legal play holds exactly one king per side; [`Board`] itself does not
/// enforce that, [`Position::from_setup`](crate::Position::from_setup)
/// does.
///
/// `Board::default()` is the standard starting position.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// Back rank piece types from the A file to the H file.
const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    /// Gets an empty board.
    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Gets the piece at the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Gets the color of the piece at the given square.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Gets the piece type at the given square.
    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    /// Puts a piece on the given square, replacing any occupant.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    /// Takes the piece off the given square.
    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize].take()
    }

    /// Finds the king of the given side.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece == color.king())
            .map(|(sq, _)| sq)
    }

    /// Iterates over all occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL
            .iter()
            .filter_map(move |&sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the occupied squares of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

impl Default for Board {
    fn default() -> Board {
        let mut board = Board::empty();
        for (&file, &role) in File::ALL.iter().zip(BACK_RANK.iter()) {
            for color in Color::ALL {
                board.set_piece_at(
                    Square::from_coords(file, color.back_rank()),
                    role.of(color),
                );
                board.set_piece_at(
                    Square::from_coords(file, color.pawn_rank()),
                    color.pawn(),
                );
            }
        }
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &rank) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => write!(f, "{}", piece.char())?,
                    None => f.write_str(".")?,
                }
                if file != File::H {
                    f.write_str(" ")?;
                }
            }
        }
        Ok(())
    }
}
