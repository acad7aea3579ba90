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

use bitflags::bitflags;

use crate::{
    color::Color,
    square::{File, Square},
};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    pub const fn king_to_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::G,
            CastlingSide::QueenSide => File::C,
        }
    }

    pub const fn rook_to_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::F,
            CastlingSide::QueenSide => File::D,
        }
    }

    pub const fn rook_from_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::H,
            CastlingSide::QueenSide => File::A,
        }
    }

    pub const fn king_to(self, color: Color) -> Square {
        Square::from_coords(self.king_to_file(), color.back_rank())
    }

    pub const fn rook_to(self, color: Color) -> Square {
        Square::from_coords(self.rook_to_file(), color.back_rank())
    }

    pub const fn rook_from(self, color: Color) -> Square {
        Square::from_coords(self.rook_from_file(), color.back_rank())
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

bitflags! {
    /// The four independent castling rights.
    ///
    /// Rights only ever shrink over the course of a game: they are
    /// discarded when a king or rook leaves its home square (or a capture
    /// lands on a rook's home square) and never reset.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct CastlingRights: u8 {
        const WHITE_KING_SIDE = 1;
        const WHITE_QUEEN_SIDE = 1 << 1;
        const BLACK_KING_SIDE = 1 << 2;
        const BLACK_QUEEN_SIDE = 1 << 3;
    }
}

impl CastlingRights {
    /// Gets the single flag for a color and side.
    pub const fn single(color: Color, side: CastlingSide) -> CastlingRights {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => CastlingRights::WHITE_KING_SIDE,
            (Color::White, CastlingSide::QueenSide) => CastlingRights::WHITE_QUEEN_SIDE,
            (Color::Black, CastlingSide::KingSide) => CastlingRights::BLACK_KING_SIDE,
            (Color::Black, CastlingSide::QueenSide) => CastlingRights::BLACK_QUEEN_SIDE,
        }
    }

    /// Checks the flag for a color and side.
    #[inline]
    pub fn has(self, color: Color, side: CastlingSide) -> bool {
        self.contains(CastlingRights::single(color, side))
    }

    /// Discards both of a color's rights. The moment a side's king moves,
    /// castling is gone for good.
    pub fn discard_color(&mut self, color: Color) {
        self.remove(
            CastlingRights::single(color, CastlingSide::KingSide)
                | CastlingRights::single(color, CastlingSide::QueenSide),
        );
    }

    /// Discards the right tied to a rook home corner, if `square` is one.
    ///
    /// Applied to both endpoints of every move, so a rook leaving its
    /// corner and a capture landing on it both invalidate the right.
    pub fn discard_rook_square(&mut self, square: Square) {
        if square == Square::H1 {
            self.remove(CastlingRights::WHITE_KING_SIDE);
        } else if square == Square::A1 {
            self.remove(CastlingRights::WHITE_QUEEN_SIDE);
        } else if square == Square::H8 {
            self.remove(CastlingRights::BLACK_KING_SIDE);
        } else if square == Square::A8 {
            self.remove(CastlingRights::BLACK_QUEEN_SIDE);
        }
    }
}

impl Default for CastlingRights {
    fn default() -> CastlingRights {
        CastlingRights::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_squares() {
        assert_eq!(CastlingSide::KingSide.rook_from(Color::White), Square::H1);
        assert_eq!(CastlingSide::QueenSide.rook_from(Color::Black), Square::A8);
        assert_eq!(CastlingSide::KingSide.king_to(Color::White), Square::G1);
        assert_eq!(CastlingSide::QueenSide.rook_to(Color::Black), Square::D8);
    }

    #[test]
    fn test_discards() {
        let mut rights = CastlingRights::all();
        rights.discard_rook_square(Square::H1);
        assert!(!rights.has(Color::White, CastlingSide::KingSide));
        assert!(rights.has(Color::White, CastlingSide::QueenSide));

        rights.discard_rook_square(Square::E4);
        assert_eq!(
            rights,
            CastlingRights::all() - CastlingRights::WHITE_KING_SIDE
        );

        rights.discard_color(Color::Black);
        assert_eq!(rights, CastlingRights::WHITE_QUEEN_SIDE);
    }
}
