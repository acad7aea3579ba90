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

use std::{error::Error, fmt};

use crate::{
    attacks,
    board::Board,
    castling::{CastlingRights, CastlingSide},
    color::Color,
    movegen,
    movelist::MoveList,
    role::Role,
    square::{File, Rank, Square},
    types::{Move, MoveKind},
};

/// Error when trying to play an illegal move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayError;

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal move")
    }
}

impl Error for PlayError {}

/// Error when a setup does not form a playable position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PositionError {
    /// A side has no king.
    MissingKing { color: Color },
    /// A side has more than one king.
    TooManyKings { color: Color },
    /// A pawn stands on the first or eighth rank.
    PawnsOnBackrank,
    /// The side not to move is in check.
    OppositeCheck,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PositionError::MissingKing { color } => write!(f, "missing {color} king"),
            PositionError::TooManyKings { color } => write!(f, "too many {color} kings"),
            PositionError::PawnsOnBackrank => f.write_str("pawns on backrank"),
            PositionError::OppositeCheck => f.write_str("opposite check"),
        }
    }
}

impl Error for PositionError {}

/// A game state: board, side to move, castling rights, last-move memory
/// and the derived check, checkmate and stalemate flags.
///
/// A `Position` is only ever mutated by [`Position::play`] (or
/// [`Position::play_unchecked`]) and [`Position::resolve_promotion`]; all
/// queries take `&self`. Undo is snapshot-based via
/// [`History`](crate::History) rather than un-applying moves.
///
/// # Examples
///
/// ```
/// use sakk::{find_destination, Position, Square};
///
/// let mut pos = Position::new();
/// let moves = pos.legal_moves(Square::G1);
/// let m = find_destination(&moves, Square::F3).expect("knight move");
/// pos.play(&m)?;
/// assert!(!pos.is_check());
/// # Ok::<_, sakk::PlayError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    board: Board,
    turn: Color,
    castling: CastlingRights,
    last_move: Option<Move>,
    check: bool,
    checkmate: bool,
    stalemate: bool,
    pending_promotion: Option<Square>,
}

impl Position {
    /// Gets the standard starting position with full castling rights,
    /// white to move.
    pub fn new() -> Position {
        Position::default()
    }

    /// Validates a setup and constructs a position.
    ///
    /// Castling rights without the matching king and rook on their home
    /// squares are silently discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] when a side does not have exactly one
    /// king, a pawn stands on a back rank, or the side not to move is
    /// already in check.
    pub fn from_setup(
        board: Board,
        turn: Color,
        castling: CastlingRights,
    ) -> Result<Position, PositionError> {
        for color in Color::ALL {
            let kings = board
                .pieces_of(color)
                .filter(|&(_, piece)| piece.role == Role::King)
                .count();
            if kings == 0 {
                return Err(PositionError::MissingKing { color });
            }
            if kings > 1 {
                return Err(PositionError::TooManyKings { color });
            }
        }

        if board.pieces().any(|(sq, piece)| {
            piece.role == Role::Pawn
                && (sq.rank() == Rank::First || sq.rank() == Rank::Eighth)
        }) {
            return Err(PositionError::PawnsOnBackrank);
        }

        let their_king = board.king_of(!turn).expect("king on board");
        if attacks::is_attacked(&board, their_king, turn) {
            return Err(PositionError::OppositeCheck);
        }

        let mut castling = castling;
        for color in Color::ALL {
            for side in CastlingSide::ALL {
                let king_home = Square::from_coords(File::E, color.back_rank());
                if board.piece_at(king_home) != Some(color.king())
                    || board.piece_at(side.rook_from(color)) != Some(color.rook())
                {
                    castling.remove(CastlingRights::single(color, side));
                }
            }
        }

        let mut pos = Position {
            board,
            turn,
            castling,
            last_move: None,
            check: false,
            checkmate: false,
            stalemate: false,
            pending_promotion: None,
        };
        pos.refresh_outcome();
        Ok(pos)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The last move played, if any. En passant eligibility is derived
    /// from it.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Whether the side to move is in check.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Whether the side to move is checkmated.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Whether the side to move has no legal move while not in check.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Whether play has ended in checkmate or stalemate.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    /// The square of a pawn awaiting its promotion piece, if any. While
    /// set, the turn does not advance and no further moves are accepted
    /// until [`Position::resolve_promotion`] is called.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Generates the legal moves for the piece on `from`.
    ///
    /// Empty when `from` is empty, holds an opposing piece, or the piece
    /// has no move that leaves its own king safe.
    ///
    /// # Panics
    ///
    /// Panics if a promotion is pending; supply the promotion piece
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sakk::{Position, Square};
    ///
    /// let pos = Position::new();
    /// assert_eq!(pos.legal_moves(Square::G1).len(), 2);
    /// // not white's piece, so nothing happens
    /// assert!(pos.legal_moves(Square::G8).is_empty());
    /// assert!(pos.legal_moves(Square::E4).is_empty());
    /// ```
    pub fn legal_moves(&self, from: Square) -> MoveList {
        assert!(
            self.pending_promotion.is_none(),
            "promotion pending; resolve it before generating moves"
        );

        let mut moves = MoveList::new();
        let Some(piece) = self.board.piece_at(from) else {
            return moves;
        };
        if piece.color != self.turn {
            return moves;
        }
        movegen::pseudo_legal_moves(self, from, piece, &mut moves);
        moves.retain(|m| self.is_safe(*m));
        moves
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] when the move is not legal in this position.
    ///
    /// # Panics
    ///
    /// Panics if a promotion is pending.
    pub fn play(&mut self, m: &Move) -> Result<(), PlayError> {
        if self.legal_moves(m.from).contains(m) {
            self.play_unchecked(m);
            Ok(())
        } else {
            Err(PlayError)
        }
    }

    /// Plays a move without checking legality.
    ///
    /// Use when the move was already validated, e.g. picked out of
    /// [`Position::legal_moves`] via
    /// [`find_destination`](crate::find_destination). Playing an illegal
    /// move corrupts the position.
    ///
    /// # Panics
    ///
    /// Panics if a promotion is pending, or if `m.from` is empty.
    pub fn play_unchecked(&mut self, m: &Move) {
        assert!(
            self.pending_promotion.is_none(),
            "promotion pending; resolve it before playing"
        );

        let piece = self
            .board
            .piece_at(m.from)
            .expect("piece on origin square");
        self.apply_unchecked(*m);

        // rights die with the king's first move, a rook leaving its
        // corner, or a capture landing on one
        if piece.role == Role::King {
            self.castling.discard_color(piece.color);
        }
        self.castling.discard_rook_square(m.from);
        self.castling.discard_rook_square(m.to);

        self.last_move = Some(*m);

        if piece.role == Role::Pawn && m.to.rank() == (!piece.color).back_rank() {
            // hold the turn until the promotion piece is supplied
            self.pending_promotion = Some(m.to);
            return;
        }

        self.turn = !self.turn;
        self.refresh_outcome();
    }

    /// Replaces the pawn awaiting promotion with a piece of the chosen
    /// type and advances the turn.
    ///
    /// # Panics
    ///
    /// Panics if no promotion is pending or `role` is not one of queen,
    /// rook, bishop or knight.
    pub fn resolve_promotion(&mut self, role: Role) {
        let sq = self
            .pending_promotion
            .take()
            .expect("no promotion pending");
        assert!(
            role.is_promotion_target(),
            "pawns promote to queen, rook, bishop or knight"
        );

        let pawn = self.board.piece_at(sq).expect("pawn on promotion square");
        debug_assert_eq!(pawn.role, Role::Pawn);
        self.board.set_piece_at(sq, role.of(pawn.color));

        self.turn = !self.turn;
        self.refresh_outcome();
    }

    /// The mechanical half of playing a move: relocations only, shared by
    /// real moves and the legality filter's scratch simulations. Never
    /// checks legality, never touches rights, flags or the turn.
    fn apply_unchecked(&mut self, m: Move) {
        match m.kind {
            MoveKind::Quiet | MoveKind::Capture => {}
            MoveKind::EnPassant => {
                // the captured pawn sits beside the origin, on the
                // destination file
                let victim = Square::from_coords(m.to.file(), m.from.rank());
                self.board.remove_piece_at(victim);
            }
            MoveKind::CastleKingSide | MoveKind::CastleQueenSide => {
                let side = m.castling_side().expect("castling move kind");
                let color = self.board.color_at(m.from).expect("piece on origin square");
                let rook = self
                    .board
                    .remove_piece_at(side.rook_from(color))
                    .expect("rook on home square");
                self.board.set_piece_at(side.rook_to(color), rook);
            }
        }

        let piece = self
            .board
            .remove_piece_at(m.from)
            .expect("piece on origin square");
        self.board.set_piece_at(m.to, piece);
    }

    /// Simulates `m` on a scratch copy and tests whether the mover's own
    /// king is left unattacked.
    fn is_safe(&self, m: Move) -> bool {
        let mut scratch = self.clone();
        scratch.apply_unchecked(m);
        let king = scratch.board.king_of(self.turn).expect("king on board");
        !attacks::is_attacked(&scratch.board, king, !self.turn)
    }

    /// Recomputes check, checkmate and stalemate for the side to move.
    fn refresh_outcome(&mut self) {
        let king = self.board.king_of(self.turn).expect("king on board");
        self.check = attacks::is_attacked(&self.board, king, !self.turn);
        let any_move = self.has_legal_move();
        self.checkmate = self.check && !any_move;
        self.stalemate = !self.check && !any_move;
    }

    fn has_legal_move(&self) -> bool {
        let mut moves = MoveList::new();
        for (sq, piece) in self.board.pieces_of(self.turn) {
            moves.clear();
            movegen::pseudo_legal_moves(self, sq, piece, &mut moves);
            if moves.iter().any(|&m| self.is_safe(m)) {
                return true;
            }
        }
        false
    }
}

impl Default for Position {
    fn default() -> Position {
        Position {
            board: Board::default(),
            turn: Color::White,
            castling: CastlingRights::all(),
            last_move: None,
            check: false,
            checkmate: false,
            stalemate: false,
            pending_promotion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movelist::find_destination;

    fn play(pos: &mut Position, from: Square, to: Square) -> Move {
        let m = find_destination(&pos.legal_moves(from), to).expect("legal destination");
        pos.play(&m).expect("legal move");
        m
    }

    fn count_legal_moves(pos: &Position) -> usize {
        Square::ALL
            .iter()
            .map(|&sq| pos.legal_moves(sq).len())
            .sum()
    }

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let pos = Position::new();
        assert_eq!(count_legal_moves(&pos), 20);
        assert!(!pos.is_check());
        assert!(!pos.is_game_over());
    }

    #[test]
    fn test_play_rejects_illegal_destination() {
        let mut pos = Position::new();
        let m = Move {
            from: Square::E2,
            to: Square::E5,
            kind: MoveKind::Quiet,
        };
        assert_eq!(pos.play(&m), Err(PlayError));
        // the position is untouched
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_capture_replaces_piece() {
        let mut pos = Position::new();
        play(&mut pos, Square::E2, Square::E4);
        play(&mut pos, Square::D7, Square::D5);
        let m = play(&mut pos, Square::E4, Square::D5);
        assert_eq!(m.kind, MoveKind::Capture);
        assert_eq!(pos.board().piece_at(Square::D5), Some(Color::White.pawn()));
        assert_eq!(pos.board().piece_at(Square::E4), None);
    }

    #[test]
    fn test_en_passant_window() {
        let mut pos = Position::new();
        play(&mut pos, Square::E2, Square::E4);
        play(&mut pos, Square::A7, Square::A6);
        play(&mut pos, Square::E4, Square::E5);
        play(&mut pos, Square::D7, Square::D5);

        let m = find_destination(&pos.legal_moves(Square::E5), Square::D6)
            .expect("en passant offered");
        assert_eq!(m.kind, MoveKind::EnPassant);

        pos.play(&m).expect("legal move");
        assert_eq!(pos.board().piece_at(Square::D6), Some(Color::White.pawn()));
        // the passed pawn is gone
        assert_eq!(pos.board().piece_at(Square::D5), None);
    }

    #[test]
    fn test_en_passant_expires_after_one_move() {
        let mut pos = Position::new();
        play(&mut pos, Square::E2, Square::E4);
        play(&mut pos, Square::A7, Square::A6);
        play(&mut pos, Square::E4, Square::E5);
        play(&mut pos, Square::D7, Square::D5);
        play(&mut pos, Square::H2, Square::H3);
        play(&mut pos, Square::A6, Square::A5);

        assert!(find_destination(&pos.legal_moves(Square::E5), Square::D6).is_none());
    }

    #[test]
    fn test_castling_moves_both_pieces_and_clears_rights() {
        let mut pos = Position::new();
        play(&mut pos, Square::E2, Square::E4);
        play(&mut pos, Square::E7, Square::E5);
        play(&mut pos, Square::G1, Square::F3);
        play(&mut pos, Square::B8, Square::C6);
        play(&mut pos, Square::F1, Square::C4);
        play(&mut pos, Square::F8, Square::C5);

        let m = find_destination(&pos.legal_moves(Square::E1), Square::G1)
            .expect("castling offered");
        assert_eq!(m.kind, MoveKind::CastleKingSide);
        pos.play(&m).expect("legal move");

        assert_eq!(pos.board().piece_at(Square::G1), Some(Color::White.king()));
        assert_eq!(pos.board().piece_at(Square::F1), Some(Color::White.rook()));
        assert_eq!(pos.board().piece_at(Square::E1), None);
        assert_eq!(pos.board().piece_at(Square::H1), None);
        assert!(!pos.castling_rights().has(Color::White, CastlingSide::KingSide));
        assert!(!pos.castling_rights().has(Color::White, CastlingSide::QueenSide));
        assert!(pos.castling_rights().has(Color::Black, CastlingSide::KingSide));
    }

    #[test]
    fn test_king_move_clears_both_rights() {
        let mut pos = Position::new();
        play(&mut pos, Square::E2, Square::E4);
        play(&mut pos, Square::E7, Square::E5);
        play(&mut pos, Square::E1, Square::E2);
        assert!(!pos.castling_rights().has(Color::White, CastlingSide::KingSide));
        assert!(!pos.castling_rights().has(Color::White, CastlingSide::QueenSide));
    }

    #[test]
    fn test_rook_move_clears_one_right() {
        let mut pos = Position::new();
        play(&mut pos, Square::A2, Square::A4);
        play(&mut pos, Square::A7, Square::A5);
        play(&mut pos, Square::A1, Square::A3);
        assert!(!pos.castling_rights().has(Color::White, CastlingSide::QueenSide));
        assert!(pos.castling_rights().has(Color::White, CastlingSide::KingSide));
    }

    #[test]
    fn test_castling_refused_through_attacked_square() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::H1, Color::White.rook());
        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::F8, Color::Black.rook());
        let pos = Position::from_setup(board, Color::White, CastlingRights::all())
            .expect("valid setup");

        // f1 is under fire, so no castling even though the path is empty
        assert!(find_destination(&pos.legal_moves(Square::E1), Square::G1).is_none());
    }

    #[test]
    fn test_queenside_castling_ignores_attacked_knight_file() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::A1, Color::White.rook());
        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::B8, Color::Black.rook());
        let pos = Position::from_setup(board, Color::White, CastlingRights::all())
            .expect("valid setup");

        // b1 is attacked, but the king never crosses it
        let m = find_destination(&pos.legal_moves(Square::E1), Square::C1)
            .expect("castling offered");
        assert_eq!(m.kind, MoveKind::CastleQueenSide);
    }

    #[test]
    fn test_pinned_piece_has_no_moves() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E4, Color::White.knight());
        board.set_piece_at(Square::E8, Color::Black.rook());
        board.set_piece_at(Square::A8, Color::Black.king());
        let pos = Position::from_setup(board, Color::White, CastlingRights::empty())
            .expect("valid setup");

        assert!(pos.legal_moves(Square::E4).is_empty());
    }

    #[test]
    fn test_every_legal_move_leaves_mover_safe() {
        let mut pos = Position::new();
        // a short open game with captures and checks available
        for (from, to) in [
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::D1, Square::H5),
            (Square::B8, Square::C6),
            (Square::H5, Square::F7),
        ] {
            play(&mut pos, from, to);
        }
        assert!(pos.is_check());

        for &from in Square::ALL.iter() {
            for m in pos.legal_moves(from) {
                let mut scratch = pos.clone();
                scratch.play_unchecked(&m);
                let king = scratch.board().king_of(pos.turn()).expect("king on board");
                assert!(!attacks::is_attacked(scratch.board(), king, !pos.turn()));
            }
        }
    }

    #[test]
    fn test_fools_mate() {
        let mut pos = Position::new();
        play(&mut pos, Square::F2, Square::F3);
        play(&mut pos, Square::E7, Square::E5);
        play(&mut pos, Square::G2, Square::G4);
        play(&mut pos, Square::D8, Square::H4);

        assert!(pos.is_check());
        assert!(pos.is_checkmate());
        assert!(!pos.is_stalemate());
        assert!(pos.is_game_over());
        assert_eq!(count_legal_moves(&pos), 0);
    }

    #[test]
    fn test_stalemate_is_flagged() {
        let mut board = Board::empty();
        board.set_piece_at(Square::F7, Color::White.king());
        board.set_piece_at(Square::G6, Color::White.queen());
        board.set_piece_at(Square::H8, Color::Black.king());
        let pos = Position::from_setup(board, Color::Black, CastlingRights::empty())
            .expect("valid setup");

        assert!(!pos.is_check());
        assert!(!pos.is_checkmate());
        assert!(pos.is_stalemate());
        assert_eq!(count_legal_moves(&pos), 0);
    }

    #[test]
    fn test_promotion_is_two_phase() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A7, Color::White.pawn());
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        let mut pos = Position::from_setup(board, Color::White, CastlingRights::empty())
            .expect("valid setup");

        play(&mut pos, Square::A7, Square::A8);
        assert_eq!(pos.pending_promotion(), Some(Square::A8));
        // the turn is held until the piece is chosen
        assert_eq!(pos.turn(), Color::White);

        pos.resolve_promotion(Role::Queen);
        assert_eq!(pos.pending_promotion(), None);
        assert_eq!(pos.turn(), Color::Black);
        assert_eq!(pos.board().piece_at(Square::A8), Some(Color::White.queen()));
        // the new queen checks along the eighth rank
        assert!(pos.is_check());
    }

    #[test]
    #[should_panic(expected = "promotion pending")]
    fn test_moving_with_pending_promotion_panics() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A7, Color::White.pawn());
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.king());
        let mut pos = Position::from_setup(board, Color::White, CastlingRights::empty())
            .expect("valid setup");

        play(&mut pos, Square::A7, Square::A8);
        let _ = pos.legal_moves(Square::E8);
    }

    #[test]
    #[should_panic(expected = "no promotion pending")]
    fn test_resolving_without_pending_promotion_panics() {
        let mut pos = Position::new();
        pos.resolve_promotion(Role::Queen);
    }

    #[test]
    fn test_from_setup_rejects_bad_boards() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        assert_eq!(
            Position::from_setup(board.clone(), Color::White, CastlingRights::empty()),
            Err(PositionError::MissingKing {
                color: Color::Black
            })
        );

        board.set_piece_at(Square::E8, Color::Black.king());
        board.set_piece_at(Square::D1, Color::White.pawn());
        assert_eq!(
            Position::from_setup(board, Color::White, CastlingRights::empty()),
            Err(PositionError::PawnsOnBackrank)
        );
    }

    #[test]
    fn test_from_setup_discards_unbacked_rights() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::H1, Color::White.rook());
        board.set_piece_at(Square::E8, Color::Black.king());
        let pos = Position::from_setup(board, Color::White, CastlingRights::all())
            .expect("valid setup");

        assert!(pos.castling_rights().has(Color::White, CastlingSide::KingSide));
        assert!(!pos.castling_rights().has(Color::White, CastlingSide::QueenSide));
        assert!(!pos.castling_rights().has(Color::Black, CastlingSide::KingSide));
    }
}
