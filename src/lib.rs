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

//! A library for two-player chess rules: legal move generation, applying
//! moves, check and checkmate detection, and short algebraic notation.
//!
//! The engine owns one [`Position`] at a time and answers the questions a
//! presentation layer asks: which moves may the piece on this square make,
//! is this release square one of them, what does the board look like after
//! playing it, and how is the move written down. Rendering, input handling
//! and audio are the caller's business.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use sakk::{Position, Square};
//!
//! let pos = Position::new();
//! let total: usize = Square::ALL
//!     .iter()
//!     .map(|&sq| pos.legal_moves(sq).len())
//!     .sum();
//! assert_eq!(total, 20);
//! ```
//!
//! Play moves and describe them:
//!
//! ```
//! use sakk::{find_destination, san::SanPlus, Position, Square};
//!
//! let mut pos = Position::new();
//!
//! // 1. e4
//! let moves = pos.legal_moves(Square::E2);
//! let m = find_destination(&moves, Square::E4).expect("legal destination");
//! assert_eq!(SanPlus::from_move(&pos, &m).to_string(), "e4");
//! pos.play(&m)?;
//! # Ok::<_, sakk::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use sakk::Position;
//!
//! let pos = Position::new();
//! assert!(!pos.is_check());
//! assert!(!pos.is_checkmate());
//! assert!(!pos.is_stalemate());
//! ```
//!
//! A pawn reaching the far rank leaves the position awaiting a promotion
//! piece; supply one with [`Position::resolve_promotion`] before playing
//! on.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html)
//!   for the engine types, so save and resume can be layered on top of
//!   [`Position`].

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod attacks;
mod board;
mod castling;
mod color;
mod history;
mod movegen;
mod movelist;
mod perft;
mod position;
mod role;
pub mod san;
mod square;
mod types;

pub use crate::{
    board::Board,
    castling::{CastlingRights, CastlingSide},
    color::Color,
    history::{History, MAX_SNAPSHOTS},
    movelist::{find_destination, MoveList},
    perft::perft,
    position::{PlayError, Position, PositionError},
    role::Role,
    square::{File, Rank, Square},
    types::{Move, MoveKind, Piece},
};
