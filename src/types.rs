//! Core value types shared across the engine.
//!
//! A [`Square`] addresses one of the 64 board cells by (row, column), row 0
//! being Black's home rank. A [`Piece`] carries its kind, color, and a
//! `has_moved` flag consulted for castling eligibility. [`MoveRecord`]
//! snapshots an accepted move; the most recent record is what decides
//! en passant eligibility.
//!
//! Everything here is a small `Copy` value with serde derives, so a
//! presentation or transport layer can ship engine outputs directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// One board cell, addressed by (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Whether both coordinates lie in `[0, 8)`.
    pub fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// This square shifted by (dr, dc). The result may be off the board;
    /// callers check with [`Square::is_on_board`] or read through the board,
    /// which treats off-board squares as empty.
    pub fn offset(self, dr: i8, dc: i8) -> Square {
        Square::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Piece color. White moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Pawn advance direction as a row delta: White marches toward row 0,
    /// Black toward row 7.
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Rank this color's pawns start on, where the double step is allowed.
    pub fn pawn_start_row(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Far rank where this color's pawns promote.
    pub fn promotion_row(self) -> i8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

/// The six piece kinds, a closed set dispatched on in `move_gen`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece as it stands on the board. `has_moved` matters for rooks and
/// kings (castling eligibility) and is tracked for every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// An accepted move: the two squares and the moved piece as it stood
/// before the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl MoveRecord {
    /// Whether this was a pawn double step, the move en passant answers.
    pub fn is_double_pawn_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && (self.to.row - self.from.row).abs() == 2
    }
}

/// Terminal-state answer for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Checkmate,
    Stalemate,
}
