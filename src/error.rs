//! Error types for move requests.
//!
//! [`Game::try_move`](crate::Game::try_move) names the reason a request was
//! rejected; [`Game::make_move`](crate::Game::make_move) collapses the
//! result to the boolean the presentation layer consumes. A rejected
//! request never mutates any game state.

use thiserror::Error;

use crate::types::{PieceColor, Square};

/// Why a move request was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece at the source square
    #[error("no piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// The piece at the source square belongs to the side not on turn
    #[error("piece at {square} does not belong to {color}, whose turn it is")]
    WrongPieceColor { square: Square, color: PieceColor },

    /// The destination is not among the legal moves for the source piece
    #[error("invalid move: from square {from} to square {to}")]
    InvalidMove { from: Square, to: Square },
}
