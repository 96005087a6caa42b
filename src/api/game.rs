//! Game lifecycle and read access.

use crate::board::Board;
use crate::types::{MoveRecord, Piece, PieceColor, Square};

/// One game of chess: the board, whose turn it is, and the record of the
/// last accepted move, which decides en passant eligibility.
///
/// A `Game` exclusively owns its board and mutates it in place; there is no
/// terminal state to transition into; checkmate and stalemate are detected
/// by the state queries, not stored.
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: PieceColor,
    pub(crate) last_move: Option<MoveRecord>,
    pub(crate) history: Vec<MoveRecord>,
}

impl Game {
    /// A fresh game from the standard starting arrangement. White moves
    /// first.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: PieceColor::White,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// A game over a scripted position, for board-setup experimentation.
    pub fn with_board(board: Board, turn: PieceColor) -> Self {
        Game {
            board,
            turn,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Restore the standard starting arrangement and hand the move to White.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of `square`, for rendering. Off-board reads return `None`.
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// The last accepted move, for highlighting.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Every accepted move, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
