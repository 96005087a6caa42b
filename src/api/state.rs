//! Game-state queries: check, checkmate, stalemate.

use tracing::debug;

use crate::move_gen;
use crate::types::{GameState, PieceColor};

use super::game::Game;

impl Game {
    /// Whether `color`'s king is attacked by the opponent. A color with no
    /// king on the board is never in check.
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        move_gen::is_in_check(&self.board, color)
    }

    /// In check, and no piece of `color` has a legal move.
    pub fn is_checkmate(&self, color: PieceColor) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Not in check, but no piece of `color` has a legal move.
    pub fn is_stalemate(&self, color: PieceColor) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Combined terminal-state query for end-of-game banners.
    pub fn game_state(&self, color: PieceColor) -> GameState {
        if self.has_any_legal_move(color) {
            return GameState::Playing;
        }
        let state = if self.is_in_check(color) {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        };
        debug!(%color, ?state, "terminal state detected");
        state
    }

    fn has_any_legal_move(&self, color: PieceColor) -> bool {
        for (square, _) in self.board.pieces_of(color) {
            if !self.legal_moves(square).is_empty() {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::{Piece, PieceKind, Square};

    #[test]
    fn test_starting_position_is_playing() {
        let game = Game::new();
        assert_eq!(game.game_state(PieceColor::White), GameState::Playing);
        assert_eq!(game.game_state(PieceColor::Black), GameState::Playing);
    }

    #[test]
    fn test_back_rank_mate() {
        // Black king e8 boxed by its own rank; white rook a8, white king
        // e6 covering the escape squares.
        let mut board = Board::empty();
        board.set(
            Square::new(0, 4),
            Some(Piece::new(PieceKind::King, PieceColor::Black)),
        );
        board.set(
            Square::new(0, 0),
            Some(Piece::new(PieceKind::Rook, PieceColor::White)),
        );
        board.set(
            Square::new(2, 4),
            Some(Piece::new(PieceKind::King, PieceColor::White)),
        );
        let game = Game::with_board(board, PieceColor::Black);

        assert!(game.is_in_check(PieceColor::Black));
        assert!(game.is_checkmate(PieceColor::Black));
        assert!(!game.is_stalemate(PieceColor::Black));
        assert_eq!(game.game_state(PieceColor::Black), GameState::Checkmate);
    }

    #[test]
    fn test_cornered_king_stalemate() {
        // Black king a8 with no move, not in check: queen c7 and king b6.
        let mut board = Board::empty();
        board.set(
            Square::new(0, 0),
            Some(Piece::new(PieceKind::King, PieceColor::Black)),
        );
        board.set(
            Square::new(1, 2),
            Some(Piece::new(PieceKind::Queen, PieceColor::White)),
        );
        board.set(
            Square::new(2, 1),
            Some(Piece::new(PieceKind::King, PieceColor::White)),
        );
        let game = Game::with_board(board, PieceColor::Black);

        assert!(!game.is_in_check(PieceColor::Black));
        assert!(game.is_stalemate(PieceColor::Black));
        assert!(!game.is_checkmate(PieceColor::Black));
        assert_eq!(game.game_state(PieceColor::Black), GameState::Stalemate);
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        let mut board = Board::empty();
        board.set(
            Square::new(0, 4),
            Some(Piece::new(PieceKind::King, PieceColor::Black)),
        );
        board.set(
            Square::new(0, 0),
            Some(Piece::new(PieceKind::Rook, PieceColor::White)),
        );
        let game = Game::with_board(board, PieceColor::Black);

        assert!(game.is_in_check(PieceColor::Black));
        assert!(!game.is_checkmate(PieceColor::Black));
        assert_eq!(game.game_state(PieceColor::Black), GameState::Playing);
    }

    #[test]
    fn test_kingless_color_is_never_checkmated() {
        let mut board = Board::empty();
        board.set(
            Square::new(4, 4),
            Some(Piece::new(PieceKind::Queen, PieceColor::White)),
        );
        let game = Game::with_board(board, PieceColor::Black);

        assert!(!game.is_in_check(PieceColor::Black));
        assert!(!game.is_checkmate(PieceColor::Black));
        // No pieces, no moves: the degenerate position reads as stalemate.
        assert!(game.is_stalemate(PieceColor::Black));
    }
}
