//! Rules engine for standard chess.
//!
//! Determines the legal moves for a position, applies chosen moves
//! (including castling, en passant, and auto-queen promotion), and detects
//! check, checkmate, and stalemate. The engine validates moves; it does not
//! pick them, parse notation, keep time, or persist anything.
//!
//! A presentation layer drives the engine through [`Game`]:
//!
//! ```
//! use chess_rules::{Game, Square};
//!
//! let mut game = Game::new();
//! let targets = game.legal_moves(Square::new(6, 4));
//! assert!(game.make_move(Square::new(6, 4), Square::new(4, 4)));
//! assert!(!game.is_in_check(chess_rules::PieceColor::Black));
//! # let _ = targets;
//! ```
//!
//! Squares are (row, column) pairs with row 0 as Black's home rank, so the
//! move above is White's pawn from e2 to e4. Legality checking simulates
//! every candidate on a cloned board; the live position is never touched by
//! a query, and a rejected [`Game::make_move`] is fully inert.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;

pub use api::Game;
pub use board::Board;
pub use error::MoveError;
pub use types::{GameState, MoveRecord, Piece, PieceColor, PieceKind, Square};
