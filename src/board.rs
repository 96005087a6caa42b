//! The board: an 8x8 grid of optional pieces.
//!
//! `Board` exclusively owns its 64 square slots. Reads off the board return
//! `None` and writes off the board are ignored, so callers never bounds-check
//! first. Cloning yields a fully independent deep copy; legality checking
//! simulates candidate moves on such clones and discards them.

use crate::constants::BOARD_SIZE;
use crate::types::{Piece, PieceColor, PieceKind, Square};

#[derive(Clone)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with the standard starting arrangement.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_pieces();
        board
    }

    /// A board with no pieces, for scripted positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    fn setup_pieces(&mut self) {
        use PieceKind::*;

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, &kind) in back_rank.iter().enumerate() {
            self.squares[0][col] = Some(Piece::new(kind, PieceColor::Black));
            self.squares[7][col] = Some(Piece::new(kind, PieceColor::White));
        }
        for col in 0..8 {
            self.squares[1][col] = Some(Piece::new(Pawn, PieceColor::Black));
            self.squares[6][col] = Some(Piece::new(Pawn, PieceColor::White));
        }
    }

    /// Occupant of `square`, or `None` when empty or off the board.
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    /// Place or clear an occupant. Off-board writes are ignored.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if !square.is_on_board() {
            return;
        }
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Relocate the piece on `from` to `to`, capturing whatever stood there.
    ///
    /// Returns `false` and leaves the board untouched when `from` is empty
    /// or either square is off the board. The relocated piece is marked as
    /// moved. A pawn reaching its far rank is replaced by a queen of the
    /// same color; promotion is always to queen, with no choice offered.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let Some(mut piece) = self.get(from) else {
            return false;
        };

        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
            piece.kind = PieceKind::Queen;
        }

        self.set(to, Some(piece));
        self.set(from, None);
        true
    }

    /// Linear scan for `color`'s king; `None` when absent.
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = Square::new(row, col);
                if let Some(piece) = self.get(square) {
                    if piece.kind == PieceKind::King && piece.color == color {
                        return Some(square);
                    }
                }
            }
        }
        None
    }

    /// Every occupied square of one color, in row-major scan order.
    pub fn pieces_of(&self, color: PieceColor) -> Vec<(Square, Piece)> {
        let mut pieces = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = Square::new(row, col);
                if let Some(piece) = self.get(square) {
                    if piece.color == color {
                        pieces.push((square, piece));
                    }
                }
            }
        }
        pieces
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
