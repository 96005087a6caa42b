//! Legal move computation and the move entry point.

use tracing::{debug, trace};

use crate::error::MoveError;
use crate::move_gen;
use crate::types::{MoveRecord, PieceKind, Square};

use super::game::Game;

impl Game {
    /// Legal destinations for the piece on `square`; empty when the square
    /// is empty or off the board.
    ///
    /// Each geometric candidate is simulated on a cloned board and kept
    /// only if the mover's own king is not attacked afterwards (a missing
    /// king counts as safe). Castling candidates join the set for an
    /// unmoved king, validated by the path rule rather than by simulation;
    /// en passant candidates are simulated with the passed pawn removed.
    ///
    /// The query ignores whose turn it is; `make_move` enforces the turn.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        let Some(piece) = self.board.get(square) else {
            return Vec::new();
        };

        let mut moves: Vec<Square> = move_gen::moves_for(&self.board, square)
            .into_iter()
            .filter(|&to| self.keeps_own_king_safe(square, to, false))
            .collect();

        if piece.kind == PieceKind::King && !piece.has_moved {
            moves.extend(move_gen::castling_moves(&self.board, square));
        }

        if piece.kind == PieceKind::Pawn {
            for to in move_gen::en_passant_moves(&self.board, self.last_move.as_ref(), square) {
                if self.keeps_own_king_safe(square, to, true) {
                    moves.push(to);
                }
            }
        }

        moves
    }

    /// Apply the candidate on a clone and test whether the mover's king
    /// survives unattacked. The clone is discarded either way.
    fn keeps_own_king_safe(&self, from: Square, to: Square, en_passant: bool) -> bool {
        let Some(piece) = self.board.get(from) else {
            return false;
        };

        let mut sim = self.board.clone();
        if en_passant {
            move_gen::apply_en_passant(&mut sim, from, to);
        } else {
            sim.move_piece(from, to);
        }

        match sim.find_king(piece.color) {
            Some(king_square) => !move_gen::is_square_attacked(&sim, king_square, piece.color),
            None => true,
        }
    }

    /// Attempt a move, naming the reason when it is rejected.
    ///
    /// A rejected request leaves the game untouched and the turn never
    /// flips on failure. On success the applicable handler runs (castling,
    /// en passant, or the generic relocation, in that order), the move is
    /// recorded, and the turn passes to the opponent.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;

        if piece.color != self.turn {
            return Err(MoveError::WrongPieceColor {
                square: from,
                color: self.turn,
            });
        }

        if !self.legal_moves(from).contains(&to) {
            trace!(%from, %to, "rejected move request");
            return Err(MoveError::InvalidMove { from, to });
        }

        if move_gen::is_castling_move(&self.board, from, to) {
            move_gen::apply_castling(&mut self.board, from, to);
        } else if move_gen::is_en_passant_move(&self.board, self.last_move.as_ref(), from, to) {
            move_gen::apply_en_passant(&mut self.board, from, to);
        } else {
            self.board.move_piece(from, to);
        }

        let record = MoveRecord { from, to, piece };
        self.last_move = Some(record);
        self.history.push(record);
        self.turn = self.turn.opposite();
        debug!(%from, %to, kind = ?piece.kind, "move accepted");
        Ok(())
    }

    /// The sole mutation entry point for the presentation layer: `true` and
    /// the turn flips, or `false` and nothing changed.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_ok()
    }
}
