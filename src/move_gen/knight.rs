//! Knight move generation. Knights jump, so only the destination matters.

use crate::board::Board;
use crate::constants::KNIGHT_JUMPS;
use crate::move_gen::can_move_to;
use crate::types::{PieceColor, Square};

pub(crate) fn generate_knight_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in &KNIGHT_JUMPS {
        let to = from.offset(dr, dc);
        if can_move_to(board, to, color) {
            moves.push(to);
        }
    }
}
