//! Queen move generation: the union of rook and bishop rays.

use crate::board::Board;
use crate::move_gen::bishop::generate_bishop_moves;
use crate::move_gen::rook::generate_rook_moves;
use crate::types::{PieceColor, Square};

pub(crate) fn generate_queen_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    generate_rook_moves(board, from, color, moves);
    generate_bishop_moves(board, from, color, moves);
}
