//! Pawn move generation.
//!
//! Forward pushes need empty squares; the double step only leaves the
//! starting rank with both squares open. Diagonals are capture-only. The
//! en passant capture is not generated here; it depends on the previous
//! move and is handled in `en_passant`.

use crate::board::Board;
use crate::types::{PieceColor, Square};

pub(crate) fn generate_pawn_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    let dir = color.forward();

    let one = from.offset(dir, 0);
    if one.is_on_board() && board.get(one).is_none() {
        moves.push(one);

        if from.row == color.pawn_start_row() {
            let two = from.offset(2 * dir, 0);
            if board.get(two).is_none() {
                moves.push(two);
            }
        }
    }

    for dc in [-1, 1] {
        let target = from.offset(dir, dc);
        if let Some(piece) = board.get(target) {
            if piece.color != color {
                moves.push(target);
            }
        }
    }
}
