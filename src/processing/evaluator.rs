use super::board::{Board, PieceType, Side};
use super::consts::{
    BISHOP_VALUE, FILE_CNT, KNIGHT_VALUE, MyVal, PAWN_VALUE, QUEEN_VALUE, RANK_CNT, ROOK_VALUE,
};

/// Static material balance, positive favoring WHITE. Pure function of the
/// board.
pub fn eval_board(board: &Board) -> MyVal {
    score_side(board, Side::White) - score_side(board, Side::Black)
}

#[inline(always)]
fn count_pieces(board: &Board, side: Side, kind: PieceType) -> MyVal {
    let mut count = 0;
    for row in 0..RANK_CNT as i32 {
        for col in 0..FILE_CNT as i32 {
            if board.get_piece(row, col) == Some(super::board::Piece::new(kind, side)) {
                count += 1;
            }
        }
    }
    count
}

fn score_side(board: &Board, side: Side) -> MyVal {
    let mut sum = 0;

    sum += count_pieces(board, side, PieceType::Queen) * QUEEN_VALUE;
    sum += count_pieces(board, side, PieceType::Rook) * ROOK_VALUE;
    sum += count_pieces(board, side, PieceType::Bishop) * BISHOP_VALUE;
    sum += count_pieces(board, side, PieceType::Knight) * KNIGHT_VALUE;
    sum += count_pieces(board, side, PieceType::Pawn) * PAWN_VALUE;

    //Kings stay out of the material sum, exactly one per side is assumed
    sum
}
