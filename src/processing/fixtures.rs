use lazy_static::lazy_static;

use super::board::Board;

lazy_static! {
    /// The three canonical starting positions. Upper case pieces are WHITE
    /// and move toward row 0, lower case are BLACK and move toward row 7.
    pub static ref INITIAL_STATE_A: Board = Board::parse(&[
        "______qk",
        "________",
        "_____P_p",
        "________",
        "________",
        "______QP",
        "_____PP_",
        "____R_K_",
    ])
    .expect("initial state A is well formed");

    pub static ref INITIAL_STATE_B: Board = Board::parse(&[
        "__B_____",
        "________",
        "___K____",
        "_p______",
        "__k_____",
        "P____P__",
        "_B______",
        "N____N__",
    ])
    .expect("initial state B is well formed");

    pub static ref INITIAL_STATE_C: Board = Board::parse(&[
        "________",
        "___K____",
        "__R_P___",
        "_P_kr___",
        "___Npb__",
        "____P___",
        "________",
        "_____N__",
    ])
    .expect("initial state C is well formed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::board::{PieceType, Side};

    #[test]
    fn every_fixture_has_both_kings() {
        for board in [&*INITIAL_STATE_A, &*INITIAL_STATE_B, &*INITIAL_STATE_C] {
            assert!(board.find_king(Side::White).is_some());
            assert!(board.find_king(Side::Black).is_some());
        }
    }

    #[test]
    fn fixture_a_matches_the_expected_layout() {
        let board = &*INITIAL_STATE_A;
        let queen = board.get_piece(5, 6).unwrap();
        assert_eq!(queen.kind, PieceType::Queen);
        assert_eq!(queen.color, Side::White);

        let black_queen = board.get_piece(0, 6).unwrap();
        assert_eq!(black_queen.kind, PieceType::Queen);
        assert_eq!(black_queen.color, Side::Black);
    }
}
