use super::board::{Board, Piece, PieceType, Position, Side};
use super::consts::{FILE_CNT, KING_VALUE, RANK_CNT};
use super::piece_handles::Successor;

impl Board {
    /// All successors reachable by one move of `side`, scanning squares in
    /// row-major order and keeping each piece's moves in generator order.
    pub fn get_all_moves_for(&self, side: Side) -> Vec<Successor> {
        let mut all_moves: Vec<Successor> = Vec::new();

        for row in 0..RANK_CNT as i32 {
            for col in 0..FILE_CNT as i32 {
                if let Some(piece) = self.get_piece(row, col) {
                    if piece.color != side {
                        continue;
                    }
                    all_moves.extend(piece.get_valid_moves(self, Position::from_grid(col, row)));
                }
            }
        }

        all_moves
    }

    /// Whether `side` has a move that takes the enemy king right now.
    pub fn can_capture_king(&self, side: Side) -> bool {
        self.get_all_moves_for(side)
            .iter()
            .any(|succ| succ.captured == KING_VALUE)
    }

    /// King-escape probe used as the terminal test: the king opposing
    /// `side_to_move` is trapped when every square it can step to still
    /// leaves it capturable on the next ply. A king that is already off
    /// the board counts as trapped.
    ///
    /// Known deviation from real chess: the probe never asks whether the
    /// king is attacked where it stands, so a cornered-but-safe king is
    /// reported as trapped, and blocking moves by other pieces are not
    /// considered.
    pub fn opponent_king_trapped(&self, side_to_move: Side) -> bool {
        let defender = side_to_move.opposite();
        let king_pos = match self.find_king(defender) {
            Some(pos) => pos,
            None => return true,
        };

        let king = Piece::new(PieceType::King, defender);
        king.get_valid_moves(self, king_pos)
            .iter()
            .all(|escape| escape.board.can_capture_king(side_to_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of squares on which the two boards disagree.
    fn squares_changed(a: &Board, b: &Board) -> usize {
        let mut changed = 0;
        for row in 0..RANK_CNT as i32 {
            for col in 0..FILE_CNT as i32 {
                if a.get_piece(row, col) != b.get_piece(row, col) {
                    changed += 1;
                }
            }
        }
        changed
    }

    #[test]
    fn lone_pawn_board_has_exactly_one_successor() {
        let mut board = Board::empty();
        board.set_piece(5, 6, Piece::new(PieceType::Pawn, Side::White));

        let moves = board.get_all_moves_for(Side::White);

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].captured, 0);
        assert_eq!(
            moves[0].board.get_piece(4, 6),
            Some(Piece::new(PieceType::Pawn, Side::White))
        );
    }

    #[test]
    fn sides_with_no_pieces_have_no_moves() {
        assert!(Board::empty().get_all_moves_for(Side::White).is_empty());

        let mut board = Board::empty();
        board.set_piece(3, 3, Piece::new(PieceType::Rook, Side::White));
        assert!(board.get_all_moves_for(Side::Black).is_empty());
    }

    #[test]
    fn scan_order_is_row_major() {
        let mut board = Board::empty();
        board.set_piece(1, 7, Piece::new(PieceType::Pawn, Side::White));
        board.set_piece(6, 0, Piece::new(PieceType::Pawn, Side::White));

        let moves = board.get_all_moves_for(Side::White);

        assert_eq!(moves.len(), 2);
        // The row-1 pawn was scanned first
        assert_eq!(
            moves[0].board.get_piece(0, 7),
            Some(Piece::new(PieceType::Pawn, Side::White))
        );
    }

    #[test]
    fn every_successor_changes_exactly_two_squares() {
        let board = Board::parse(&[
            "________",
            "___K____",
            "__R_P___",
            "_P_kr___",
            "___Npb__",
            "____P___",
            "________",
            "_____N__",
        ])
        .unwrap();

        for side in [Side::White, Side::Black] {
            for succ in board.get_all_moves_for(side) {
                // Origin cleared, destination rewritten, nothing else
                assert_eq!(squares_changed(&board, &succ.board), 2);
            }
        }
    }

    #[test]
    fn capturing_side_aggregates_the_capture_value() {
        let mut board = Board::empty();
        board.set_piece(3, 3, Piece::new(PieceType::Rook, Side::White));
        board.set_piece(3, 6, Piece::new(PieceType::Queen, Side::Black));

        let captures: Vec<_> = board
            .get_all_moves_for(Side::White)
            .into_iter()
            .filter(|m| m.captured > 0)
            .collect();

        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].captured, PieceType::Queen.value());
    }

    #[test]
    fn missing_king_counts_as_trapped() {
        let mut board = Board::empty();
        board.set_piece(7, 4, Piece::new(PieceType::King, Side::White));
        // No black king anywhere
        assert!(board.opponent_king_trapped(Side::White));
    }

    #[test]
    fn king_with_a_safe_square_is_not_trapped() {
        let mut board = Board::empty();
        board.set_piece(3, 3, Piece::new(PieceType::King, Side::Black));
        board.set_piece(7, 0, Piece::new(PieceType::Rook, Side::White));

        assert!(!board.opponent_king_trapped(Side::White));
    }

    #[test]
    fn king_covered_on_every_escape_is_trapped() {
        let mut board = Board::empty();
        board.set_piece(0, 0, Piece::new(PieceType::King, Side::Black));
        // Rooks sweep row 1 and col 1; (0,0) itself is never attacked,
        // the probe still calls this mate.
        board.set_piece(1, 7, Piece::new(PieceType::Rook, Side::White));
        board.set_piece(7, 1, Piece::new(PieceType::Rook, Side::White));

        assert!(board.opponent_king_trapped(Side::White));
    }

    #[test]
    fn king_with_no_moves_at_all_is_trapped() {
        let mut board = Board::empty();
        board.set_piece(0, 0, Piece::new(PieceType::King, Side::Black));
        board.set_piece(0, 1, Piece::new(PieceType::Pawn, Side::Black));
        board.set_piece(1, 0, Piece::new(PieceType::Pawn, Side::Black));
        board.set_piece(1, 1, Piece::new(PieceType::Pawn, Side::Black));

        // Boxed in by its own pawns: no escape moves exist, so the probe
        // is vacuously positive even though nothing attacks the king.
        assert!(board.opponent_king_trapped(Side::White));
    }
}
