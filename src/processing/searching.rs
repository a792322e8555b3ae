use std::time::Instant;

use tracing::debug;

use super::board::{Board, Side};
use super::consts::{INFINITE, MATE, MAX_DEPTH, MyVal, NEG_INFINITE};
use super::debug::{SearchDebugger, Tracing};
use super::evaluator::eval_board;
use super::piece_handles::Successor;

/// Why a branch stops recursing.
pub struct Cutoff {
    pub depth_limit: bool,
    pub checkmate: bool,
}

/// Terminal test for one node. `depth` counts plies from 1 at the root;
/// the depth limit fires exactly at `max_depth`. The checkmate flag refers
/// to the king opposing `side_to_move`.
pub fn cutoff_test(board: &Board, depth: u8, side_to_move: Side, max_depth: u8) -> Cutoff {
    Cutoff {
        depth_limit: depth == max_depth,
        checkmate: board.opponent_king_trapped(side_to_move),
    }
}

/// Outcome of one root search. `best` is `None` when the side to move has
/// no legal move, or when the root position is already terminal; callers
/// must check before applying the board.
pub struct SearchResult {
    pub score: MyVal,
    pub best: Option<Successor>,
    pub nodes_explored: i64,
}

/// Depth-limited alpha-beta searcher. WHITE is always the maximizing side
/// and the side whose move is chosen at the root.
pub struct MySearcher<T: Tracing<SearchDebugger>> {
    max_depth: u8,
    start_time: Instant,

    //Debug
    tracer: T,
    nodes_explored: i64,
}

impl<T: Tracing<SearchDebugger>> MySearcher<T> {
    pub fn new(tracer: T) -> Self {
        Self::with_depth(tracer, MAX_DEPTH)
    }

    pub fn with_depth(tracer: T, max_depth: u8) -> Self {
        Self {
            max_depth,
            start_time: Instant::now(),
            tracer,
            nodes_explored: 0,
        }
    }

    pub fn tracer(&mut self) -> &mut T {
        &mut self.tracer
    }

    /// Root entry point: finds WHITE's best move from `board`.
    pub fn find_best_move(&mut self, board: &Board) -> SearchResult {
        self.start_time = Instant::now();
        self.nodes_explored = 0;

        let (score, best) = self.max_value(board, NEG_INFINITE, INFINITE, 1);

        let elapsed = self.start_time.elapsed();
        if let Some(debugger) = self.tracer.trace() {
            debugger.add_search(self.max_depth, score, self.nodes_explored, elapsed);
        }
        debug!(
            score,
            nodes_explored = self.nodes_explored,
            elapsed_ms = elapsed.as_millis() as u64,
            "search complete"
        );

        SearchResult {
            score,
            best,
            nodes_explored: self.nodes_explored,
        }
    }

    fn max_value(
        &mut self,
        board: &Board,
        mut alpha: MyVal,
        beta: MyVal,
        depth: u8,
    ) -> (MyVal, Option<Successor>) {
        self.nodes_explored += 1;

        let cutoff = cutoff_test(board, depth, Side::White, self.max_depth);
        if cutoff.checkmate {
            //Mate score decays with depth so shallower mates win
            return (MATE / depth as MyVal, None);
        }
        if cutoff.depth_limit {
            return (eval_board(board), None);
        }

        let mut value = NEG_INFINITE;
        let mut chosen: Option<Successor> = None;

        for successor in board.get_all_moves_for(Side::White) {
            let (child_value, _) = self.min_value(&successor.board, alpha, beta, depth + 1);

            //Strict improvement only: ties keep the earliest move found
            if child_value > value {
                value = child_value;
                chosen = Some(successor);
            }
            if value >= beta {
                return (value, chosen);
            }
            if value > alpha {
                alpha = value;
            }
        }

        (value, chosen)
    }

    fn min_value(
        &mut self,
        board: &Board,
        alpha: MyVal,
        mut beta: MyVal,
        depth: u8,
    ) -> (MyVal, Option<Successor>) {
        self.nodes_explored += 1;

        let cutoff = cutoff_test(board, depth, Side::Black, self.max_depth);
        if cutoff.checkmate {
            return (-MATE / depth as MyVal, None);
        }
        if cutoff.depth_limit {
            return (eval_board(board), None);
        }

        let mut value = INFINITE;
        let mut chosen: Option<Successor> = None;

        for successor in board.get_all_moves_for(Side::Black) {
            let (child_value, _) = self.max_value(&successor.board, alpha, beta, depth + 1);

            if child_value < value {
                value = child_value;
                chosen = Some(successor);
            }
            if value <= alpha {
                return (value, chosen);
            }
            if value < beta {
                beta = value;
            }
        }

        (value, chosen)
    }
}
