use minichess_lib::processing::debug::{SearchDebugger, Trace, Tracing};
use minichess_lib::processing::fixtures::{INITIAL_STATE_A, INITIAL_STATE_B, INITIAL_STATE_C};
use minichess_lib::processing::searching::MySearcher;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut searcher: MySearcher<Trace<SearchDebugger>> = MySearcher::new(Trace::new());

    let positions = [
        ("A", &*INITIAL_STATE_A),
        ("B", &*INITIAL_STATE_B),
        ("C", &*INITIAL_STATE_C),
    ];

    for (name, board) in positions {
        println!("Initial State {name}");
        println!("{board}");

        let result = searcher.find_best_move(board);
        match result.best {
            Some(successor) => {
                println!(
                    "Best move for WHITE (score {}, traversed {}, captured {})",
                    result.score, successor.distance, successor.captured
                );
                println!("{}", successor.board);
            }
            None => {
                println!("No move available for WHITE (score {})", result.score);
            }
        }
    }

    if let Some(debugger) = searcher.tracer().trace() {
        println!("{debugger}");
    }
}
