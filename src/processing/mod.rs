pub mod board;
pub mod board_handles;
pub mod consts;
pub mod debug;
pub mod evaluator;
pub mod fixtures;
pub mod piece_handles;
pub mod searching;

pub mod prelude {
    // easier exporting
    pub use super::board;
    pub use super::consts;
    pub use super::debug;
    pub use super::evaluator;
    pub use super::fixtures;
    pub use super::piece_handles;
    pub use super::searching;
}
