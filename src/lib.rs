pub mod processing;

pub use processing::prelude;
