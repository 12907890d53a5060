pub mod config;
pub mod loader;
pub mod puzzle;

pub use config::{CraneConfig, load_config};
pub use loader::DataLoadError;
pub use puzzle::{PuzzleAnswer, PuzzleInput, solve, solve_file};
