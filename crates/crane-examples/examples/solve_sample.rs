//! Solve a crate-stacking puzzle with every configured crane policy.
//!
//! Reads the puzzle from the first argument (default: the bundled sample)
//! and the config from the directory given as the second argument (default:
//! built-in defaults), then prints one answer per policy.
//!
//! Run with: `cargo run -p crane-examples --example solve_sample [INPUT] [CONFIG_DIR]`

use std::error::Error;
use std::path::PathBuf;

use crane_data::{CraneConfig, PuzzleInput, load_config, solve};

fn main() {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../crane-data/data");
    let mut args = std::env::args().skip(1);
    let input_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("sample.txt"));
    let config = match args.next() {
        Some(dir) => load_config(&PathBuf::from(dir)).unwrap(),
        None => CraneConfig::default(),
    };

    let input = PuzzleInput::load(&input_path).unwrap();
    println!(
        "{}: {} drawing lines, {} commands\n",
        input_path.display(),
        input.drawing.len(),
        input.commands.len()
    );

    match solve(&input, &config) {
        Ok(answers) => {
            for (part, answer) in answers.iter().enumerate() {
                println!(
                    "Part {} ({:?}): {}  [{} crates moved]",
                    part + 1,
                    answer.policy,
                    answer.answer,
                    answer.crates_moved
                );
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
