//! Watch a crane work through the sample puzzle.
//!
//! Registers a listener that prints every crate as it lands and keeps the
//! tail of the run's events. Finishes by drawing the final stacks.
//!
//! Run with: `cargo run -p crane-examples --example crane_trace`

use std::path::PathBuf;

use crane_core::crane::Crane;
use crane_core::diagram::render_diagram;
use crane_core::event::{CraneEvent, EventKind};
use crane_core::sim::ExecutionPolicy;
use crane_core::solve;
use crane_data::PuzzleInput;

fn main() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../crane-data/data/sample.txt");
    let input = PuzzleInput::load(&path).unwrap();
    let commands = solve::commands(&input.commands).unwrap();

    for policy in ExecutionPolicy::ALL {
        println!("=== {policy:?} ===\n");

        let stacks = solve::initial_stacks(&input.drawing).unwrap();
        for line in render_diagram(&stacks) {
            println!("  {line}");
        }
        println!();

        let mut crane = Crane::with_event_capacity(stacks, policy, 8);
        crane.on_event(
            EventKind::CrateMoved,
            Box::new(|event: &CraneEvent| {
                if let CraneEvent::CrateMoved { item, from, to, .. } = event {
                    println!("    {item}: {from} -> {to}");
                }
            }),
        );

        for command in &commands {
            println!("  {command}");
            crane.apply(command).unwrap();
        }
        crane.finish();

        println!(
            "\n  events: {} kept, {} evicted",
            crane.events().len(),
            crane.events_evicted()
        );
        if let Some(CraneEvent::RunCompleted { commands_applied }) = crane.events().back() {
            println!("  run completed after {commands_applied} commands");
        }

        println!();
        for line in render_diagram(crane.stacks()) {
            println!("  {line}");
        }
        println!("\n  top crates: {}\n", crane.stacks().top_string(' '));
    }
}
