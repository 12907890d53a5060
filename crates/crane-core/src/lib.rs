//! Crane Core -- a crate-stack simulator.
//!
//! Reads a fixed-width drawing of stacked crates, replays `move N from A to
//! B` instructions against it with a crane, and reports the crate on top of
//! every stack.
//!
//! # Pipeline
//!
//! 1. **Diagram** -- [`diagram::parse_diagram`] turns the drawing into a
//!    [`stack::StackCollection`], bottom crate first.
//! 2. **Commands** -- [`command::parse_commands`] turns instruction lines
//!    into [`command::MoveCommand`]s with 0-based stack ids.
//! 3. **Crane** -- [`crane::Crane`] applies the commands under an
//!    [`sim::ExecutionPolicy`]: one crate per lift (the moved group ends up
//!    reversed) or the whole group at once (order preserved).
//! 4. **Report** -- [`stack::StackCollection::top_crates`] reads the answer.
//!
//! ```rust,ignore
//! let stacks = solve::initial_stacks(&drawing)?;
//! let commands = solve::commands(&lines)?;
//! let stacks = solve::simulate(stacks, &commands, ExecutionPolicy::MultiCrateAtomic)?;
//! let answer = stacks.top_string(' ');
//! ```
//!
//! # Key Types
//!
//! - [`stack::Stack`] -- LIFO pile of [`item::Crate`]s.
//! - [`crane::Crane`] -- Simulator state machine (running, then halted).
//! - [`event::EventBus`] -- Listeners and a bounded log of crane events.

pub mod command;
pub mod crane;
pub mod diagram;
pub mod error;
pub mod event;
pub mod item;
pub mod sim;
pub mod solve;
pub mod stack;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
