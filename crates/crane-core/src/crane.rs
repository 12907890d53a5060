//! The crane simulator.
//!
//! A [`Crane`] owns a [`StackCollection`] for the duration of one run and
//! applies [`MoveCommand`]s to it in order under a fixed
//! [`ExecutionPolicy`].
//!
//! # Failure semantics
//!
//! Every command is validated before any crate moves: both stack indices
//! must exist and the source must hold at least `count` crates. A rejected
//! command therefore moves nothing. Commands applied before it stay
//! applied, and the crane halts; later commands are refused with
//! [`CraneError::Halted`].

use std::collections::VecDeque;

use crate::command::MoveCommand;
use crate::error::CraneError;
use crate::event::{CraneEvent, EventBus, EventKind, EventListener};
use crate::item::Crate;
use crate::sim::{CraneState, ExecutionPolicy, HaltReason};
use crate::stack::StackCollection;

// ---------------------------------------------------------------------------
// Crane
// ---------------------------------------------------------------------------

/// Applies move commands to a stack collection it exclusively owns.
#[derive(Debug)]
pub struct Crane {
    stacks: StackCollection,
    policy: ExecutionPolicy,
    state: CraneState,
    commands_applied: usize,
    crates_moved: u64,
    events: EventBus,
    /// Crates currently held by a multi-crate lift, top-most first.
    lift: Vec<Crate>,
}

impl Crane {
    /// Create a running crane. Events go to listeners only.
    pub fn new(stacks: StackCollection, policy: ExecutionPolicy) -> Self {
        Self::with_event_capacity(stacks, policy, 0)
    }

    /// Create a running crane that buffers up to `capacity` events.
    pub fn with_event_capacity(
        stacks: StackCollection,
        policy: ExecutionPolicy,
        capacity: usize,
    ) -> Self {
        Self {
            stacks,
            policy,
            state: CraneState::Running,
            commands_applied: 0,
            crates_moved: 0,
            events: EventBus::new(capacity),
            lift: Vec::new(),
        }
    }

    /// Apply one command.
    ///
    /// On failure the crane halts and nothing from this command is applied.
    pub fn apply(&mut self, command: &MoveCommand) -> Result<(), CraneError> {
        if !self.state.is_running() {
            return Err(CraneError::Halted);
        }

        let command_index = self.commands_applied;
        if let Err(err) = self.transfer(command_index, command) {
            let kind = err.kind();
            self.state = CraneState::Halted(HaltReason::Failed {
                command_index,
                kind,
            });
            self.events.emit(CraneEvent::RunFailed {
                command_index,
                kind,
            });
            return Err(err);
        }

        self.commands_applied += 1;
        self.events.emit(CraneEvent::CommandApplied {
            command_index,
            command: *command,
        });
        Ok(())
    }

    /// Apply every command in order, then mark the run completed.
    ///
    /// Stops at the first failing command.
    pub fn run<'a, I>(&mut self, commands: I) -> Result<(), CraneError>
    where
        I: IntoIterator<Item = &'a MoveCommand>,
    {
        for command in commands {
            self.apply(command)?;
        }
        self.finish();
        Ok(())
    }

    /// Mark a running crane as completed. No effect once halted.
    pub fn finish(&mut self) {
        if self.state.is_running() {
            self.state = CraneState::Halted(HaltReason::Completed);
            self.events.emit(CraneEvent::RunCompleted {
                commands_applied: self.commands_applied,
            });
        }
    }

    fn transfer(&mut self, command_index: usize, command: &MoveCommand) -> Result<(), CraneError> {
        let available = self.stacks.stack(command.source)?.size();
        self.stacks.stack(command.dest)?;
        if command.count > available {
            return Err(CraneError::EmptyStack {
                requested: command.count,
                available,
            });
        }

        // Source and destination are the same stack: the crates end up
        // where they started under either policy.
        let Some((from, to)) = self.stacks.pair_mut(command.source, command.dest) else {
            return Ok(());
        };

        let notify = self.events.wants(EventKind::CrateMoved);
        let mut set_down = |item: Crate| {
            to.push(item);
            if notify {
                self.events.emit(CraneEvent::CrateMoved {
                    command_index,
                    item,
                    from: command.source,
                    to: command.dest,
                });
            }
        };

        match self.policy {
            ExecutionPolicy::SingleCrateAtATime => {
                for _ in 0..command.count {
                    set_down(from.pop()?);
                }
            }
            ExecutionPolicy::MultiCrateAtomic => {
                for _ in 0..command.count {
                    self.lift.push(from.pop()?);
                }
                while let Some(item) = self.lift.pop() {
                    set_down(item);
                }
            }
        }

        self.crates_moved += command.count as u64;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn state(&self) -> CraneState {
        self.state
    }

    pub fn policy(&self) -> ExecutionPolicy {
        self.policy
    }

    pub fn stacks(&self) -> &StackCollection {
        &self.stacks
    }

    /// Give up the crane and return its stacks in their current state.
    pub fn into_stacks(self) -> StackCollection {
        self.stacks
    }

    /// Number of commands applied successfully.
    pub fn commands_applied(&self) -> usize {
        self.commands_applied
    }

    /// Number of crates set down on a different stack.
    pub fn crates_moved(&self) -> u64 {
        self.crates_moved
    }

    pub fn top_crates(&self) -> Vec<Option<Crate>> {
        self.stacks.top_crates()
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Logged events, oldest first. Always empty for a crane built
    /// without an event capacity.
    pub fn events(&self) -> &VecDeque<CraneEvent> {
        self.events.log()
    }

    /// Events pushed out of a full log.
    pub fn events_evicted(&self) -> u64 {
        self.events.evicted()
    }

    pub fn on_event(&mut self, kind: EventKind, listener: EventListener) {
        self.events.on(kind, listener);
    }

    pub fn suppress_event(&mut self, kind: EventKind) {
        self.events.suppress(kind);
    }
}

// ---------------------------------------------------------------------------
// One-shot simulation
// ---------------------------------------------------------------------------

/// A failed run: the rejected command, why, and the stacks as they stood
/// when the crane halted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("command {} ({command}) failed", .command_index + 1)]
pub struct RunFailure {
    /// 0-based position of the rejected command.
    pub command_index: usize,
    pub command: MoveCommand,
    #[source]
    pub error: CraneError,
    /// Every command before `command_index` has been applied.
    pub stacks: StackCollection,
}

/// Run `commands` against `stacks` and return the mutated collection.
pub fn simulate(
    stacks: StackCollection,
    commands: &[MoveCommand],
    policy: ExecutionPolicy,
) -> Result<StackCollection, RunFailure> {
    let mut crane = Crane::new(stacks, policy);
    match crane.run(commands) {
        Ok(()) => Ok(crane.into_stacks()),
        Err(error) => {
            let command_index = crane.commands_applied();
            Err(RunFailure {
                command_index,
                command: commands[command_index],
                error,
                stacks: crane.into_stacks(),
            })
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::item::StackId;
    use crate::test_utils::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mv(count: usize, source: usize, dest: usize) -> MoveCommand {
        MoveCommand::new(count, StackId(source - 1), StackId(dest - 1))
    }

    #[test]
    fn sample_single_crate() {
        let commands = sample_move_commands();
        let policy = ExecutionPolicy::SingleCrateAtATime;
        let stacks = simulate(sample_stacks(), &commands, policy).unwrap();
        assert_eq!(stacks.top_string(' '), "CMZ");
    }

    #[test]
    fn sample_multi_crate() {
        let commands = sample_move_commands();
        let policy = ExecutionPolicy::MultiCrateAtomic;
        let stacks = simulate(sample_stacks(), &commands, policy).unwrap();
        assert_eq!(stacks.top_string(' '), "MCD");
    }

    #[test]
    fn single_crate_reverses_group() {
        let stacks = stacks_from_columns(&["ABC", ""]);
        let result = simulate(stacks, &[mv(3, 1, 2)], ExecutionPolicy::SingleCrateAtATime).unwrap();
        assert_eq!(columns(&result), vec!["", "CBA"]);
    }

    #[test]
    fn multi_crate_preserves_group() {
        let stacks = stacks_from_columns(&["ABC", "X"]);
        let result = simulate(stacks, &[mv(2, 1, 2)], ExecutionPolicy::MultiCrateAtomic).unwrap();
        assert_eq!(columns(&result), vec!["A", "XBC"]);
    }

    #[test]
    fn insufficient_crates_moves_nothing() {
        let stacks = stacks_from_columns(&["AB", "C"]);
        let mut crane = Crane::new(stacks.clone(), ExecutionPolicy::SingleCrateAtATime);
        let err = crane.apply(&mv(10, 1, 2)).unwrap_err();
        assert_eq!(
            err,
            CraneError::EmptyStack {
                requested: 10,
                available: 2
            }
        );
        assert_eq!(crane.stacks(), &stacks);
        assert_eq!(crane.crates_moved(), 0);
    }

    #[test]
    fn out_of_range_stack_fails() {
        let mut crane = Crane::new(
            stacks_from_columns(&["A", "B"]),
            ExecutionPolicy::MultiCrateAtomic,
        );
        let err = crane.apply(&mv(1, 1, 3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

        let mut crane = Crane::new(
            stacks_from_columns(&["A", "B"]),
            ExecutionPolicy::MultiCrateAtomic,
        );
        let err = crane.apply(&mv(1, 9, 1)).unwrap_err();
        assert_eq!(
            err,
            CraneError::IndexOutOfRange {
                stack: StackId(8),
                len: 2
            }
        );
    }

    #[test]
    fn failure_halts_the_crane() {
        let mut crane = Crane::new(
            stacks_from_columns(&["A", ""]),
            ExecutionPolicy::SingleCrateAtATime,
        );
        crane.apply(&mv(1, 1, 2)).unwrap();
        assert!(crane.apply(&mv(1, 1, 2)).is_err());
        assert_eq!(
            crane.state(),
            CraneState::Halted(HaltReason::Failed {
                command_index: 1,
                kind: ErrorKind::EmptyStack
            })
        );
        // A valid command is refused after the failure.
        assert_eq!(crane.apply(&mv(1, 2, 1)), Err(CraneError::Halted));
        assert_eq!(crane.commands_applied(), 1);
    }

    #[test]
    fn run_marks_completion() {
        let mut crane = Crane::new(sample_stacks(), ExecutionPolicy::SingleCrateAtATime);
        crane.run(&sample_move_commands()).unwrap();
        assert!(crane.state().is_completed());
        assert_eq!(crane.commands_applied(), 4);
        assert_eq!(crane.crates_moved(), 7);
        assert_eq!(crane.apply(&mv(1, 1, 2)), Err(CraneError::Halted));
    }

    #[test]
    fn simulate_failure_keeps_earlier_moves() {
        let commands = [mv(1, 1, 2), mv(5, 1, 2), mv(1, 2, 1)];
        let failure = simulate(
            stacks_from_columns(&["AB", ""]),
            &commands,
            ExecutionPolicy::SingleCrateAtATime,
        )
        .unwrap_err();
        assert_eq!(failure.command_index, 1);
        assert_eq!(failure.command, commands[1]);
        assert_eq!(failure.error.kind(), ErrorKind::EmptyStack);
        assert_eq!(columns(&failure.stacks), vec!["A", "B"]);
        assert_eq!(failure.to_string(), "command 2 (move 5 from 1 to 2) failed");
    }

    #[test]
    fn same_stack_move_is_a_no_op() {
        let stacks = stacks_from_columns(&["ABC"]);
        for policy in ExecutionPolicy::ALL {
            let result = simulate(stacks.clone(), &[mv(2, 1, 1)], policy).unwrap();
            assert_eq!(result, stacks);
        }
        let err = simulate(stacks, &[mv(4, 1, 1)], ExecutionPolicy::MultiCrateAtomic).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::EmptyStack);
    }

    #[test]
    fn events_trace_the_run() {
        let mut crane = Crane::with_event_capacity(
            stacks_from_columns(&["AB", ""]),
            ExecutionPolicy::MultiCrateAtomic,
            16,
        );
        crane.run(&[mv(2, 1, 2)]).unwrap();

        let events: Vec<_> = crane.events().iter().cloned().collect();
        assert_eq!(
            events,
            vec![
                CraneEvent::CrateMoved {
                    command_index: 0,
                    item: Crate('A'),
                    from: StackId(0),
                    to: StackId(1),
                },
                CraneEvent::CrateMoved {
                    command_index: 0,
                    item: Crate('B'),
                    from: StackId(0),
                    to: StackId(1),
                },
                CraneEvent::CommandApplied {
                    command_index: 0,
                    command: mv(2, 1, 2),
                },
                CraneEvent::RunCompleted {
                    commands_applied: 1
                },
            ]
        );
    }

    #[test]
    fn listener_sees_failure() {
        let failures = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&failures);
        let mut crane = Crane::new(
            stacks_from_columns(&["A"]),
            ExecutionPolicy::SingleCrateAtATime,
        );
        crane.on_event(
            EventKind::RunFailed,
            Box::new(move |e| sink.borrow_mut().push(e.clone())),
        );
        crane.suppress_event(EventKind::CrateMoved);

        assert!(crane.run(&[mv(2, 1, 1)]).is_err());
        assert_eq!(
            failures.borrow().as_slice(),
            &[CraneEvent::RunFailed {
                command_index: 0,
                kind: ErrorKind::EmptyStack
            }]
        );
        assert!(crane.events().is_empty());
    }
}
