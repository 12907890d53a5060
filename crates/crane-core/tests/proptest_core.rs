//! Property-based tests for the crane core.
//!
//! Uses proptest to generate random stacks and command sequences, then
//! verify the stacking laws hold.

use crane_core::command::MoveCommand;
use crane_core::crane::{Crane, simulate};
use crane_core::diagram::{parse_diagram, render_diagram};
use crane_core::error::{CraneError, ErrorKind};
use crane_core::item::{Crate, StackId};
use crane_core::sim::ExecutionPolicy;
use crane_core::stack::{Stack, StackCollection};
use crane_core::test_utils::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_label() -> impl Strategy<Value = char> {
    prop::char::range('A', 'Z')
}

fn arb_column(max_height: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_label(), 0..=max_height)
        .prop_map(|labels| labels.into_iter().collect())
}

fn arb_stacks(max_stacks: usize, max_height: usize) -> impl Strategy<Value = StackCollection> {
    proptest::collection::vec(arb_column(max_height), 1..=max_stacks).prop_map(|cols| {
        let refs: Vec<&str> = cols.iter().map(String::as_str).collect();
        stacks_from_columns(&refs)
    })
}

fn arb_policy() -> impl Strategy<Value = ExecutionPolicy> {
    prop_oneof![
        Just(ExecutionPolicy::SingleCrateAtATime),
        Just(ExecutionPolicy::MultiCrateAtomic),
    ]
}

/// Raw (count, source, dest) triples; may be invalid for a given collection.
fn arb_raw_commands(max_ops: usize) -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    proptest::collection::vec((1..6usize, 0..8usize, 0..8usize), 0..=max_ops)
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// LIFO law: popping returns pushed crates in exact reverse order.
    #[test]
    fn pop_reverses_push(labels in proptest::collection::vec(any::<char>(), 0..64)) {
        let mut stack = Stack::new();
        for &c in &labels {
            stack.push(Crate(c));
        }
        let mut popped = Vec::new();
        for _ in 0..labels.len() {
            popped.push(stack.pop().unwrap().label());
        }
        popped.reverse();
        prop_assert_eq!(popped, labels);
        prop_assert!(stack.pop().is_err());
    }

    /// Parsed stack sizes equal the bracketed entries per column.
    #[test]
    fn parsed_sizes_match_drawing(stacks in arb_stacks(9, 12)) {
        let drawing = render_diagram(&stacks);
        let parsed = parse_diagram(&drawing).unwrap();
        prop_assert_eq!(parsed.len(), stacks.len());

        let content = &drawing[..drawing.len() - 1];
        for (id, stack) in parsed.iter() {
            let column = id.index() * 4;
            let drawn = content
                .iter()
                .filter(|line| line.get(column..column + 1) == Some("["))
                .count();
            prop_assert_eq!(stack.size(), drawn);
        }
        prop_assert_eq!(parsed, stacks);
    }

    /// Moving a whole stack reverses it one crate at a time and preserves
    /// it as a single lift.
    #[test]
    fn whole_stack_move_order(column in arb_column(20), dest in arb_column(5)) {
        let stacks = stacks_from_columns(&[column.as_str(), dest.as_str()]);
        let count = column.chars().count();
        prop_assume!(count > 0);
        let command = [MoveCommand::new(count, StackId(0), StackId(1))];

        let single =
            simulate(stacks.clone(), &command, ExecutionPolicy::SingleCrateAtATime).unwrap();
        let reversed: String = column.chars().rev().collect();
        prop_assert_eq!(&columns(&single)[1], &format!("{dest}{reversed}"));

        let multi = simulate(stacks, &command, ExecutionPolicy::MultiCrateAtomic).unwrap();
        prop_assert_eq!(&columns(&multi)[1], &format!("{dest}{column}"));
        prop_assert!(columns(&multi)[0].is_empty());
    }

    /// An over-long move fails with EmptyStack and leaves every stack as it was.
    #[test]
    fn oversized_move_is_atomic(
        stacks in arb_stacks(5, 6),
        extra in 1..10usize,
        policy in arb_policy(),
    ) {
        let source = StackId(0);
        let dest = StackId(stacks.len() - 1);
        let count = stacks.get(source).map_or(0, Stack::size) + extra;

        let mut crane = Crane::new(stacks.clone(), policy);
        let err = crane.apply(&MoveCommand::new(count, source, dest)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::EmptyStack);
        prop_assert_eq!(crane.stacks(), &stacks);
    }

    /// Crates are conserved: a run never creates or destroys crates, and a
    /// failed run reports exactly the state before the failing command.
    #[test]
    fn crates_are_conserved(
        stacks in arb_stacks(6, 8),
        raw in arb_raw_commands(30),
        policy in arb_policy(),
    ) {
        let commands: Vec<MoveCommand> = raw
            .into_iter()
            .map(|(n, s, d)| MoveCommand::new(n, StackId(s), StackId(d)))
            .collect();
        let total = stacks.total_crates();

        let mut expected = Crane::new(stacks.clone(), policy);
        match simulate(stacks, &commands, policy) {
            Ok(done) => prop_assert_eq!(done.total_crates(), total),
            Err(failure) => {
                prop_assert_eq!(failure.stacks.total_crates(), total);
                for command in &commands[..failure.command_index] {
                    expected.apply(command).unwrap();
                }
                prop_assert_eq!(expected.stacks(), &failure.stacks);
                let is_expected_error = matches!(
                    failure.error,
                    CraneError::EmptyStack { .. } | CraneError::IndexOutOfRange { .. }
                );
                prop_assert!(is_expected_error);
            }
        }
    }

    /// Both policies agree whenever every command moves a single crate.
    #[test]
    fn policies_agree_on_single_crate_moves(
        stacks in arb_stacks(5, 6),
        raw in arb_raw_commands(20),
    ) {
        let commands: Vec<MoveCommand> = raw
            .into_iter()
            .map(|(_, s, d)| MoveCommand::new(1, StackId(s), StackId(d)))
            .collect();
        let single = simulate(stacks.clone(), &commands, ExecutionPolicy::SingleCrateAtATime);
        let multi = simulate(stacks, &commands, ExecutionPolicy::MultiCrateAtomic);
        match (single, multi) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert_eq!(a.command_index, b.command_index);
                prop_assert_eq!(a.stacks, b.stacks);
            }
            _ => prop_assert!(false, "policies disagree on failure"),
        }
    }

    /// Command text round-trips through Display and FromStr.
    #[test]
    fn command_text_round_trip(count in 1..1000usize, source in 0..99usize, dest in 0..99usize) {
        let command = MoveCommand::new(count, StackId(source), StackId(dest));
        let parsed: MoveCommand = command.to_string().parse().unwrap();
        prop_assert_eq!(parsed, command);
    }
}
