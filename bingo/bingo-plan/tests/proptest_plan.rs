//! Property-based tests for pairing and selection.
//!
//! Run with: cargo test -p bingo-plan -- proptest

use bingo_plan::{Assignment, ColorTables, choose_assignment, plan_transport, select_nearest};
use bingo_types::{BingoError, Color, GridCoord, TransportTask, slot_coordinate};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_coord() -> impl Strategy<Value = GridCoord> {
    (0..7i32, 0..7i32).prop_map(|(x, y)| GridCoord::new(x, y))
}

fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::None),
        Just(Color::Black),
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Blue),
        Just(Color::Green),
    ]
}

fn arb_task() -> impl Strategy<Value = TransportTask> {
    (arb_coord(), arb_coord()).prop_map(|(s, d)| TransportTask::new(s, d))
}

fn lookup(slot: u8) -> Result<GridCoord, BingoError> {
    slot_coordinate(slot).ok_or(BingoError::InvalidSlot(slot))
}

// =============================================================================
// Pairing
// =============================================================================

proptest! {
    #[test]
    fn proptest_pairing_never_worse_than_alternative(
        b0 in arb_coord(), b1 in arb_coord(), c0 in arb_coord(), c1 in arb_coord(),
    ) {
        let choice = choose_assignment((b0, b1), (c0, c1));
        prop_assert!(choice.total_distance <= choice.alternative_distance);

        let sum: u32 = choice.tasks.iter().map(TransportTask::distance).sum();
        prop_assert_eq!(sum, choice.total_distance);

        if choice.total_distance == choice.alternative_distance {
            prop_assert_eq!(choice.assignment, Assignment::Direct);
        }
    }

    #[test]
    fn proptest_plan_structure(
        black in arb_coord(),
        card in 1u8..=8,
        pairs in proptest::collection::vec(
            (arb_coord(), arb_coord(), arb_coord(), arb_coord()),
            4,
        ),
        present in proptest::collection::vec(any::<bool>(), 4),
    ) {
        let mut tables = ColorTables::default();
        tables.blocks.record(Color::Black, black);
        for ((color, (b0, b1, c0, c1)), used) in Color::PAIRED.iter().zip(&pairs).zip(&present) {
            if *used {
                tables.blocks.record(*color, *b0);
                tables.blocks.record(*color, *b1);
                tables.circles.record(*color, *c0);
                tables.circles.record(*color, *c1);
            }
        }

        let tasks = plan_transport(&tables, card, lookup).unwrap();

        // Head is always the black task, even when already in place.
        prop_assert_eq!(tasks.black().source, black);
        prop_assert_eq!(Some(tasks.black().destination), slot_coordinate(card));

        // No colored task is a no-op.
        for task in tasks.colored() {
            prop_assert_ne!(task.source, task.destination);
        }

        let expected_max = 1 + 2 * present.iter().filter(|p| **p).count();
        prop_assert!(tasks.len() <= expected_max);
    }
}

// =============================================================================
// Selection
// =============================================================================

proptest! {
    #[test]
    fn proptest_selection_in_range(
        position in arb_coord(),
        tasks in proptest::collection::vec(arb_task(), 0..10),
        occupants in proptest::collection::vec(arb_color(), 49),
    ) {
        let occupant = |c: GridCoord| {
            let index = usize::try_from(c.y * 7 + c.x).unwrap_or(0);
            occupants[index]
        };
        let selected = select_nearest(position, &tasks, occupant);

        if tasks.len() <= 1 {
            prop_assert_eq!(selected, None);
        } else {
            let index = selected.unwrap();
            prop_assert!(index >= 1 && index < tasks.len());

            // Nothing free is strictly closer than the chosen task.
            let chosen = position.manhattan_distance(tasks[index].source);
            for task in &tasks[2..] {
                if occupant(task.destination).is_free_for_delivery() {
                    prop_assert!(position.manhattan_distance(task.source) >= chosen);
                }
            }
        }
    }

    #[test]
    fn proptest_fallback_when_first_is_strictly_nearest(
        position in arb_coord(),
        tasks in proptest::collection::vec(arb_task(), 2..8),
    ) {
        let first = position.manhattan_distance(tasks[1].source);
        let strictly_nearest = tasks[2..]
            .iter()
            .all(|t| position.manhattan_distance(t.source) > first);
        prop_assume!(strictly_nearest);

        let selected = select_nearest(position, &tasks, |_| Color::Blue);
        prop_assert_eq!(selected, Some(1));
    }
}
