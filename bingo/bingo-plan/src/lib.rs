//! Transport planning for block bingo.
//!
//! This crate turns a board snapshot into an ordered list of transport tasks
//! and decides which task to run next:
//!
//! - **Classification** ([`classify::classify_colors`]): groups blocks that
//!   sit on circles, and the numbered circles, by color
//! - **Pairing** ([`pairing::plan_transport`]): assigns each color's two
//!   blocks to its two circles, minimizing total Manhattan distance
//! - **Selection** ([`select::select_nearest`]): greedy nearest-next choice
//!   that defers deliveries into occupied cells
//!
//! All three stages are free of side effects; only the sequencer mutates the
//! board.
//!
//! # Quick Start
//!
//! ```
//! use bingo_plan::{plan_from_board, select_next};
//! use bingo_types::{BingoArea, Color, GridCoord};
//!
//! let mut area = BingoArea::new(
//!     [
//!         Color::Red, Color::Yellow, Color::Blue, Color::Green,
//!         Color::Green, Color::Blue, Color::Yellow, Color::Red,
//!     ],
//!     6,
//! );
//! area.place_block(GridCoord::new(3, 3), Color::Black).unwrap();
//! area.place_block(GridCoord::new(0, 0), Color::Red).unwrap();
//! area.place_block(GridCoord::new(6, 6), Color::Red).unwrap();
//!
//! let tasks = plan_from_board(&area).unwrap();
//! assert_eq!(tasks.black().destination, GridCoord::new(1, 5));
//! assert_eq!(tasks.len(), 3);
//!
//! let next = select_next(&area, &tasks).unwrap();
//! assert!(next >= 1);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod classify;
pub mod pairing;
pub mod select;

pub use classify::{ColorSlots, ColorTable, ColorTables, classify_colors};
pub use pairing::{Assignment, PairingChoice, choose_assignment, plan_from_board, plan_transport};
pub use select::{select_nearest, select_next};
