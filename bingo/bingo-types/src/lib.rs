//! Core types for block bingo transport planning.
//!
//! This crate provides the foundational types shared by the planner and the
//! sequencer:
//!
//! - **Grid**: cell coordinates on the 7×7 area ([`GridCoord`]) and paths
//!   through them ([`GridPath`])
//! - **Contents**: block and circle colors ([`Color`]), blocks ([`Block`]) and
//!   cell classification ([`NodeType`])
//! - **Pose**: the eight robot headings ([`Direction`]) and the motion
//!   primitives that change them ([`MotionCommand`])
//! - **Work**: transport tasks ([`TransportTask`]) and the black-headed task
//!   list ([`TaskList`])
//! - **State**: the board contract ([`BingoBoard`]) and its in-memory
//!   implementation ([`BingoArea`])
//! - **Configuration**: course-dependent entrance and parking constants
//!   ([`CourseConfig`])
//!
//! # Example
//!
//! ```
//! use bingo_types::{BingoArea, BingoBoard, Color, CourseConfig, CourseSide, GridCoord};
//!
//! let config = CourseConfig::for_side(CourseSide::Right);
//! let mut area = BingoArea::new([Color::Green; 8], 2);
//! area.set_start(config.straight_entry(), bingo_types::Direction::North);
//!
//! assert_eq!(area.position(), GridCoord::new(4, 6));
//! assert_eq!(area.coordinate_of_slot(area.card_number()).unwrap(), GridCoord::new(3, 1));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for the value types and
//!   [`CourseConfig`]

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod area;
pub mod board;
pub mod color;
pub mod config;
pub mod coord;
pub mod direction;
pub mod error;
pub mod path;
pub mod task;

pub use area::BingoArea;
pub use board::{BingoBoard, SLOT_COUNT, slot_coordinate};
pub use color::{Block, COLOR_COUNT, Color, NodeType};
pub use config::{CourseConfig, CourseSide};
pub use coord::{AREA_SIZE, GridCoord};
pub use direction::{Direction, MotionCommand};
pub use error::{BingoError, TableKind};
pub use path::GridPath;
pub use task::{TaskList, TransportTask};
