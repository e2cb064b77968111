//! Core game logic - pure, deterministic, and testable
//!
//! All game rules, state management, and simulation live here, with zero
//! dependencies on UI, networking, or I/O:
//!
//! - **Deterministic**: the piece generator is seeded and injected, so the
//!   same seed produces identical games
//! - **Cooperative**: nothing blocks or schedules; gravity is a plain
//!   timestamp comparison inside [`Game::tick`]
//! - **Presentation-agnostic**: rendering is a read-only projection over
//!   the public state (or a [`GameSnapshot`] copied out once per frame)
//!
//! # Module Structure
//!
//! - [`board`]: the grid - placement validation, fixing, line clearing
//! - [`piece`]: tetromino rotation states and block queries
//! - [`game`]: command dispatch, gravity, scoring, pause/over lifecycle
//! - [`rng`]: seeded uniform piece selection, pinnable for tests
//! - [`scoring`]: line-clear points, level progression, fall speed
//! - [`snapshot`]: per-frame read model with buffer reuse
//!
//! # Example
//!
//! ```
//! use gridfall_core::Game;
//! use gridfall_types::GameCommand;
//!
//! let mut game = Game::new(12345);
//!
//! // Forward player input and drive gravity from the host clock
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.apply(GameCommand::HardDrop);
//! game.tick(16);
//!
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::Game;
pub use piece::{rotation_states, spawn_column, Piece};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_points, score_for_clear};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
