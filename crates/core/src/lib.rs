//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the piece/grid state machine. It has no dependencies on
//! terminals, files or clocks:
//!
//! - **Deterministic**: randomness is injected through [`RandomSource`]
//! - **Testable**: every operation returns a plain outcome (`bool`, counts)
//! - **Portable**: the outer loop owns timing, input and drawing
//!
//! # Module Structure
//!
//! - [`shape`]: shape matrices, clockwise rotation, kick offsets
//! - [`piece`]: the live piece, move/rotate/drop validated against the grid
//! - [`grid`]: cell matrix, spawn placement, row clearing and score
//! - [`session`]: gravity timer and the lock/clear/spawn cycle
//! - [`rng`]: random source trait, seeded LCG, scripted sequence
//! - [`config`]: grid size, gravity interval, seed, palette
//! - [`snapshot`]: read-only view for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn on row 0, horizontally centered; if blocked, row-0
//!   anchors at columns 0 through 6 are tried in order
//! - Rotation is clockwise with kick offsets: none, right, left, down, up
//! - Line clears score 40 / 100 / 300 / 1200 for 1 / 2 / 3 / 4 rows
//! - A failed gravity step locks the piece; failing to spawn ends the game
//!
//! # Example
//!
//! ```
//! use blocktris_core::{GameConfig, Session, SequenceRng};
//! use blocktris_core::types::{GameAction, PieceKind};
//!
//! // Always an O piece, always red.
//! let mut session = Session::new(GameConfig::default(), SequenceRng::new(vec![1, 0]));
//! assert_eq!(session.active().unwrap().kind(), PieceKind::O);
//!
//! session.apply_action(GameAction::MoveLeft);
//! session.apply_action(GameAction::HardDrop);
//! session.tick(1000); // gravity step fails, piece locks, next piece spawns
//!
//! assert!(!session.is_game_over());
//! assert_eq!(session.grid().get(19, 3), Some(1));
//! ```

pub mod config;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use grid::{Grid, LineClear, MAX_ROWS_PER_CLEAR};
pub use piece::{Piece, PieceCells, Pos};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use session::{GravityTimer, Session};
pub use shape::{Shape, KICK_OFFSETS};
pub use snapshot::GameSnapshot;
