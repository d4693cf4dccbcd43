//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Key presses
//! are discrete: one press, one action. Unrecognized keys map to nothing.

pub mod map;

pub use blocktris_types as types;

pub use map::{action_for_key, should_quit};
