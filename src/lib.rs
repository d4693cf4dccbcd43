//! Blocktris (workspace facade crate).
//!
//! Re-exports the member crates as `blocktris::{core, input, term, types}`
//! and hosts the JSON-lines event log used by the binary.

pub mod event_log;

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;

pub use event_log::EventLog;
