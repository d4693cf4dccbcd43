//! Terminal rendering for the falling-block game.
//!
//! Renders into a plain framebuffer rather than a widget tree, then flushes
//! it through crossterm. [`BoardView`] is pure and unit-tested;
//! [`TerminalRenderer`] owns the actual terminal.

pub mod fb;
pub mod renderer;
pub mod view;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
pub use view::{BoardView, SurfaceLayout, Viewport};
