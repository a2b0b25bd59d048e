//! Terminal falling-block puzzle.
//!
//! `core` holds the pure engine (board, shapes, collision, session
//! state machine); `term` renders engine snapshots into a terminal
//! framebuffer; `input` maps key events to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
