//! Deterministic simulation
//!
//! Everything that decides what happens in a run lives here. No terminal,
//! audio or clock access: given a seed and a sequence of commands, a run
//! always plays out the same way.

pub mod difficulty;
pub mod entity;
pub mod geometry;
pub mod physics;
pub mod recycler;
pub mod session;
pub mod state;

pub use entity::{Character, Obstacle, Tint};
pub use geometry::{Rect, intersects};
pub use session::{Command, Session};
pub use state::{Cue, GameEvent, Phase, RunState};
