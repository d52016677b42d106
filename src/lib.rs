//! Dino TUI - an endless runner for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, difficulty, collisions, run state)
//! - `driver`: Frame driver tying one update and one render to each host frame
//! - `render`: Draw surface, half-block pixel buffer, sprites and scene
//! - `audio`: Synthesized sound cues
//! - `input`: Key bindings
//! - `config`: Data-driven tuning

pub mod audio;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod render;
pub mod sim;

pub use config::Config;
pub use driver::{FrameDriver, RestartControl, StepOutcome};
pub use error::Error;
pub use sim::{Command, Session};
