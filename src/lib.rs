//! Lane Hopper - a lane-crossing arcade game simulation engine
//!
//! Core modules:
//! - `config`: one immutable configuration value, no ambient globals
//! - `sim`: deterministic simulation (movement, collisions, progression)
//! - `snapshot`: render-ready frame snapshots for an external renderer
//! - `highscores`: top-10 leaderboard with line-based file persistence
//!
//! The engine renders nothing and reads no input devices; each tick it
//! consumes a [`sim::TickInput`] and leaves behind a queryable state from
//! which [`snapshot::RenderSnapshot::capture`] builds the frame handed to
//! the renderer.

pub mod config;
pub mod highscores;
pub mod sim;
pub mod snapshot;

pub use config::{GameConfig, MAX_SUBSTEPS, SIM_DT};
pub use highscores::{HighScores, ScoreStore};
pub use snapshot::RenderSnapshot;
