//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! predictable:
//! - Fixed logical timestep only (the wall clock touches nothing but the
//!   countdown)
//! - Seeded RNG only
//! - Two-phase movement: every candidate position is staged before any is
//!   committed
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod field;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use actor::{Actor, Direction, GoalZone, Obstacle, ObstacleKind, Player};
pub use collision::{Resolution, evaluate};
pub use field::{Band, Playfield};
pub use spawn::{create_goal_zones, populate_level};
pub use state::{DeathCause, GameEvent, GameState, LevelState, Phase, ScoreState};
pub use tick::{Clock, TickInput, tick};
pub use timer::Countdown;
