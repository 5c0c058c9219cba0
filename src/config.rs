//! Game configuration
//!
//! Every tunable constant lives in one immutable [`GameConfig`] value that is
//! constructed once and passed by reference to the spawner and actor
//! factories. No ambient global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fixed simulation timestep (60 Hz logical frames)
pub const SIM_DT: f32 = 1.0 / 60.0;
/// Maximum substeps per rendered frame to prevent spiral of death
pub const MAX_SUBSTEPS: u32 = 4;

/// Immutable game balance and geometry constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub field_width: f32,
    /// Playfield height in pixels
    pub field_height: f32,
    /// Height of one horizontal lane band
    pub lane_height: f32,
    /// Distance covered by one player jump (one lane band)
    pub jump_distance: f32,

    /// Lives at session start
    pub start_lives: u32,
    /// Countdown at session start (whole seconds)
    pub start_timer_secs: u32,

    /// Road lanes at level 1 (grows with difficulty)
    pub base_road_lanes: u32,
    /// River lanes at level 1 (grows with difficulty)
    pub base_river_lanes: u32,

    /// Vehicle speed at level 1 (px/s, sign applied per lane)
    pub base_vehicle_speed: f32,
    /// Log speed at level 1 (px/s, always rightward)
    pub base_log_speed: f32,
    /// Turtle speed at level 1 (px/s, always leftward)
    pub base_turtle_speed: f32,

    /// Player bounding box
    pub player_size: Vec2,
    /// Vehicle bounding box (shorter than a lane so adjacent lanes never touch)
    pub vehicle_size: Vec2,
    /// Log bounding box
    pub log_size: Vec2,
    /// Turtle bounding box
    pub turtle_size: Vec2,

    /// Radius of one circular goal zone
    pub goal_radius: f32,
    /// Goal zones per level
    pub goal_count: usize,

    /// Points for entering a goal zone
    pub goal_points: u32,
    /// Seconds refunded on goal entry
    pub goal_time_bonus: u32,
    /// Seconds refunded on death
    pub death_time_bonus: u32,
    /// Points for first-time forward progress onto a hazard lane
    pub lane_points: u32,
    /// Base points for clearing a level
    pub clear_base_points: u32,
    /// Extra points per remaining countdown second on level clear
    pub clear_points_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let lane_height = 40.0;
        Self {
            field_width: 800.0,
            field_height: 600.0,
            lane_height,
            jump_distance: lane_height,
            start_lives: 3,
            start_timer_secs: 30,
            base_road_lanes: 3,
            base_river_lanes: 2,
            base_vehicle_speed: 150.0,
            base_log_speed: 120.0,
            base_turtle_speed: 100.0,
            player_size: Vec2::new(30.0, 30.0),
            vehicle_size: Vec2::new(60.0, lane_height - 5.0),
            log_size: Vec2::new(100.0, lane_height - 5.0),
            turtle_size: Vec2::new(50.0, lane_height - 5.0),
            goal_radius: 20.0,
            goal_count: 5,
            goal_points: 500,
            goal_time_bonus: 30,
            death_time_bonus: 30,
            lane_points: 150,
            clear_base_points: 10_000,
            clear_points_per_second: 250,
        }
    }
}

impl GameConfig {
    /// Player spawn point: centered horizontally, one lane above the bottom edge
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.player_size.x) / 2.0,
            self.field_height - self.lane_height,
        )
    }

    /// Number of lane rows the field is divided into
    pub fn rows(&self) -> u32 {
        (self.field_height / self.lane_height) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spawn_position() {
        let config = GameConfig::default();
        let spawn = config.spawn_position();
        assert_eq!(spawn.x, 385.0);
        assert_eq!(spawn.y, 560.0);
    }

    #[test]
    fn test_default_rows() {
        let config = GameConfig::default();
        assert_eq!(config.rows(), 15);
    }
}
