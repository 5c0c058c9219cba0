//! Level population and difficulty scaling
//!
//! Obstacles are destroyed and rebuilt from scratch at every level
//! transition. Spawn counts and jitter come from a `Pcg32` stream derived
//! from the session seed and the level number, so a given (seed, level)
//! pair always lays out the same field.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::sim::actor::{GoalZone, Obstacle, ObstacleKind};
use crate::sim::state::GameState;

/// Horizontal spawn jitter in pixels, on top of the even spread
const SPAWN_JITTER: f32 = 50.0;

/// Create the goal zones for a session, evenly spread across the goal band.
/// Called once; transitions only reset the occupied flags.
pub fn create_goal_zones(config: &GameConfig) -> Vec<GoalZone> {
    let spacing = config.field_width / (config.goal_count + 1) as f32;
    (0..config.goal_count)
        .map(|i| {
            let center = Vec2::new(spacing * (i + 1) as f32, config.lane_height / 2.0);
            GoalZone::new(center, config.goal_radius)
        })
        .collect()
}

/// Tear down the previous population and build the one for the current
/// level: alternating vehicle lanes on the road, logs on the lower-indexed
/// half of the river lanes, turtles on the rest.
pub fn populate_level(state: &mut GameState) {
    state.obstacles.clear();

    let level = state.level;
    let field = state.playfield();
    let mut rng = level_rng(state.seed, level.level);

    log::info!(
        "populating level {} ({} road lanes, {} river lanes, speed x{:.1})",
        level.level,
        level.road_lanes,
        level.river_lanes,
        level.speed_multiplier
    );

    let config = state.config.clone();
    for lane in 0..level.road_lanes {
        // Even lanes run rightward, odd lanes leftward
        let sign = if lane % 2 == 0 { 1.0 } else { -1.0 };
        let speed = config.base_vehicle_speed * level.speed_multiplier * sign;
        let y = field.road_lane_y(lane);
        let count = rng.random_range(3..=5);
        spawn_lane(
            state,
            &mut rng,
            ObstacleKind::Vehicle,
            lane,
            speed,
            y,
            config.vehicle_size,
            count,
        );
    }

    for lane in 0..level.river_lanes / 2 {
        let speed = config.base_log_speed.abs() * level.speed_multiplier;
        let y = field.river_lane_y(lane);
        let count = rng.random_range(2..=3);
        spawn_lane(
            state,
            &mut rng,
            ObstacleKind::Log,
            lane,
            speed,
            y,
            config.log_size,
            count,
        );
    }

    for lane in level.river_lanes / 2..level.river_lanes {
        let speed = -config.base_turtle_speed.abs() * level.speed_multiplier;
        let y = field.river_lane_y(lane);
        let count = rng.random_range(2..=3);
        spawn_lane(
            state,
            &mut rng,
            ObstacleKind::Turtle,
            lane,
            speed,
            y,
            config.turtle_size,
            count,
        );
    }
}

/// Spread `count` obstacles across the lane with a little jitter so they
/// never fully overlap
#[allow(clippy::too_many_arguments)]
fn spawn_lane(
    state: &mut GameState,
    rng: &mut Pcg32,
    kind: ObstacleKind,
    lane: u32,
    speed: f32,
    y: f32,
    size: Vec2,
    count: u32,
) {
    let spacing = state.config.field_width / (count + 1) as f32;
    for i in 0..count {
        let x = i as f32 * spacing + rng.random_range(0.0..SPAWN_JITTER);
        let id = state.next_obstacle_id();
        state
            .obstacles
            .push(Obstacle::new(id, kind, lane, speed, Vec2::new(x, y), size));
    }
}

/// Per-level RNG stream derived from the session seed
fn level_rng(seed: u64, level: u32) -> Pcg32 {
    Pcg32::seed_from_u64(seed ^ (level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
