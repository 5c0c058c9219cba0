//! Hazard, carrier, and goal resolution
//!
//! Runs once per frame, after every actor has committed its position, in a
//! fixed priority order: vehicle hazard, water hazard (attach or drown),
//! goal entry, off-screen carry death. At most one death fires per frame;
//! goal entry stops after the first zone.

use crate::sim::actor::{GoalZone, Obstacle, ObstacleKind, Player};
use crate::sim::field::Playfield;
use crate::sim::state::DeathCause;

/// What the per-frame sweep decided. Applied by the tick, never here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Resolution {
    /// Death to hand to the progression controller, if any
    pub death: Option<DeathCause>,
    /// Carrier obstacle id the player is riding this frame
    pub attach: Option<u32>,
    /// Index of the goal zone entered this frame
    pub goal: Option<usize>,
}

/// Evaluate hazards, carriers, and goals against committed positions
pub fn evaluate(
    player: &Player,
    obstacles: &[Obstacle],
    goals: &[GoalZone],
    field: &Playfield,
) -> Resolution {
    let mut resolution = Resolution::default();

    // A player deactivated by passive carry skips the live checks and goes
    // straight to the death pipeline.
    if !player.actor.active {
        resolution.death = Some(DeathCause::SweptAway);
        return resolution;
    }

    for o in obstacles {
        if o.kind == ObstacleKind::Vehicle && player.actor.overlaps(&o.actor) {
            resolution.death = Some(DeathCause::VehicleHit);
            return resolution;
        }
    }

    if field.over_river(player.actor.center().y) {
        let carrier = obstacles
            .iter()
            .find(|o| o.kind.is_carrier() && player.actor.overlaps(&o.actor));
        match carrier {
            Some(o) => resolution.attach = Some(o.id),
            None => {
                resolution.death = Some(DeathCause::Drowned);
                return resolution;
            }
        }
    }

    for (i, zone) in goals.iter().enumerate() {
        if zone.admits(&player.actor) {
            resolution.goal = Some(i);
            break;
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::actor::ObstacleKind;
    use crate::sim::state::LevelState;
    use glam::Vec2;

    fn field() -> Playfield {
        let config = GameConfig::default();
        Playfield::new(&config, &LevelState::for_level(&config, 1))
    }

    fn player_at(x: f32, y: f32) -> Player {
        let mut player = Player::new(&GameConfig::default());
        player.actor.pos = Vec2::new(x, y);
        player
    }

    fn obstacle(id: u32, kind: ObstacleKind, x: f32, y: f32) -> Obstacle {
        let config = GameConfig::default();
        let size = match kind {
            ObstacleKind::Vehicle => config.vehicle_size,
            ObstacleKind::Log => config.log_size,
            ObstacleKind::Turtle => config.turtle_size,
        };
        Obstacle::new(id, kind, 0, 100.0, Vec2::new(x, y), size)
    }

    #[test]
    fn test_vehicle_hit_wins() {
        let player = player_at(400.0, 520.0);
        let obstacles = vec![obstacle(1, ObstacleKind::Vehicle, 390.0, 520.0)];
        let r = evaluate(&player, &obstacles, &[], &field());
        assert_eq!(r.death, Some(DeathCause::VehicleHit));
        assert!(r.attach.is_none());
    }

    #[test]
    fn test_vehicle_miss_is_safe_on_road() {
        // On the road but clear of every vehicle: nothing happens
        let player = player_at(400.0, 520.0);
        let obstacles = vec![obstacle(1, ObstacleKind::Vehicle, 100.0, 520.0)];
        let r = evaluate(&player, &obstacles, &[], &field());
        assert_eq!(r, Resolution::default());
    }

    #[test]
    fn test_river_attaches_to_carrier() {
        let player = player_at(400.0, 40.0);
        let obstacles = vec![obstacle(9, ObstacleKind::Log, 380.0, 40.0)];
        let r = evaluate(&player, &obstacles, &[], &field());
        assert_eq!(r.attach, Some(9));
        assert!(r.death.is_none());
    }

    #[test]
    fn test_river_without_carrier_drowns() {
        let player = player_at(400.0, 40.0);
        let obstacles = vec![obstacle(9, ObstacleKind::Log, 100.0, 40.0)];
        let r = evaluate(&player, &obstacles, &[], &field());
        assert_eq!(r.death, Some(DeathCause::Drowned));
    }

    #[test]
    fn test_safe_bands_skip_water_check() {
        // Middle strip: no carrier needed
        let player = player_at(400.0, 120.0);
        let r = evaluate(&player, &[], &[], &field());
        assert!(r.death.is_none());
    }

    #[test]
    fn test_goal_entry_first_zone_only() {
        let player = player_at(385.0, 0.0);
        // Two overlapping zones; only the first admits
        let goals = vec![
            GoalZone::new(Vec2::new(400.0, 20.0), 20.0),
            GoalZone::new(Vec2::new(405.0, 20.0), 20.0),
        ];
        let r = evaluate(&player, &[], &goals, &field());
        assert_eq!(r.goal, Some(0));
    }

    #[test]
    fn test_goal_skips_occupied() {
        let player = player_at(385.0, 0.0);
        let mut goals = vec![
            GoalZone::new(Vec2::new(400.0, 20.0), 20.0),
            GoalZone::new(Vec2::new(405.0, 20.0), 20.0),
        ];
        goals[0].occupied = true;
        let r = evaluate(&player, &[], &goals, &field());
        assert_eq!(r.goal, Some(1));
    }

    #[test]
    fn test_inactive_player_swept() {
        let mut player = player_at(-40.0, 40.0);
        player.actor.active = false;
        let obstacles = vec![obstacle(1, ObstacleKind::Vehicle, -40.0, 40.0)];
        let r = evaluate(&player, &obstacles, &[], &field());
        assert_eq!(r.death, Some(DeathCause::SweptAway));
    }
}
