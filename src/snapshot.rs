//! Render-ready frame snapshot
//!
//! The engine draws nothing. After each update it exposes an ordered sprite
//! list (ascending draw priority, so later entries paint on top) plus live
//! HUD values; an external renderer consumes the snapshot between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::actor::ObstacleKind;
use crate::sim::state::GameState;

/// Draw priority for lane obstacles
pub const PRIORITY_OBSTACLE: i32 = 5;
/// Draw priority for goal zones
pub const PRIORITY_GOAL: i32 = 8;
/// Draw priority for the player (always on top)
pub const PRIORITY_PLAYER: i32 = 10;

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Vehicle,
    Log,
    Turtle,
    GoalOpen,
    GoalOccupied,
    Player,
}

/// One drawable handle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Lower draws first, higher draws on top
    pub priority: i32,
}

/// Live HUD values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub time_remaining: u32,
    /// Zero-padded `MM:SS`
    pub time_display: String,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
    pub paused: bool,
}

impl RenderSnapshot {
    /// Capture the post-update state. Inactive actors are excluded; sprites
    /// come back sorted by priority, stable within a tier.
    pub fn capture(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(state.obstacles.len() + state.goals.len() + 1);

        for o in &state.obstacles {
            if !o.actor.active {
                continue;
            }
            let kind = match o.kind {
                ObstacleKind::Vehicle => SpriteKind::Vehicle,
                ObstacleKind::Log => SpriteKind::Log,
                ObstacleKind::Turtle => SpriteKind::Turtle,
            };
            sprites.push(Sprite {
                kind,
                pos: o.actor.pos,
                size: o.actor.size,
                priority: PRIORITY_OBSTACLE,
            });
        }

        for zone in &state.goals {
            if !zone.actor.active {
                continue;
            }
            let kind = if zone.occupied {
                SpriteKind::GoalOccupied
            } else {
                SpriteKind::GoalOpen
            };
            sprites.push(Sprite {
                kind,
                pos: zone.actor.pos,
                size: zone.actor.size,
                priority: PRIORITY_GOAL,
            });
        }

        if state.player.actor.active {
            sprites.push(Sprite {
                kind: SpriteKind::Player,
                pos: state.player.actor.pos,
                size: state.player.actor.size,
                priority: PRIORITY_PLAYER,
            });
        }

        sprites.sort_by_key(|s| s.priority);

        Self {
            sprites,
            hud: Hud {
                score: state.score.points,
                lives: state.player.lives,
                level: state.level.level,
                time_remaining: state.timer.remaining(),
                time_display: state.timer.display(),
            },
            paused: state.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_capture_sorted_by_priority() {
        let state = GameState::new(GameConfig::default(), 11, 0);
        let snapshot = RenderSnapshot::capture(&state);
        let priorities: Vec<i32> = snapshot.sprites.iter().map(|s| s.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        // Player is the last sprite drawn
        assert_eq!(snapshot.sprites.last().unwrap().kind, SpriteKind::Player);
    }

    #[test]
    fn test_capture_excludes_inactive() {
        let mut state = GameState::new(GameConfig::default(), 11, 0);
        state.player.actor.active = false;
        let snapshot = RenderSnapshot::capture(&state);
        assert!(snapshot.sprites.iter().all(|s| s.kind != SpriteKind::Player));
    }

    #[test]
    fn test_hud_reads_live_values() {
        let mut state = GameState::new(GameConfig::default(), 11, 0);
        state.score.award(777);
        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(snapshot.hud.score, 777);
        assert_eq!(snapshot.hud.lives, 3);
        assert_eq!(snapshot.hud.level, 1);
        assert_eq!(snapshot.hud.time_display, "00:30");
    }

    #[test]
    fn test_goal_sprites_track_occupancy() {
        let mut state = GameState::new(GameConfig::default(), 11, 0);
        state.goals[0].occupied = true;
        let snapshot = RenderSnapshot::capture(&state);
        let occupied = snapshot
            .sprites
            .iter()
            .filter(|s| s.kind == SpriteKind::GoalOccupied)
            .count();
        let open = snapshot
            .sprites
            .iter()
            .filter(|s| s.kind == SpriteKind::GoalOpen)
            .count();
        assert_eq!(occupied, 1);
        assert_eq!(open, 4);
    }
}
