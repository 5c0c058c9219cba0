//! Actor primitives: the shared position/size/active record and the closed
//! set of kinds built on top of it (obstacles, player, goal zones).
//!
//! Obstacles move through a two-phase protocol: every actor computes its
//! candidate position first, then all candidates are committed in a second
//! pass, so collision checks never see a half-updated frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Jump directions for the player (one lane band per command)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Position/size/active record backing every simulated object
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner in pixels
    pub pos: Vec2,
    /// Bounding box (width, height)
    pub size: Vec2,
    /// Inactive actors are excluded from collision and rendering
    pub active: bool,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            active: true,
        }
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Half-open rectangle overlap on both axes. Inactive actors never overlap.
    pub fn overlaps(&self, other: &Actor) -> bool {
        if !self.active || !other.active {
            return false;
        }
        self.pos.x + self.size.x > other.pos.x
            && self.pos.x < other.pos.x + other.size.x
            && self.pos.y + self.size.y > other.pos.y
            && self.pos.y < other.pos.y + other.size.y
    }
}

/// Obstacle kinds: vehicles kill on contact, logs and turtles carry the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Vehicle,
    Log,
    Turtle,
}

impl ObstacleKind {
    /// Whether the player can ride this kind across the river
    #[inline]
    pub fn is_carrier(self) -> bool {
        matches!(self, ObstacleKind::Log | ObstacleKind::Turtle)
    }
}

/// A lane-bound moving obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub actor: Actor,
    /// Lane index within the obstacle's band
    pub lane: u32,
    /// Horizontal velocity in px/s; the sign fixes the travel direction
    pub velocity: f32,
    /// Committed X of the previous frame (drives passive carry)
    pub prev_x: f32,
    /// Staged X candidate awaiting commit
    pub next_x: f32,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, lane: u32, velocity: f32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind,
            actor: Actor::new(pos, size),
            lane,
            velocity,
            prev_x: pos.x,
            next_x: pos.x,
        }
    }

    /// Phase 1: stage the candidate position for this frame without touching
    /// the visible state. Wrap-around re-enters from the opposite edge:
    /// rightward movers wrap to `-width` once their right edge passes the
    /// field's right edge, leftward movers wrap to the field width once their
    /// right edge falls below `-width`.
    pub fn compute_next(&mut self, field_width: f32, dt: f32) {
        let w = self.actor.size.x;
        let mut next = self.actor.pos.x + self.velocity * dt;
        if self.velocity > 0.0 && next + w > field_width {
            next = -w;
        } else if self.velocity < 0.0 && next + w < -w {
            next = field_width;
        }
        self.next_x = next;
    }

    /// Phase 2: commit the staged candidate, remembering the old position
    pub fn commit(&mut self) {
        self.prev_x = self.actor.pos.x;
        self.actor.pos.x = self.next_x;
    }

    /// Horizontal displacement of the last committed move
    #[inline]
    pub fn frame_delta(&self) -> f32 {
        self.actor.pos.x - self.prev_x
    }
}

/// A circular target zone at the top of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalZone {
    pub actor: Actor,
    pub occupied: bool,
}

impl GoalZone {
    pub fn new(center: Vec2, radius: f32) -> Self {
        let size = Vec2::splat(radius * 2.0);
        Self {
            actor: Actor::new(center - size / 2.0, size),
            occupied: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.actor.size.x / 2.0
    }

    /// Circular hit test: the player has entered once its center is within
    /// the zone radius plus half the player's own radius.
    pub fn admits(&self, player: &Actor) -> bool {
        if self.occupied || !self.actor.active || !player.active {
            return false;
        }
        let distance = player.center().distance(self.actor.center());
        let player_radius = player.size.x.min(player.size.y) / 2.0;
        distance < self.radius() + player_radius / 2.0
    }

    /// Clear the occupied flag (level transition or full restart)
    pub fn reset(&mut self) {
        self.occupied = false;
        self.actor.active = true;
    }
}

/// The controlled actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub actor: Actor,
    pub lives: u32,
    /// Stable id of the obstacle currently ridden, if any
    pub carrier: Option<u32>,
    /// Smallest lane row ever reached this session (high-water mark)
    pub best_row: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            actor: Actor::new(config.spawn_position(), config.player_size),
            lives: config.start_lives,
            carrier: None,
            best_row: config.rows().saturating_sub(1),
        }
    }

    /// Current lane row of the top edge
    #[inline]
    pub fn row(&self, lane_height: f32) -> u32 {
        (self.actor.pos.y / lane_height).max(0.0) as u32
    }

    /// Put the player back on the spawn point, detached and active.
    /// Lives and the high-water mark are untouched.
    pub fn respawn(&mut self, config: &GameConfig) {
        self.actor.pos = config.spawn_position();
        self.actor.active = true;
        self.carrier = None;
    }

    /// Attempt a discrete jump of one lane band. The move is rejected if it
    /// would leave the playfield; either way the command breaks any carrier
    /// relationship. Returns the landing row when the jump was applied.
    pub fn jump(&mut self, dir: Direction, config: &GameConfig) -> Option<u32> {
        let step = config.jump_distance;
        let mut next = self.actor.pos;
        match dir {
            Direction::Up => next.y -= step,
            Direction::Down => next.y += step,
            Direction::Left => next.x -= step,
            Direction::Right => next.x += step,
        }
        self.carrier = None;

        let in_bounds = next.x >= 0.0
            && next.x + self.actor.size.x <= config.field_width
            && next.y >= 0.0
            && next.y + self.actor.size.y <= config.field_height;
        if !in_bounds {
            return None;
        }
        self.actor.pos = next;

        let row = self.row(config.lane_height);
        if dir == Direction::Up && row < self.best_row {
            self.best_row = row;
        }
        Some(row)
    }

    /// Apply the carrier's committed frame displacement. If the ride pushes
    /// the player fully outside the horizontal bounds it is deactivated and
    /// left for the death pipeline.
    pub fn carry(&mut self, delta_x: f32, config: &GameConfig) {
        self.actor.pos.x += delta_x;
        if self.actor.pos.x < -self.actor.size.x || self.actor.pos.x > config.field_width {
            self.actor.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(x: f32, y: f32, w: f32, h: f32) -> Actor {
        Actor::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_basic() {
        let a = actor(0.0, 0.0, 30.0, 30.0);
        let b = actor(20.0, 20.0, 30.0, 30.0);
        let c = actor(30.0, 0.0, 30.0, 30.0);
        assert!(a.overlaps(&b));
        // Half-open: touching edges do not overlap
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_inactive() {
        let a = actor(0.0, 0.0, 30.0, 30.0);
        let mut b = actor(10.0, 10.0, 30.0, 30.0);
        b.active = false;
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_wrap_rightward() {
        let mut o = Obstacle::new(
            1,
            ObstacleKind::Vehicle,
            0,
            150.0,
            Vec2::new(745.0, 520.0),
            Vec2::new(60.0, 35.0),
        );
        // Right edge would reach 807.5 > 800: wraps to -width
        o.compute_next(800.0, 1.0 / 60.0);
        o.commit();
        assert_eq!(o.actor.pos.x, -60.0);
    }

    #[test]
    fn test_wrap_leftward() {
        let mut o = Obstacle::new(
            1,
            ObstacleKind::Turtle,
            0,
            -100.0,
            Vec2::new(-99.0, 80.0),
            Vec2::new(50.0, 35.0),
        );
        // Right edge would fall to -50.7 < -50: wraps to the field width
        o.compute_next(800.0, 1.0 / 60.0);
        o.commit();
        assert_eq!(o.actor.pos.x, 800.0);
    }

    #[test]
    fn test_two_phase_commit() {
        let mut o = Obstacle::new(
            1,
            ObstacleKind::Log,
            0,
            120.0,
            Vec2::new(100.0, 40.0),
            Vec2::new(100.0, 35.0),
        );
        o.compute_next(800.0, 1.0 / 60.0);
        // Visible position unchanged until commit
        assert_eq!(o.actor.pos.x, 100.0);
        o.commit();
        assert!((o.actor.pos.x - 102.0).abs() < 1e-4);
        assert!((o.frame_delta() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_jump_bounds_and_high_water() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert_eq!(player.best_row, 14);

        // Downward from spawn would exit the field: rejected
        assert!(player.jump(Direction::Down, &config).is_none());
        assert_eq!(player.actor.pos, config.spawn_position());

        // Upward moves one lane and advances the high-water mark
        let row = player.jump(Direction::Up, &config);
        assert_eq!(row, Some(13));
        assert_eq!(player.best_row, 13);
        assert_eq!(player.actor.pos.y, 520.0);

        // Back down and up again: mark stays at 13
        player.jump(Direction::Down, &config);
        player.jump(Direction::Up, &config);
        assert_eq!(player.best_row, 13);
    }

    #[test]
    fn test_jump_breaks_carrier() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.carrier = Some(7);
        player.jump(Direction::Left, &config);
        assert!(player.carrier.is_none());
    }

    #[test]
    fn test_carry_offscreen_deactivates() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.actor.pos.x = 5.0;
        player.carry(-40.0, &config);
        assert!(!player.actor.active);
    }

    #[test]
    fn test_goal_admits() {
        let zone = GoalZone::new(Vec2::new(400.0, 20.0), 20.0);
        let mut player = actor(385.0, 0.0, 30.0, 30.0);
        // Player center (400, 15), distance 5 < 20 + 7.5
        assert!(zone.admits(&player));

        player.pos.x = 300.0;
        assert!(!zone.admits(&player));
    }

    #[test]
    fn test_goal_occupied_rejects() {
        let mut zone = GoalZone::new(Vec2::new(400.0, 20.0), 20.0);
        let player = actor(385.0, 0.0, 30.0, 30.0);
        zone.occupied = true;
        assert!(!zone.admits(&player));
        zone.reset();
        assert!(zone.admits(&player));
    }
}
