//! Game state and progression types
//!
//! Everything that must survive between frames lives here. The state is
//! serializable and, for a fixed seed and input sequence, fully
//! deterministic apart from the wall-clock countdown.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::actor::{GoalZone, Obstacle, Player};
use crate::sim::field::Playfield;
use crate::sim::timer::Countdown;

/// Progression state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Normal simulation
    Playing,
    /// All goal zones occupied; bonus, level bump and repopulation in flight
    LevelTransition,
    /// Lives exhausted; score persistence hand-off and full restart in flight
    GameOverTransition,
}

/// Why the player died this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Run over on the road
    VehicleHit,
    /// In the river with no carrier underfoot
    Drowned,
    /// Carried off the edge of the field
    SweptAway,
    /// Countdown reached zero
    TimeUp,
}

/// Frame notifications for the embedding shell (HUD flashes, dialogs,
/// score persistence). Drained at the start of every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Death { cause: DeathCause, lives_left: u32 },
    GoalReached { zone: usize, points: u32 },
    LaneAdvanced { row: u32, points: u32 },
    LevelCleared { completed: u32, bonus: u32 },
    GameOver { final_score: u64, level: u32 },
}

/// Current level and the difficulty values derived from it
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
    pub road_lanes: u32,
    pub river_lanes: u32,
    pub speed_multiplier: f32,
}

impl LevelState {
    /// Difficulty scaling: every level adds 10% speed, every second level
    /// adds one lane to each band.
    pub fn for_level(config: &GameConfig, level: u32) -> Self {
        let extra = level / 2;
        Self {
            level,
            road_lanes: config.base_road_lanes + extra,
            river_lanes: config.base_river_lanes + extra,
            speed_multiplier: 1.0 + (level.saturating_sub(1)) as f32 * 0.1,
        }
    }
}

/// Accumulated points plus the marker that stops forward progress from
/// scoring twice
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreState {
    pub points: u64,
    /// Smallest row already rewarded; rows must beat this to score again
    pub last_scored_row: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            points: 0,
            last_scored_row: u32::MAX,
        }
    }

    pub fn award(&mut self, points: u32) {
        self.points += points as u64;
    }

    /// Record forward progress onto `row`; awards only strictly new rows
    pub fn lane_progress(&mut self, row: u32, points: u32) -> bool {
        if row < self.last_scored_row {
            self.last_scored_row = row;
            self.award(points);
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed feeding the per-level spawn RNG
    pub seed: u64,
    pub config: GameConfig,
    pub level: LevelState,
    pub phase: Phase,
    pub paused: bool,
    /// Logical frame counter
    pub frame: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub goals: Vec<GoalZone>,
    pub score: ScoreState,
    pub timer: Countdown,
    /// Notifications emitted by the current frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh session at level 1. Goal zones are created here once and only
    /// reset afterwards; obstacles are populated per level by the spawner.
    pub fn new(config: GameConfig, seed: u64, now_ms: u64) -> Self {
        let level = LevelState::for_level(&config, 1);
        let player = Player::new(&config);
        let goals = crate::sim::spawn::create_goal_zones(&config);
        let mut timer = Countdown::new(config.start_timer_secs);
        timer.resume(now_ms);

        let mut state = Self {
            seed,
            level,
            phase: Phase::Playing,
            paused: false,
            frame: 0,
            player,
            obstacles: Vec::new(),
            goals,
            score: ScoreState::new(),
            timer,
            events: Vec::new(),
            config,
            next_id: 1,
        };
        crate::sim::spawn::populate_level(&mut state);
        state
    }

    /// Allocate a stable obstacle id
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Resolve a carrier handle; dangling ids resolve to `None`
    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Lane geometry for the current level
    pub fn playfield(&self) -> Playfield {
        Playfield::new(&self.config, &self.level)
    }

    /// True once every goal zone is occupied
    pub fn level_cleared(&self) -> bool {
        self.goals.iter().all(|g| g.occupied)
    }
}
