//! Fixed-timestep update pass
//!
//! One call advances the whole simulation by one logical frame: discrete
//! input, two-phase obstacle movement, passive carry, collision resolution,
//! the wall-clock countdown, then the progression checks (level cleared,
//! game over). The renderer only ever reads the state between calls.

use crate::config::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::actor::{Direction, Player};
use crate::sim::collision;
use crate::sim::field::Band;
use crate::sim::spawn;
use crate::sim::state::{DeathCause, GameEvent, GameState, LevelState, Phase, ScoreState};

/// Input commands for a single tick (one-shot, cleared by the caller)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Discrete jump command from the input source
    pub jump: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep. `now_ms` is the wall clock
/// driving the countdown; everything else uses the logical `dt`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: u64) {
    state.events.clear();

    // The pause toggle is the one input observed while frozen
    if input.pause {
        state.paused = !state.paused;
        if state.paused {
            state.timer.pause();
        } else {
            state.timer.resume(now_ms);
        }
    }
    if state.paused {
        return;
    }

    state.frame += 1;

    // 1. Discrete jump, with forward-progress scoring
    if let Some(dir) = input.jump {
        if let Some(row) = state.player.jump(dir, &state.config) {
            let field = state.playfield();
            let hazard_row = matches!(field.band_of_row(row), Band::Road | Band::River);
            if dir == Direction::Up
                && hazard_row
                && state.score.lane_progress(row, state.config.lane_points)
            {
                state.events.push(GameEvent::LaneAdvanced {
                    row,
                    points: state.config.lane_points,
                });
            }
        }
    }

    // 2. Two-phase obstacle movement: stage every candidate, then commit
    let width = state.config.field_width;
    for o in &mut state.obstacles {
        o.compute_next(width, dt);
    }
    for o in &mut state.obstacles {
        o.commit();
    }

    // 3. Passive carry: the player follows its carrier's committed delta
    if let Some(id) = state.player.carrier {
        let delta = state.obstacle(id).map(|c| c.frame_delta());
        match delta {
            Some(delta) => state.player.carry(delta, &state.config),
            // Dangling handle (carrier destroyed): simply detach
            None => state.player.carrier = None,
        }
    }

    // 4. Collision resolution against fully committed positions
    let resolution = {
        let field = state.playfield();
        collision::evaluate(&state.player, &state.obstacles, &state.goals, &field)
    };
    if let Some(cause) = resolution.death {
        handle_death(state, cause);
    } else {
        state.player.carrier = resolution.attach;
        if let Some(zone) = resolution.goal {
            enter_goal(state, zone);
        }
    }

    // 5. Wall-clock countdown; expiry is an ordinary death
    if state.timer.advance(now_ms) {
        handle_death(state, DeathCause::TimeUp);
    }

    // 6. Level cleared: all goal zones occupied
    if state.level_cleared() {
        advance_level(state, now_ms);
    }

    // 7. Game over: lives exhausted
    if state.player.lives == 0 {
        game_over(state, now_ms);
    }
}

/// Death handling shared by every cause: respawn, one life down, 30 s back
fn handle_death(state: &mut GameState, cause: DeathCause) {
    state.player.respawn(&state.config);
    state.player.lives = state.player.lives.saturating_sub(1);
    state.timer.add(state.config.death_time_bonus);
    log::info!("death ({cause:?}), {} lives left", state.player.lives);
    state.events.push(GameEvent::Death {
        cause,
        lives_left: state.player.lives,
    });
}

/// Goal entry: occupy the zone, award the bonuses, send the player home.
/// Not a death; lives are untouched.
fn enter_goal(state: &mut GameState, zone: usize) {
    state.goals[zone].occupied = true;
    state.score.award(state.config.goal_points);
    state.timer.add(state.config.goal_time_bonus);
    state.player.respawn(&state.config);
    state.events.push(GameEvent::GoalReached {
        zone,
        points: state.config.goal_points,
    });
}

/// Level transition: clear bonus, next level's population, zones reset
fn advance_level(state: &mut GameState, now_ms: u64) {
    state.phase = Phase::LevelTransition;
    state.timer.pause();

    let completed = state.level.level;
    let bonus = state.config.clear_base_points
        + state.timer.remaining() * state.config.clear_points_per_second;
    state.score.award(bonus);
    log::info!(
        "level {completed} cleared (+{bonus}), score {}",
        state.score.points
    );
    state.events.push(GameEvent::LevelCleared { completed, bonus });

    state.level = LevelState::for_level(&state.config, completed + 1);
    spawn::populate_level(state);
    for zone in &mut state.goals {
        zone.reset();
    }

    state.timer.resume(now_ms);
    state.phase = Phase::Playing;
}

/// Game over: emit the persistence hand-off, then restart from scratch
fn game_over(state: &mut GameState, now_ms: u64) {
    state.phase = Phase::GameOverTransition;
    state.timer.pause();

    let final_score = state.score.points;
    log::info!("game over at level {}, final score {final_score}", state.level.level);
    state.events.push(GameEvent::GameOver {
        final_score,
        level: state.level.level,
    });

    state.level = LevelState::for_level(&state.config, 1);
    state.player = Player::new(&state.config);
    state.score = ScoreState::new();
    state.timer.reset(state.config.start_timer_secs);
    state.timer.resume(now_ms);
    spawn::populate_level(state);
    for zone in &mut state.goals {
        zone.reset();
    }

    state.phase = Phase::Playing;
}

/// Folds uneven wall-clock frame spacing into whole logical steps, capped to
/// keep a stalled frame from spiraling
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    accumulator: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many fixed steps the caller should run for a frame that
    /// took `frame_dt` seconds of real time
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.min(0.1);
        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }
}
