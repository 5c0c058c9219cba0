//! Playfield band partition
//!
//! The field is split bottom-to-top into fixed horizontal bands: bottom safe
//! zone, road, middle safe strip, river, goal band. Road lanes grow upward
//! from the bottom anchor, river lanes grow downward from the goal band, so
//! both bands widen toward the middle as difficulty adds lanes.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::state::LevelState;

/// Which band a lane row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Top row holding the goal zones
    Goal,
    /// Carrier lanes; touching the water here is lethal
    River,
    /// Hazard lanes patrolled by vehicles
    Road,
    /// Everything else: bottom zone, middle strip, unclaimed rows
    Safe,
}

/// Per-level lane geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub lane_height: f32,
    pub road_lanes: u32,
    pub river_lanes: u32,
}

impl Playfield {
    pub fn new(config: &GameConfig, level: &LevelState) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            lane_height: config.lane_height,
            road_lanes: level.road_lanes,
            river_lanes: level.river_lanes,
        }
    }

    /// Total number of lane rows
    #[inline]
    pub fn rows(&self) -> u32 {
        (self.height / self.lane_height) as u32
    }

    /// Row index of a Y coordinate (clamped to the field)
    #[inline]
    pub fn row_of(&self, y: f32) -> u32 {
        let row = (y / self.lane_height).max(0.0) as u32;
        row.min(self.rows().saturating_sub(1))
    }

    /// Top-edge Y of road lane `lane` (lane 0 is the lowest road lane)
    #[inline]
    pub fn road_lane_y(&self, lane: u32) -> f32 {
        self.height - self.lane_height * (2 + lane) as f32
    }

    /// Top-edge Y of river lane `lane` (lane 0 borders the goal band)
    #[inline]
    pub fn river_lane_y(&self, lane: u32) -> f32 {
        self.lane_height * (1 + lane) as f32
    }

    /// Band of a lane row
    pub fn band_of_row(&self, row: u32) -> Band {
        if row == 0 {
            return Band::Goal;
        }
        if row >= 1 && row <= self.river_lanes {
            return Band::River;
        }
        let road_top = self.rows().saturating_sub(1 + self.road_lanes);
        let road_bottom = self.rows().saturating_sub(2);
        if row >= road_top && row <= road_bottom {
            return Band::Road;
        }
        Band::Safe
    }

    /// Whether a point is over the open river (water-death territory)
    #[inline]
    pub fn over_river(&self, y: f32) -> bool {
        self.band_of_row(self.row_of(y)) == Band::River
    }
}
