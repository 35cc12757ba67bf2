//! Scrolling obstacle field
//!
//! Obstacles enter at the right edge, scroll left at a constant speed and are
//! dropped once fully off-screen. Spawn spacing tightens as the score climbs.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Source of uniform samples in `[0, 1)` for gap placement
pub trait GapSource {
    fn next_unit(&mut self) -> f32;
}

impl GapSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// A single gap obstacle: a top slab and a bottom slab with an opening between
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the opening
    pub gap_y: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Width and opening height shared by every obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleGeometry {
    pub width: f32,
    pub gap_height: f32,
}

/// Owns the obstacle sequence (oldest first)
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Current spacing; only ever shrinks until `clear()`
    required_spacing: f32,
    tuning: Tuning,
}

impl ObstacleField {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacles: Vec::new(),
            required_spacing: tuning.base_spacing,
            tuning: tuning.clone(),
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Mutable view used by scoring to flip `passed` flags
    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn geometry(&self) -> ObstacleGeometry {
        ObstacleGeometry {
            width: self.tuning.obstacle_width,
            gap_height: self.tuning.gap_height,
        }
    }

    pub fn required_spacing(&self) -> f32 {
        self.required_spacing
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Drop every obstacle and restore the starting spacing
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.required_spacing = self.tuning.base_spacing;
    }

    /// Inclusive range the gap top is drawn from. Collapses to a single
    /// point at the top margin when the field is too short.
    pub fn gap_range(&self, field_height: f32) -> (f32, f32) {
        let low = self.tuning.gap_top_margin;
        let high = field_height - self.tuning.gap_height - self.tuning.gap_bottom_margin;
        (low, low + (high - low).max(0.0))
    }

    /// Advance one tick: maybe spawn, scroll, then compact.
    pub fn tick<R: GapSource>(
        &mut self,
        score: u32,
        field_width: f32,
        field_height: f32,
        rng: &mut R,
    ) {
        self.required_spacing = self
            .required_spacing
            .min(self.tuning.spacing_for_score(score));

        let should_spawn = match self.obstacles.last() {
            None => true,
            Some(last) => field_width - last.x > self.required_spacing,
        };
        if should_spawn {
            let (low, high) = self.gap_range(field_height);
            let gap_y = low + rng.next_unit() * (high - low);
            log::debug!(
                "Spawn obstacle at x={:.1} gap_y={:.1} (spacing {})",
                field_width,
                gap_y,
                self.required_spacing
            );
            self.obstacles.push(Obstacle {
                x: field_width,
                gap_y,
                passed: false,
            });
        }

        for obstacle in &mut self.obstacles {
            obstacle.x -= self.tuning.scroll_speed;
        }

        self.compact();
    }

    /// Remove obstacles whose right edge has left the screen
    fn compact(&mut self) {
        let width = self.tuning.obstacle_width;
        let mut i = 0;
        while i < self.obstacles.len() {
            if self.obstacles[i].right(width) <= 0.0 {
                self.obstacles.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
