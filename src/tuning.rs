//! Data-driven game balance
//!
//! Every knob the simulation reads lives here. Defaults mirror `crate::consts`;
//! a settings file may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A difficulty breakpoint: once the score is strictly above `above_score`,
/// obstacles spawn `spacing` pixels apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingTier {
    pub above_score: u32,
    pub spacing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Avatar ===
    pub avatar_x: f32,
    pub avatar_radius: f32,
    pub gravity: f32,
    pub impulse: f32,
    pub impulse_scale: f32,
    pub drag: f32,
    pub max_fall: f32,
    pub max_rise: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub scroll_speed: f32,
    pub gap_top_margin: f32,
    pub gap_bottom_margin: f32,

    // === Difficulty ===
    pub base_spacing: f32,
    /// Sorted by `above_score` descending after `sanitized()`
    pub spacing_tiers: Vec<SpacingTier>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            avatar_x: AVATAR_X,
            avatar_radius: AVATAR_RADIUS,
            gravity: GRAVITY,
            impulse: IMPULSE,
            impulse_scale: IMPULSE_SCALE,
            drag: DRAG,
            max_fall: MAX_FALL,
            max_rise: MAX_RISE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            gap_top_margin: GAP_TOP_MARGIN,
            gap_bottom_margin: GAP_BOTTOM_MARGIN,

            base_spacing: BASE_SPACING,
            spacing_tiers: SPACING_TIERS
                .iter()
                .map(|&(above_score, spacing)| SpacingTier {
                    above_score,
                    spacing,
                })
                .collect(),
        }
    }
}

impl Tuning {
    /// Clamp values a hand-edited file could get wrong into a usable range.
    pub fn sanitized(mut self) -> Self {
        self.avatar_radius = self.avatar_radius.max(1.0);
        self.drag = self.drag.clamp(0.0, 1.0);
        self.max_fall = self.max_fall.max(0.0);
        self.max_rise = self.max_rise.max(0.0);
        self.obstacle_width = self.obstacle_width.max(1.0);
        self.gap_height = self.gap_height.max(0.0);
        self.scroll_speed = self.scroll_speed.max(0.0);
        self.gap_top_margin = self.gap_top_margin.max(0.0);
        self.gap_bottom_margin = self.gap_bottom_margin.max(0.0);
        self.base_spacing = self.base_spacing.max(0.0);

        self.spacing_tiers
            .sort_by(|a, b| b.above_score.cmp(&a.above_score));
        self
    }

    /// Required horizontal spacing between spawns at `score`
    pub fn spacing_for_score(&self, score: u32) -> f32 {
        self.spacing_tiers
            .iter()
            .find(|tier| score > tier.above_score)
            .map(|tier| tier.spacing)
            .unwrap_or(self.base_spacing)
    }
}
