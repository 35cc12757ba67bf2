//! Avatar kinematics
//!
//! Only the vertical axis moves; the avatar sits at a fixed x while the
//! obstacle field scrolls past it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The player's avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Centre position (x never changes during a session)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity in pixels/tick (positive = down)
    pub velocity: f32,
    pub gravity: f32,
    /// Full impulse magnitude; only `impulse_scale` of it lands per held tick
    pub impulse: f32,
    pub impulse_scale: f32,
    pub drag: f32,
    pub max_fall: f32,
    pub max_rise: f32,
}

impl Avatar {
    /// Spawn at rest, vertically centred in a field of `field_height`
    pub fn new(tuning: &Tuning, field_height: f32) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, field_height / 2.0),
            radius: tuning.avatar_radius,
            velocity: 0.0,
            gravity: tuning.gravity,
            impulse: tuning.impulse,
            impulse_scale: tuning.impulse_scale,
            drag: tuning.drag,
            max_fall: tuning.max_fall,
            max_rise: tuning.max_rise,
        }
    }

    /// Advance one tick. Holding the impulse spreads a flap over several
    /// ticks instead of an instantaneous jump.
    pub fn tick(&mut self, impulse_held: bool) {
        if impulse_held {
            self.velocity += self.impulse * self.impulse_scale;
        }
        self.velocity += self.gravity;
        self.velocity *= self.drag;
        self.velocity = self.velocity.clamp(-self.max_rise, self.max_fall);
        self.pos.y += self.velocity;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}
