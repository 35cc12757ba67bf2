//! Falling-leaf overlay
//!
//! Purely cosmetic. Leaves drift down with a sideways sway and never interact
//! with the avatar or obstacles.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Chance of a new leaf each frame
pub const SPAWN_CHANCE: f64 = 0.08;
/// Upper bound on live leaves
pub const MAX_LEAVES: usize = 128;
/// Leaves spawn this far above the top edge
const SPAWN_Y: f32 = -20.0;
/// ...and are dropped this far below the bottom edge
const DESPAWN_MARGIN: f32 = 30.0;
const SPIN_RATE: f32 = 0.03;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub pos: Vec2,
    /// Semi-major axis; the leaf is drawn as a `size` x `size / 2` ellipse
    pub size: f32,
    /// Rotation in radians
    pub angle: f32,
    /// Fall speed in pixels/frame
    pub speed: f32,
    pub sway: f32,
    /// +1 or -1
    pub sway_dir: f32,
    /// Green-ish hue in degrees (90-150)
    pub hue: f32,
}

impl Leaf {
    /// (hue, saturation, lightness)
    pub fn hsl(&self) -> (f32, f32, f32) {
        (self.hue, 0.6, 0.55)
    }

    fn advance(&mut self) {
        self.pos.y += self.speed;
        self.pos.x += self.angle.sin() * self.sway * self.sway_dir;
        self.angle += SPIN_RATE * self.sway_dir;
    }
}

/// Owns the live leaves and their own random stream
#[derive(Debug, Clone)]
pub struct LeafField {
    leaves: Vec<Leaf>,
    rng: Pcg32,
}

impl LeafField {
    pub fn new(seed: u64) -> Self {
        Self {
            leaves: Vec::with_capacity(MAX_LEAVES),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn clear(&mut self) {
        self.leaves.clear();
    }

    /// Spawn, drift and cull for one frame
    pub fn update(&mut self, width: f32, height: f32) {
        if self.leaves.len() < MAX_LEAVES && self.rng.random_bool(SPAWN_CHANCE) {
            let leaf = self.spawn(width);
            self.leaves.push(leaf);
        }

        for leaf in &mut self.leaves {
            leaf.advance();
        }

        self.leaves.retain(|leaf| leaf.pos.y < height + DESPAWN_MARGIN);
    }

    fn spawn(&mut self, width: f32) -> Leaf {
        let rng = &mut self.rng;
        Leaf {
            pos: Vec2::new(rng.random::<f32>() * width, SPAWN_Y),
            size: 18.0 + rng.random::<f32>() * 12.0,
            angle: rng.random::<f32>() * PI,
            speed: 1.5 + rng.random::<f32>() * 1.5,
            sway: 1.0 + rng.random::<f32>() * 2.0,
            sway_dir: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
            hue: 90.0 + rng.random::<f32>() * 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_spawn_and_fall_out() {
        let mut field = LeafField::new(11);
        for _ in 0..2000 {
            field.update(800.0, 600.0);
            for leaf in field.leaves() {
                assert!(leaf.pos.y < 630.0);
                assert!((18.0..=30.0).contains(&leaf.size));
                assert!((90.0..=150.0).contains(&leaf.hue));
                assert!(leaf.sway_dir == 1.0 || leaf.sway_dir == -1.0);
            }
        }
        // ~0.08 * 2000 spawns, each living 210-420 frames
        assert!(!field.leaves().is_empty());
        assert!(field.leaves().len() <= MAX_LEAVES);
    }

    #[test]
    fn test_leaf_motion() {
        let mut leaf = Leaf {
            pos: Vec2::new(100.0, 0.0),
            size: 20.0,
            angle: PI / 2.0,
            speed: 2.0,
            sway: 1.5,
            sway_dir: -1.0,
            hue: 120.0,
        };
        leaf.advance();
        assert_eq!(leaf.pos.y, 2.0);
        assert!((leaf.pos.x - 98.5).abs() < 1e-4);
        assert!((leaf.angle - (PI / 2.0 - 0.03)).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_leaves() {
        let mut a = LeafField::new(3);
        let mut b = LeafField::new(3);
        for _ in 0..300 {
            a.update(640.0, 480.0);
            b.update(640.0, 480.0);
        }
        assert_eq!(a.leaves(), b.leaves());
    }
}
