//! Collision detection and pass scoring
//!
//! The avatar is a circle, but it is tested as its axis-aligned bounding box:
//! an x-overlap with an obstacle is a hit unless the box sits strictly inside
//! the opening. Field bounds are tested the same way.

use super::avatar::Avatar;
use super::field::{Obstacle, ObstacleGeometry};

/// Result of evaluating one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Avatar touched an obstacle slab or left the field
    pub collided: bool,
    /// Obstacles cleared this tick (each one only ever counted once)
    pub newly_scored: u32,
}

/// Check a single obstacle against the avatar
pub fn hits_obstacle(avatar: &Avatar, obstacle: &Obstacle, geometry: ObstacleGeometry) -> bool {
    let overlaps_x =
        avatar.right() > obstacle.x && avatar.left() < obstacle.right(geometry.width);
    if !overlaps_x {
        return false;
    }
    avatar.top() < obstacle.gap_y || avatar.bottom() > obstacle.gap_y + geometry.gap_height
}

/// Check the avatar against the top and bottom of the field
pub fn out_of_bounds(avatar: &Avatar, field_height: f32) -> bool {
    avatar.top() < 0.0 || avatar.bottom() > field_height
}

/// Test collisions and mark newly passed obstacles.
///
/// Mutates only the `passed` flags; the caller applies the score delta.
pub fn evaluate(
    avatar: &Avatar,
    obstacles: &mut [Obstacle],
    geometry: ObstacleGeometry,
    field_height: f32,
) -> CollisionReport {
    let collided = obstacles
        .iter()
        .any(|obstacle| hits_obstacle(avatar, obstacle, geometry))
        || out_of_bounds(avatar, field_height);

    let mut newly_scored = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right(geometry.width) < avatar.pos.x {
            obstacle.passed = true;
            newly_scored += 1;
        }
    }

    CollisionReport {
        collided,
        newly_scored,
    }
}
