//! Demo-mode pilot
//!
//! Steers toward the middle of the next opening using only what a view
//! could see in a `Snapshot`.

use super::state::Snapshot;

/// Ticks of velocity to project forward before comparing against the target
const LOOKAHEAD_TICKS: f32 = 12.0;

/// Height the pilot is aiming for this tick
pub fn target_y(snapshot: &Snapshot) -> f32 {
    let avatar = &snapshot.avatar;
    snapshot
        .obstacles
        .iter()
        .find(|o| o.right(snapshot.geometry.width) > avatar.left())
        .map(|o| o.gap_y + snapshot.geometry.gap_height / 2.0)
        .unwrap_or(snapshot.field.height / 2.0)
}

/// Whether to hold the impulse this tick
pub fn decide(snapshot: &Snapshot) -> bool {
    let avatar = &snapshot.avatar;
    let predicted = avatar.pos.y + avatar.velocity * LOOKAHEAD_TICKS;
    predicted > target_y(snapshot)
}
