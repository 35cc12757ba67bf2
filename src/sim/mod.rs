//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads
//! - Injected, seedable randomness only
//! - Stable obstacle order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod avatar;
pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use collision::{CollisionReport, evaluate, hits_obstacle, out_of_bounds};
pub use field::{GapSource, Obstacle, ObstacleField, ObstacleGeometry};
pub use state::{FieldSize, Session, SessionPhase, Snapshot};
