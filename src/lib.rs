//! Sky Hopper - A side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, obstacles, collisions, session)
//! - `driver`: Frame loop with an injected scheduler
//! - `effects`: Decorative falling-leaf overlay (read-only w.r.t. the sim)
//! - `platform`: Host input event mapping
//! - `settings` / `tuning`: Data-driven configuration

pub mod driver;
pub mod effects;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::{Driver, FixedRate, Frame, FrameBudget, FrameScheduler, View};
pub use settings::{Settings, Theme};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Host frame cadence (one sim tick per displayed frame)
    pub const FRAME_RATE: u32 = 60;

    /// Default field dimensions (host normally supplies real ones)
    pub const DEFAULT_FIELD_WIDTH: f32 = 1280.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 800.0;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 120.0;
    pub const AVATAR_RADIUS: f32 = 22.0;
    pub const GRAVITY: f32 = 0.16;
    /// Upward impulse (negative = up in screen space)
    pub const IMPULSE: f32 = -9.0;
    /// Fraction of the impulse applied per held tick
    pub const IMPULSE_SCALE: f32 = 0.09;
    /// Velocity multiplier applied every tick
    pub const DRAG: f32 = 0.97;
    /// Terminal fall speed
    pub const MAX_FALL: f32 = 3.5;
    /// Fastest allowed rise (as a positive magnitude)
    pub const MAX_RISE: f32 = 8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const GAP_HEIGHT: f32 = 240.0;
    pub const SCROLL_SPEED: f32 = 2.31;
    /// Smallest allowed gap offset from the top of the field
    pub const GAP_TOP_MARGIN: f32 = 80.0;
    /// Space reserved below the lowest possible gap
    pub const GAP_BOTTOM_MARGIN: f32 = 160.0;

    /// Spacing before any score threshold is crossed
    pub const BASE_SPACING: f32 = 520.0;
    /// (score strictly above, spacing) pairs, checked highest first
    pub const SPACING_TIERS: [(u32, f32); 3] = [(120, 220.0), (80, 300.0), (40, 400.0)];
}
