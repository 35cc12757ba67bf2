//! Session state and the Idle / Running / Ended machine
//!
//! A `Session` owns everything a single game needs: avatar, obstacle field,
//! score, phase and its random source. Nothing is global, so any number of
//! sessions can run side by side.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::field::{GapSource, Obstacle, ObstacleField, ObstacleGeometry};
use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for start; nothing moves
    #[default]
    Idle,
    /// Physics, spawning and collision active
    Running,
    /// Collided; stays here until `reset()`
    Ended,
}

/// Playfield dimensions supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

impl FieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// Everything a view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub avatar: Avatar,
    pub obstacles: Vec<Obstacle>,
    pub geometry: ObstacleGeometry,
    pub score: u32,
    pub phase: SessionPhase,
    pub field: FieldSize,
    pub impulse_held: bool,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Session<R = Pcg32> {
    pub(crate) tuning: Tuning,
    pub(crate) field_size: FieldSize,
    pub(crate) avatar: Avatar,
    pub(crate) obstacles: ObstacleField,
    pub(crate) score: u32,
    pub(crate) phase: SessionPhase,
    pub(crate) impulse_held: bool,
    pub(crate) rng: R,
}

impl Session<Pcg32> {
    /// Default tuning and field size, gaps drawn from a seeded PCG stream
    pub fn new(seed: u64) -> Self {
        Self::with_source(
            Tuning::default(),
            FieldSize::default(),
            Pcg32::seed_from_u64(seed),
        )
    }

    pub fn with_tuning(tuning: Tuning, field_size: FieldSize, seed: u64) -> Self {
        Self::with_source(tuning, field_size, Pcg32::seed_from_u64(seed))
    }
}

impl<R: GapSource> Session<R> {
    /// Build a session around any gap source (tests pass scripted ones)
    pub fn with_source(tuning: Tuning, field_size: FieldSize, rng: R) -> Self {
        let tuning = tuning.sanitized();
        Self {
            avatar: Avatar::new(&tuning, field_size.height),
            obstacles: ObstacleField::new(&tuning),
            tuning,
            field_size,
            score: 0,
            phase: SessionPhase::Idle,
            impulse_held: false,
            rng,
        }
    }

    /// Idle -> Running. Only the first call after a reset has any effect.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Idle {
            log::info!("Session started");
            self.phase = SessionPhase::Running;
        }
    }

    /// Back to a pristine Idle state from any phase
    pub fn reset(&mut self) {
        log::info!("Session reset (previous score {})", self.score);
        self.avatar = Avatar::new(&self.tuning, self.field_size.height);
        self.obstacles.clear();
        self.score = 0;
        self.phase = SessionPhase::Idle;
        self.impulse_held = false;
    }

    /// Press/release. A press only registers while running; a release
    /// always clears the level.
    pub fn set_impulse_held(&mut self, held: bool) {
        if !held || self.accepting_input() {
            self.impulse_held = held;
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Field resized to {}x{}", width, height);
        self.field_size = FieldSize::new(width, height);
    }

    pub fn accepting_input(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.obstacles()
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn impulse_held(&self) -> bool {
        self.impulse_held
    }

    pub fn required_spacing(&self) -> f32 {
        self.obstacles.required_spacing()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            avatar: self.avatar.clone(),
            obstacles: self.obstacles.obstacles().to_vec(),
            geometry: self.obstacles.geometry(),
            score: self.score,
            phase: self.phase,
            field: self.field_size,
            impulse_held: self.impulse_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_centred() {
        let session = Session::new(1);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.avatar().pos.y, DEFAULT_FIELD_HEIGHT / 2.0);
    }

    #[test]
    fn test_start_only_once() {
        let mut session = Session::new(1);
        session.start();
        assert_eq!(session.phase(), SessionPhase::Running);

        session.phase = SessionPhase::Ended;
        session.start();
        assert_eq!(session.phase(), SessionPhase::Ended);
    }

    #[test]
    fn test_press_ignored_unless_running() {
        let mut session = Session::new(1);
        session.set_impulse_held(true);
        assert!(!session.impulse_held());

        session.start();
        session.set_impulse_held(true);
        assert!(session.impulse_held());

        session.phase = SessionPhase::Ended;
        session.set_impulse_held(false);
        assert!(!session.impulse_held());
    }

    #[test]
    fn test_reset_uses_current_field_height() {
        let mut session = Session::new(1);
        session.resize(640.0, 480.0);
        session.reset();
        assert_eq!(session.avatar().pos.y, 240.0);
        assert_eq!(session.field_size(), FieldSize::new(640.0, 480.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = Session::new(3);
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, SessionPhase::Idle);
        assert_eq!(back.geometry.gap_height, 240.0);
    }
}
