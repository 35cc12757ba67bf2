//! Per-frame simulation step
//!
//! Order within a running tick: obstacle field, avatar, collision/scoring,
//! score delta, phase transition.

use super::collision::evaluate;
use super::field::GapSource;
use super::state::{Session, SessionPhase, Snapshot};

impl<R: GapSource> Session<R> {
    /// Advance one frame and return what should be drawn.
    ///
    /// Idle and Ended sessions are left untouched.
    pub fn tick(&mut self) -> Snapshot {
        if self.phase == SessionPhase::Running {
            self.step_running();
        }
        self.snapshot()
    }

    fn step_running(&mut self) {
        let size = self.field_size;

        self.obstacles
            .tick(self.score, size.width, size.height, &mut self.rng);

        let held = self.impulse_held && self.accepting_input();
        self.avatar.tick(held);

        let geometry = self.obstacles.geometry();
        let report = evaluate(
            &self.avatar,
            self.obstacles.obstacles_mut(),
            geometry,
            size.height,
        );

        if report.newly_scored > 0 {
            self.score = self.score.saturating_add(report.newly_scored);
            log::trace!("Score +{} -> {}", report.newly_scored, self.score);
        }

        if report.collided {
            log::info!("Game over with score {}", self.score);
            self.phase = SessionPhase::Ended;
        }
    }
}
