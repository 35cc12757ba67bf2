//! Frame driver
//!
//! One simulation tick per displayed frame, then hand the result to a view.
//! The cadence comes from an injected `FrameScheduler`, so tests and headless
//! runs can step as fast as they like while a windowed host sleeps to 60 Hz.

use std::thread;
use std::time::{Duration, Instant};

use crate::effects::{Leaf, LeafField};
use crate::platform::Controls;
use crate::settings::Theme;
use crate::sim::{GapSource, Session, Snapshot};

/// Decides when the next frame happens, and whether there is one
pub trait FrameScheduler {
    /// Block until the next frame is due. `false` means the host has stopped.
    fn next_frame(&mut self) -> bool;
}

/// Sleeps to a fixed frame rate, optionally stopping after a number of frames
#[derive(Debug, Clone)]
pub struct FixedRate {
    period: Duration,
    deadline: Option<Instant>,
    remaining: Option<u64>,
}

impl FixedRate {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            deadline: None,
            remaining: None,
        }
    }

    pub fn with_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl FrameScheduler for FixedRate {
    fn next_frame(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        let deadline = match self.deadline {
            None => now,
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                deadline
            }
            Some(deadline) => {
                // Late by more than a whole frame: resync rather than burst
                if now - deadline > self.period {
                    log::warn!(
                        "Frame ran {:.1}ms late, resyncing",
                        (now - deadline).as_secs_f64() * 1000.0
                    );
                    now
                } else {
                    deadline
                }
            }
        };
        self.deadline = Some(deadline + self.period);
        true
    }
}

/// Runs a fixed number of frames back to back without sleeping
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Everything a view gets for one frame
#[derive(Debug)]
pub struct Frame<'a> {
    pub snapshot: &'a Snapshot,
    pub leaves: &'a [Leaf],
    pub theme: Theme,
    /// Frames presented so far (drives cosmetic animation like wing flaps)
    pub index: u64,
}

/// Something that draws (or otherwise consumes) frames
pub trait View {
    fn present(&mut self, frame: &Frame<'_>);
}

pub struct Driver<S, V> {
    scheduler: S,
    view: V,
    leaves: Option<LeafField>,
    frames: u64,
}

impl<S: FrameScheduler, V: View> Driver<S, V> {
    pub fn new(scheduler: S, view: V) -> Self {
        Self {
            scheduler,
            view,
            leaves: None,
            frames: 0,
        }
    }

    /// Enable the falling-leaf overlay
    pub fn with_leaves(mut self, leaves: LeafField) -> Self {
        self.leaves = Some(leaves);
        self
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Update then render a single frame, ignoring the scheduler
    pub fn step<R: GapSource>(&mut self, session: &mut Session<R>, theme: Theme) -> Snapshot {
        let snapshot = session.tick();

        if let Some(leaves) = self.leaves.as_mut() {
            leaves.update(snapshot.field.width, snapshot.field.height);
        }
        let leaves = self.leaves.as_ref().map(LeafField::leaves).unwrap_or(&[]);

        self.view.present(&Frame {
            snapshot: &snapshot,
            leaves,
            theme,
            index: self.frames,
        });
        self.frames += 1;
        snapshot
    }

    /// Loop until the scheduler stops. `before_tick` is where the host feeds
    /// input for the coming frame. Returns the number of frames run.
    pub fn run<R, F>(&mut self, session: &mut Session<R>, controls: &mut Controls, mut before_tick: F) -> u64
    where
        R: GapSource,
        F: FnMut(&mut Session<R>, &mut Controls),
    {
        let start = self.frames;
        while self.scheduler.next_frame() {
            before_tick(session, controls);
            self.step(session, controls.theme);
        }
        self.frames - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputEvent;
    use crate::sim::SessionPhase;

    #[derive(Default)]
    struct Recorder {
        phases: Vec<SessionPhase>,
        indices: Vec<u64>,
        themes: Vec<Theme>,
        leaf_counts: Vec<usize>,
    }

    impl View for Recorder {
        fn present(&mut self, frame: &Frame<'_>) {
            self.phases.push(frame.snapshot.phase);
            self.indices.push(frame.index);
            self.themes.push(frame.theme);
            self.leaf_counts.push(frame.leaves.len());
        }
    }

    #[test]
    fn test_frame_budget() {
        let mut budget = FrameBudget::new(3);
        assert!(budget.next_frame());
        assert!(budget.next_frame());
        assert!(budget.next_frame());
        assert!(!budget.next_frame());
    }

    #[test]
    fn test_fixed_rate_limit_and_cadence() {
        let mut rate = FixedRate::new(200).with_limit(4);
        let started = Instant::now();
        let mut frames = 0;
        while rate.next_frame() {
            frames += 1;
        }
        assert_eq!(frames, 4);
        // First frame is immediate, the other three wait 5ms each
        assert!(started.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_run_presents_every_frame() {
        let mut session = Session::new(4);
        let mut controls = Controls::new(Theme::Dark);
        let mut driver = Driver::new(FrameBudget::new(10), Recorder::default());

        let ran = driver.run(&mut session, &mut controls, |session, controls| {
            controls.dispatch(InputEvent::Start, session);
        });

        assert_eq!(ran, 10);
        assert_eq!(driver.frames(), 10);
        let view = driver.into_view();
        assert_eq!(view.indices, (0..10).collect::<Vec<_>>());
        assert!(view.phases.iter().all(|&p| p == SessionPhase::Running));
        assert!(view.themes.iter().all(|&t| t == Theme::Dark));
        assert!(view.leaf_counts.iter().all(|&n| n == 0));
    }

    #[test]
    fn test_step_is_single_tick() {
        let mut session = Session::new(4);
        session.start();
        let mut driver =
            Driver::new(FrameBudget::new(0), Recorder::default()).with_leaves(LeafField::new(1));

        let before = session.avatar().pos.y;
        let snap = driver.step(&mut session, Theme::Light);
        assert!(snap.avatar.pos.y > before);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(driver.view().indices, vec![0]);
    }

    #[test]
    fn test_leaves_animate_while_idle() {
        let mut session = Session::new(4);
        let mut controls = Controls::default();
        let mut driver =
            Driver::new(FrameBudget::new(600), Recorder::default()).with_leaves(LeafField::new(8));

        driver.run(&mut session, &mut controls, |_, _| {});

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(driver.view().leaf_counts.iter().any(|&n| n > 0));
    }
}
