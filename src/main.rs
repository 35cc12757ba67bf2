//! Sky Hopper entry point
//!
//! Native builds run a headless demo: the autopilot plays, the session is
//! restarted after every crash, and scores go to the log.
//!
//! Usage: `sky-hopper [settings.json] [frames] [--fast]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use sky_hopper::consts::FRAME_RATE;
    use sky_hopper::driver::{Driver, FixedRate, Frame, FrameBudget, FrameScheduler, View};
    use sky_hopper::effects::LeafField;
    use sky_hopper::platform::{Controls, InputEvent, Key};
    use sky_hopper::settings::Settings;
    use sky_hopper::sim::{FieldSize, Session, SessionPhase, autopilot};

    const DEFAULT_SETTINGS_PATH: &str = "sky_hopper.json";
    /// One minute at the display cadence
    const DEFAULT_FRAMES: u64 = 60 * FRAME_RATE as u64;
    /// Keeps the leaf stream independent of the obstacle stream
    const LEAF_SEED_SALT: u64 = 0x5eed_1eaf;

    /// Logs run results instead of drawing
    #[derive(Default)]
    struct SummaryView {
        runs: u32,
        best: u32,
        last_phase: Option<SessionPhase>,
    }

    impl View for SummaryView {
        fn present(&mut self, frame: &Frame<'_>) {
            let snap = frame.snapshot;
            if snap.phase == SessionPhase::Ended && self.last_phase != Some(SessionPhase::Ended) {
                self.runs += 1;
                self.best = self.best.max(snap.score);
                log::info!("Run {} ended with score {} (best {})", self.runs, snap.score, self.best);
            }
            if frame.index % (10 * FRAME_RATE as u64) == 0 {
                log::debug!(
                    "frame {} y={:.1} v={:.2} obstacles={} leaves={} theme={}",
                    frame.index,
                    snap.avatar.pos.y,
                    snap.avatar.velocity,
                    snap.obstacles.len(),
                    frame.leaves.len(),
                    frame.theme.as_str()
                );
            }
            self.last_phase = Some(snap.phase);
        }
    }

    /// Start idle sessions, restart ended ones, otherwise let the autopilot fly
    fn feed_input(session: &mut Session, controls: &mut Controls) {
        match session.phase() {
            SessionPhase::Idle => controls.dispatch(InputEvent::Start, session),
            SessionPhase::Ended => controls.dispatch(InputEvent::Restart, session),
            SessionPhase::Running => {
                let key = Key::ArrowUp;
                let event = if autopilot::decide(&session.snapshot()) {
                    InputEvent::KeyDown(key)
                } else {
                    InputEvent::KeyUp(key)
                };
                controls.dispatch(event, session);
            }
        }
    }

    fn play<S: FrameScheduler>(scheduler: S, settings: &Settings, seed: u64) {
        let mut session = Session::with_tuning(settings.tuning.clone(), FieldSize::default(), seed);
        let mut controls = Controls::new(settings.theme);

        let mut driver = Driver::new(scheduler, SummaryView::default());
        if settings.leaves {
            driver = driver.with_leaves(LeafField::new(seed ^ LEAF_SEED_SALT));
        }

        let frames = driver.run(&mut session, &mut controls, feed_input);
        let view = driver.into_view();
        log::info!(
            "Finished {} frames: {} completed runs, best score {}, current score {}",
            frames,
            view.runs,
            view.best.max(session.score()),
            session.score()
        );
    }

    pub fn main() {
        env_logger::init();

        let mut settings_path = PathBuf::from(DEFAULT_SETTINGS_PATH);
        let mut frames = DEFAULT_FRAMES;
        let mut fast = false;
        let mut positional = 0;
        for arg in std::env::args().skip(1) {
            if arg == "--fast" {
                fast = true;
                continue;
            }
            match positional {
                0 => settings_path = PathBuf::from(arg),
                1 => match arg.parse() {
                    Ok(n) => frames = n,
                    Err(_) => log::warn!("Ignoring invalid frame count {:?}", arg),
                },
                _ => log::warn!("Ignoring extra argument {:?}", arg),
            }
            positional += 1;
        }

        let settings = Settings::load(&settings_path);
        let seed = settings.seed_or_random();
        log::info!("Sky Hopper (headless) starting, seed {}, {} frames", seed, frames);

        if fast {
            play(FrameBudget::new(frames), &settings, seed);
        } else {
            play(FixedRate::new(FRAME_RATE).with_limit(frames), &settings, seed);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Session::tick` from their own animation callback
}
