//! Input event mapping
//!
//! Events only set or clear the impulse level; nothing is queued, so the next
//! tick always sees the latest state.

use serde::{Deserialize, Serialize};

use crate::settings::Theme;
use crate::sim::{GapSource, Session};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` style name
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Key::ArrowUp,
            _ => Key::Other,
        }
    }
}

/// Raw host events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// On-screen flap button
    TouchStart,
    TouchEnd,
    PointerDown,
    PointerUp,
    /// Start button
    Start,
    /// Restart button on the game-over overlay
    Restart,
    ToggleTheme,
}

/// Routes events to a session and the view theme
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pub theme: Theme,
}

impl Controls {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn dispatch<R: GapSource>(&mut self, event: InputEvent, session: &mut Session<R>) {
        match event {
            InputEvent::KeyDown(Key::ArrowUp) | InputEvent::TouchStart | InputEvent::PointerDown => {
                session.set_impulse_held(true)
            }
            InputEvent::KeyUp(Key::ArrowUp) | InputEvent::TouchEnd | InputEvent::PointerUp => {
                session.set_impulse_held(false)
            }
            InputEvent::KeyDown(Key::Other) | InputEvent::KeyUp(Key::Other) => {}
            InputEvent::Start => session.start(),
            InputEvent::Restart => session.reset(),
            InputEvent::ToggleTheme => {
                self.theme.toggle();
                log::debug!("Theme -> {}", self.theme.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SessionPhase;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_code("Space"), Key::Other);
    }

    #[test]
    fn test_flap_requires_running_session() {
        let mut controls = Controls::default();
        let mut session = Session::new(1);

        controls.dispatch(InputEvent::KeyDown(Key::ArrowUp), &mut session);
        assert!(!session.impulse_held());

        controls.dispatch(InputEvent::Start, &mut session);
        assert_eq!(session.phase(), SessionPhase::Running);

        controls.dispatch(InputEvent::TouchStart, &mut session);
        assert!(session.impulse_held());
        controls.dispatch(InputEvent::KeyUp(Key::ArrowUp), &mut session);
        assert!(!session.impulse_held());

        controls.dispatch(InputEvent::PointerDown, &mut session);
        controls.dispatch(InputEvent::KeyDown(Key::Other), &mut session);
        assert!(session.impulse_held());
        controls.dispatch(InputEvent::PointerUp, &mut session);
        assert!(!session.impulse_held());
    }

    #[test]
    fn test_restart_and_theme() {
        let mut controls = Controls::new(Theme::Light);
        let mut session = Session::new(1);
        controls.dispatch(InputEvent::Start, &mut session);
        session.tick();
        controls.dispatch(InputEvent::Restart, &mut session);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.obstacles().is_empty());

        controls.dispatch(InputEvent::ToggleTheme, &mut session);
        assert!(controls.theme.is_dark());
    }
}
