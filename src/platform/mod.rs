//! Platform abstraction layer
//!
//! Translates host events (keyboard, touch, pointer, UI buttons) into session
//! calls. Rendering and window management stay with the host.

pub mod input;

pub use input::{Controls, InputEvent, Key};
