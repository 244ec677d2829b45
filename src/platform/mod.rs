//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time sources feeding the frame clock
//! - DOM HUD, overlay and audio (web only)

pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{FrameClock, ManualTime, TimeSource};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::InstantTime;
