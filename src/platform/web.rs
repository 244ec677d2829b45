//! Browser platform: `performance.now()`, DOM HUD/overlay and Web Audio

use web_sys::{Document, Element, Performance};

use super::clock::TimeSource;
use crate::audio::AudioManager;
use crate::feedback::{Feedback, HudState, Tone};

/// Element ids the page must provide
pub mod ids {
    pub const SCORE: &str = "score";
    pub const TIME: &str = "time";
    pub const OVERLAY: &str = "overlay";
    pub const START_BUTTON: &str = "startBtn";
}

/// Class toggled on the overlay to show it
const OVERLAY_VISIBLE_CLASS: &str = "visible";

/// `performance.now()`, falling back to `Date.now()` without a Performance
/// object
pub struct PerformanceTime {
    performance: Option<Performance>,
}

impl PerformanceTime {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Default for PerformanceTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for PerformanceTime {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// HUD, overlay and tones backed by the live page
pub struct DomFeedback {
    score: Option<Element>,
    time: Option<Element>,
    overlay: Option<Element>,
    message: Option<Element>,
    audio: AudioManager,
}

impl DomFeedback {
    pub fn new(document: &Document, volume: f32) -> Self {
        let overlay = lookup(document, ids::OVERLAY);
        let message = overlay
            .as_ref()
            .and_then(|o| o.query_selector("p").ok().flatten());

        Self {
            score: lookup(document, ids::SCORE),
            time: lookup(document, ids::TIME),
            overlay,
            message,
            audio: AudioManager::new(volume),
        }
    }

    /// Call from a user gesture so later tones are allowed to play
    pub fn unlock_audio(&self) {
        self.audio.resume();
    }
}

impl Feedback for DomFeedback {
    fn play_tone(&mut self, tone: Tone) {
        self.audio.play(tone);
    }

    fn refresh_hud(&mut self, hud: &HudState) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&hud.score.to_string()));
        }
        if let Some(el) = &self.time {
            el.set_text_content(Some(&hud.time_text()));
        }
    }

    fn show_message(&mut self, message: &str) {
        if let Some(el) = &self.message {
            el.set_text_content(Some(message));
        }
        if let Some(el) = &self.overlay {
            let _ = el.class_list().add_1(OVERLAY_VISIBLE_CLASS);
        }
    }

    fn hide_message(&mut self) {
        if let Some(el) = &self.overlay {
            let _ = el.class_list().remove_1(OVERLAY_VISIBLE_CLASS);
        }
    }
}

fn lookup(document: &Document, id: &str) -> Option<Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Missing HUD element #{id}");
    }
    el
}
