//! Presentation capability injected into the simulation
//!
//! The simulation never touches the DOM or the audio device directly. It
//! reports what happened through [`Feedback`], which the browser build
//! implements with real elements and Web Audio, and tests implement with
//! [`RecordingFeedback`].

/// Audible cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Coin collected - short high ping
    Pickup,
    /// Obstacle contact - longer low buzz
    Hit,
}

impl Tone {
    /// Oscillator frequency in Hz
    pub fn frequency(self) -> f32 {
        match self {
            Tone::Pickup => 1046.0,
            Tone::Hit => 220.0,
        }
    }

    /// Envelope length in milliseconds
    pub fn duration_ms(self) -> u32 {
        match self {
            Tone::Pickup => 120,
            Tone::Hit => 180,
        }
    }
}

/// What the HUD shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudState {
    pub score: u32,
    /// Seconds since the session started
    pub elapsed_secs: f64,
}

impl HudState {
    /// Elapsed time as displayed, one decimal place
    pub fn time_text(&self) -> String {
        format!("{:.1}", self.elapsed_secs.max(0.0))
    }
}

/// Sink for everything the player sees or hears outside the 3D scene
pub trait Feedback {
    fn play_tone(&mut self, tone: Tone);
    fn refresh_hud(&mut self, hud: &HudState);
    /// Show the modal overlay with a message
    fn show_message(&mut self, message: &str);
    fn hide_message(&mut self);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl Feedback for NullFeedback {
    fn play_tone(&mut self, _tone: Tone) {}
    fn refresh_hud(&mut self, _hud: &HudState) {}
    fn show_message(&mut self, _message: &str) {}
    fn hide_message(&mut self) {}
}

/// Remembers every call, for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct RecordingFeedback {
    pub tones: Vec<Tone>,
    pub huds: Vec<HudState>,
    pub messages: Vec<String>,
    pub overlay_visible: bool,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent HUD refresh
    pub fn last_hud(&self) -> Option<&HudState> {
        self.huds.last()
    }

    pub fn count(&self, tone: Tone) -> usize {
        self.tones.iter().filter(|t| **t == tone).count()
    }
}

impl Feedback for RecordingFeedback {
    fn play_tone(&mut self, tone: Tone) {
        self.tones.push(tone);
    }

    fn refresh_hud(&mut self, hud: &HudState) {
        self.huds.push(*hud);
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
        self.overlay_visible = true;
    }

    fn hide_message(&mut self) {
        self.overlay_visible = false;
    }
}
