//! Time sources and frame delta computation

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic millisecond clock
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests and headless runs. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Wall clock for native builds
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct InstantTime {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for InstantTime {
    fn default() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TimeSource for InstantTime {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Turns successive timestamps into clamped frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous call; 0 on the first call. Never negative
    /// and never above the configured cap.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_zero() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.delta(5000.0), 0.0);
        assert!((clock.delta(5016.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_delta_is_capped() {
        let mut clock = FrameClock::new(0.1);
        clock.delta(0.0);
        assert_eq!(clock.delta(10_000.0), 0.1);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new(0.1);
        clock.delta(1000.0);
        assert_eq!(clock.delta(900.0), 0.0);
    }

    #[test]
    fn test_manual_time_clones_share() {
        let time = ManualTime::new(10.0);
        let other = time.clone();
        time.advance(5.0);
        assert_eq!(other.now_ms(), 15.0);
        other.set(1.0);
        assert_eq!(time.now_ms(), 1.0);
    }
}
