//! Text renderer: one status line every `every` ticks

use super::frame_loop::{Frame, Renderer};

pub struct ConsoleRenderer {
    every: u64,
    reference_energy: Option<f64>, // energy at the first frame after a reset
    last_since_reset: u64,
}

impl ConsoleRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            reference_energy: None,
            last_since_reset: 0,
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn present(&mut self, frame: &Frame<'_>) {
        // the per-reset tick count advances by exactly one per frame otherwise
        if frame.since_reset != self.last_since_reset + 1 {
            self.reference_energy = None;
        }
        self.last_since_reset = frame.since_reset;
        let e0 = *self.reference_energy.get_or_insert(frame.energy);

        if frame.tick % self.every != 0 {
            return;
        }

        let drift = if e0 != 0.0 { (frame.energy / e0 - 1.0) * 100.0 } else { 0.0 };
        let last = frame.trail.last().copied().unwrap_or([0.0, 0.0]);
        println!(
            "tick {:6}  t = {:9.1} s  alt = {:10.1} m  |v| = {:7.1} m/s  dir = {:?}  E drift = {:+.4}%  trail = {:4} (last {:.4e}, {:.4e})",
            frame.tick,
            frame.t,
            frame.altitude,
            frame.rocket.velocity.norm(),
            frame.direction,
            drift,
            frame.trail.len(),
            last[0],
            last[1],
        );
    }
}
