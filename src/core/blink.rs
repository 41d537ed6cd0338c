//! Eyelid blink scheduler.
//!
//! The controller stores when the last blink started and how long to wait
//! for the next one. Whether the eye is idle or mid-blink is re-derived
//! every frame from `time - last_blink_time`.

use super::config::{AnimationConfig, BlinkBoot};
use rand::prelude::*;
use std::f64::consts::PI;

/// Closure fraction `[0, 1]` for a blink that started `since_onset` seconds ago.
///
/// Half-sine envelope: 0 at onset, 1 halfway through, back to 0 at `duration`,
/// and 0 for every later instant.
#[inline]
pub fn closure_fraction(since_onset: f64, duration: f64) -> f32 {
    if (0.0..duration).contains(&since_onset) {
        ((since_onset / duration) * PI).sin() as f32
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkState {
    pub last_blink_time: f64,
    pub next_blink_delay: f64,
}

pub struct BlinkController {
    state: Option<BlinkState>,
    duration: f64,
    interval: (f64, f64),
    boot: BlinkBoot,
    // Set by a deferred boot: the baseline is not a real onset, so no
    // envelope plays until the first scheduled blink fires.
    awaiting_first_onset: bool,
    rng: StdRng,
}

impl BlinkController {
    pub fn new(config: &AnimationConfig, rng: StdRng) -> Self {
        Self {
            state: None,
            duration: config.blink_duration_secs,
            interval: config.blink_interval_secs,
            boot: config.blink_boot,
            awaiting_first_onset: false,
            rng,
        }
    }

    /// Start from an explicit baseline instead of the first observed frame.
    pub fn with_state(config: &AnimationConfig, rng: StdRng, state: BlinkState) -> Self {
        Self {
            state: Some(state),
            ..Self::new(config, rng)
        }
    }

    pub fn state(&self) -> Option<BlinkState> {
        self.state
    }

    fn draw_delay(&mut self) -> f64 {
        let (min, max) = self.interval;
        min + self.rng.gen::<f64>() * (max - min)
    }

    /// Advance to `time` and return the eyelid closure fraction.
    pub fn update(&mut self, time: f64) -> f32 {
        let mut state = match self.state {
            Some(s) => s,
            None => {
                self.awaiting_first_onset = self.boot == BlinkBoot::Deferred;
                BlinkState {
                    last_blink_time: time,
                    next_blink_delay: self.draw_delay(),
                }
            }
        };

        if time - state.last_blink_time > state.next_blink_delay {
            state.last_blink_time = time;
            state.next_blink_delay = self.draw_delay();
            self.awaiting_first_onset = false;
            log::debug!(
                "[blink] onset at {:.2}s, next in {:.2}s",
                time,
                state.next_blink_delay
            );
        }
        self.state = Some(state);

        if self.awaiting_first_onset {
            return 0.0;
        }
        closure_fraction(time - state.last_blink_time, self.duration)
    }
}
