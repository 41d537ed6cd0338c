/// Elapsed time since mount and time since the previous frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f64,
    pub delta: f32,
}

/// Turns raw timestamps from the display clock into [`FrameTime`]s.
///
/// The first tick defines the epoch; a timestamp earlier than the previous
/// one yields a zero delta instead of a negative one.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    start: Option<f64>,
    last: f64,
}

impl FrameClock {
    pub fn tick(&mut self, now_secs: f64) -> FrameTime {
        let start = *self.start.get_or_insert(now_secs);
        let elapsed = (now_secs - start).max(self.last);
        let delta = (elapsed - self.last) as f32;
        self.last = elapsed;
        FrameTime { elapsed, delta }
    }
}
