use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroU32;

use types::{FRAME_WINDOW, MAX_TICKS_PER_FRAME};

/// Generations advanced per displayed frame. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicksPerFrame(NonZeroU32);

impl TicksPerFrame {
    /// Clamp a raw control value: NaN and anything under 1 become 1,
    /// fractions are floored, the top is capped.
    pub fn from_raw(raw: f64) -> Self {
        let ticks = if raw >= 1.0 {
            raw.min(MAX_TICKS_PER_FRAME as f64).floor() as u32
        } else {
            1
        };
        Self(NonZeroU32::new(ticks).unwrap_or(NonZeroU32::MIN))
    }

    /// Parse the text of a numeric input; unparsable text counts as 1.
    pub fn parse(text: &str) -> Self {
        Self::from_raw(text.trim().parse::<f64>().unwrap_or(1.0))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TicksPerFrame {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

/// Rolling frame-rate statistics over the last `FRAME_WINDOW` frames.
/// Observability only.
#[derive(Debug, Default)]
pub struct FrameStats {
    last_timestamp: Option<f64>,
    samples: VecDeque<f64>,
    latest: f64,
    mean: f64,
    min: f64,
    max: f64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(FRAME_WINDOW + 1),
            ..Default::default()
        }
    }

    /// Note a frame at `now` (ms). Returns the instantaneous rate, or None
    /// for the first frame after a restart or a non-advancing timestamp.
    pub fn record(&mut self, now: f64) -> Option<f64> {
        let previous = self.last_timestamp.replace(now)?;
        let delta = now - previous;
        if delta.is_nan() || delta <= 0.0 {
            return None;
        }
        let fps = 1000.0 / delta;
        self.push_sample(fps);
        Some(fps)
    }

    /// Forget the previous timestamp so a pause is not counted as a frame.
    pub fn restart(&mut self) {
        self.last_timestamp = None;
    }

    pub fn push_sample(&mut self, fps: f64) {
        self.samples.push_back(fps);
        if self.samples.len() > FRAME_WINDOW {
            self.samples.pop_front();
        }

        self.latest = fps;
        self.min = self.samples.iter().copied().fold(f64::INFINITY, f64::min);
        self.max = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.mean = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
    }

    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        if self.samples.is_empty() {
            return None;
        }
        Some(FrameSnapshot {
            latest: self.latest.round() as i64,
            mean: self.mean.round() as i64,
            min: self.min.round() as i64,
            max: self.max.round() as i64,
        })
    }
}

/// Rounded frame rates for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub latest: i64,
    pub mean: i64,
    pub min: i64,
    pub max: i64,
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames per Second:")?;
        writeln!(f, "         latest = {}", self.latest)?;
        writeln!(f, "avg of last {FRAME_WINDOW} = {}", self.mean)?;
        writeln!(f, "min of last {FRAME_WINDOW} = {}", self.min)?;
        write!(f, "max of last {FRAME_WINDOW} = {}", self.max)
    }
}
