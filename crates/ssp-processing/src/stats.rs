//! Windowed per-channel amplitude statistics

use ssp_core::{ChannelId, StatsRecord};

/// Running mean, RMS, and peak amplitude over strictly periodic
/// windows of one channel's stream. Windows tile the stream; nothing
/// slides or overlaps.
#[derive(Debug, Clone)]
pub struct StatsAccumulator {
    channel: ChannelId,
    window: usize,
    sum: f64,
    sum_sq: f64,
    peak: f64,
    count: usize,
}

impl StatsAccumulator {
    /// New accumulator for one channel. The window length must already
    /// be validated positive by session setup.
    pub fn new(channel: ChannelId, window: usize) -> Self {
        StatsAccumulator {
            channel,
            window,
            sum: 0.0,
            sum_sq: 0.0,
            peak: 0.0,
            count: 0,
        }
    }

    /// Fold one sample into the current window
    pub fn accumulate(&mut self, sample: f64) {
        self.sum += sample;
        self.sum_sq += sample * sample;
        if sample.abs() > self.peak {
            self.peak = sample.abs();
        }
        self.count += 1;
    }

    /// Emit the window's record once it is full, resetting all running
    /// fields for the next window
    pub fn maybe_flush(&mut self) -> Option<StatsRecord> {
        if self.count < self.window {
            return None;
        }

        let record = StatsRecord {
            channel: self.channel.clone(),
            mean: self.sum / self.window as f64,
            rms: (self.sum_sq / self.window as f64).sqrt(),
            peak: self.peak,
        };
        self.count = 0;
        self.sum = 0.0;
        self.sum_sq = 0.0;
        self.peak = 0.0;
        Some(record)
    }

    /// Discard the partial window in progress
    pub fn reset(&mut self) {
        self.count = 0;
        self.sum = 0.0;
        self.sum_sq = 0.0;
        self.peak = 0.0;
    }

    /// Configured window length
    pub fn window(&self) -> usize {
        self.window
    }

    /// Samples accumulated into the current window so far
    pub fn pending(&self) -> usize {
        self.count
    }
}
