//! Pre-defined ground motion patterns for station simulation

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Predefined ground motion patterns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WaveformPattern {
    /// Quiet site, background level only
    Quiet { level: f64 },
    /// Ocean microseism band oscillation
    Microseism {
        period: f64,
        amplitude: f64,
        baseline: f64,
    },
    /// Distant event: long-period wavetrain with exponential coda
    Teleseism {
        arrival_time: f64,
        period: f64,
        amplitude: f64,
        decay_rate: f64,
    },
    /// Nearby event: impulsive onset, fast ring-down
    LocalEvent {
        arrival_time: f64,
        dominant_period: f64,
        amplitude: f64,
        decay_rate: f64,
    },
    /// Square calibration pulse train
    Calibration { period: f64, amplitude: f64 },
    /// Linear mass position drift
    Drift { rate: f64 },
}

impl WaveformPattern {
    /// Ground motion at given time
    pub fn amplitude_at(&self, time: f64) -> f64 {
        match self {
            WaveformPattern::Quiet { level } => *level,

            WaveformPattern::Microseism { period, amplitude, baseline } => {
                baseline + amplitude * (2.0 * PI * time / period).sin()
            },

            WaveformPattern::Teleseism { arrival_time, period, amplitude, decay_rate } => {
                if time < *arrival_time {
                    0.0
                } else {
                    let elapsed = time - arrival_time;
                    amplitude * (-decay_rate * elapsed).exp() * (2.0 * PI * elapsed / period).sin()
                }
            },

            WaveformPattern::LocalEvent {
                arrival_time,
                dominant_period,
                amplitude,
                decay_rate,
            } => {
                if time < *arrival_time {
                    0.0
                } else {
                    let elapsed = time - arrival_time;
                    let envelope = elapsed * (-decay_rate * elapsed).exp();
                    amplitude * envelope * (2.0 * PI * elapsed / dominant_period).sin()
                }
            },

            WaveformPattern::Calibration { period, amplitude } => {
                let phase = time % period;
                if phase < period / 2.0 {
                    *amplitude
                } else {
                    -*amplitude
                }
            },

            WaveformPattern::Drift { rate } => rate * time,
        }
    }

    /// Get pattern description
    pub fn description(&self) -> &'static str {
        match self {
            WaveformPattern::Quiet { .. } => "Quiet site",
            WaveformPattern::Microseism { .. } => "Ocean microseism",
            WaveformPattern::Teleseism { .. } => "Teleseismic wavetrain",
            WaveformPattern::LocalEvent { .. } => "Local event",
            WaveformPattern::Calibration { .. } => "Calibration pulse",
            WaveformPattern::Drift { .. } => "Mass drift",
        }
    }

    /// Create common preset patterns
    pub fn presets() -> Vec<(&'static str, WaveformPattern)> {
        vec![
            ("Quiet Site", WaveformPattern::Quiet { level: 0.02 }),
            ("Calm Microseism", WaveformPattern::Microseism {
                period: 6.0, amplitude: 0.3, baseline: 0.0
            }),
            ("Storm Microseism", WaveformPattern::Microseism {
                period: 4.5, amplitude: 1.5, baseline: 0.0
            }),
            ("Distant Teleseism", WaveformPattern::Teleseism {
                arrival_time: 30.0, period: 20.0, amplitude: 40.0, decay_rate: 0.005
            }),
            ("Regional Event", WaveformPattern::LocalEvent {
                arrival_time: 5.0, dominant_period: 0.5, amplitude: 200.0, decay_rate: 0.4
            }),
            ("Step Calibration", WaveformPattern::Calibration {
                period: 60.0, amplitude: 100.0
            }),
            ("Mass Drift", WaveformPattern::Drift { rate: 0.01 }),
        ]
    }
}
