//! Ground motion simulator producing interleaved station sample blocks

use crate::waveforms::WaveformPattern;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use ssp_core::{ChannelId, SampleBlock, SspResult, StationMetadata};

/// Configuration for station simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Station code reported in block metadata
    pub station: String,
    /// Network code
    pub network: String,
    /// Sampling rate in Hz
    pub sampling_rate: f64,
    /// Channels to simulate, in interleave order
    pub channels: Vec<ChannelId>,
    /// Ground motion pattern to generate
    pub pattern: WaveformPattern,
    /// Noise configuration
    pub noise: NoiseConfig,
    /// Mains interference pickup (50/60Hz)
    pub mains_freq: Option<f64>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

/// Noise configuration for realistic site behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Gaussian noise standard deviation (0.0 = no noise)
    pub gaussian_std: f64,
    /// Slow tilt wander amplitude
    pub tilt_wander: f64,
    /// Telemetry spike probability (0.0 to 1.0)
    pub spike_prob: f64,
    /// Telemetry spike amplitude
    pub spike_amp: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            gaussian_std: 0.05,
            tilt_wander: 0.02,
            spike_prob: 0.001,
            spike_amp: 5.0,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            station: "SIM".to_string(),
            network: "XX".to_string(),
            sampling_rate: 40.0,
            channels: vec![ChannelId {
                location: "00".to_string(),
                seedname: "BHZ".to_string(),
            }],
            pattern: WaveformPattern::Microseism {
                period: 6.0,
                amplitude: 0.3,
                baseline: 0.0,
            },
            noise: NoiseConfig::default(),
            mains_freq: Some(50.0),
            seed: None,
        }
    }
}

/// Station ground motion simulator
pub struct StationSimulator {
    config: SimulatorConfig,
    rng: rand::rngs::StdRng,
    normal_dist: Normal<f64>,
    time_offset: f64,
}

impl StationSimulator {
    /// Create new simulator with configuration
    pub fn new(config: SimulatorConfig) -> SspResult<Self> {
        // Validate configuration
        StationMetadata::validate_sampling_rate(config.sampling_rate)?;
        StationMetadata::validate_channel_count(config.channels.len())?;

        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs()
        });

        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        let normal_dist = Normal::new(0.0, config.noise.gaussian_std).map_err(|e| {
            ssp_core::SspError::SimulationError {
                message: format!("Failed to create normal distribution: {}", e),
            }
        })?;

        Ok(StationSimulator {
            config,
            rng,
            normal_dist,
            time_offset: 0.0,
        })
    }

    /// Generate one block of interleaved samples for the given duration
    pub fn generate(&mut self, duration: f64) -> SspResult<SampleBlock> {
        let samples_per_channel = (duration * self.config.sampling_rate) as usize;
        let total_samples = samples_per_channel * self.config.channels.len();
        let mut data = Vec::with_capacity(total_samples);

        let dt = 1.0 / self.config.sampling_rate;
        let pattern = self.config.pattern;

        // Generate interleaved channel data
        for sample_idx in 0..samples_per_channel {
            let time = self.time_offset + sample_idx as f64 * dt;

            for channel_idx in 0..self.config.channels.len() {
                let mut value = self.generate_ground_sample(time, channel_idx, &pattern);

                // Add site and telemetry noise
                value += self.add_noise(time);

                // Add mains pickup if configured
                if let Some(mains_freq) = self.config.mains_freq {
                    value += self.add_mains_interference(time, mains_freq);
                }

                // Digitizer clip level
                value = value.max(-1.0e6).min(1.0e6);

                data.push(value);
            }
        }

        // Update time offset for continuous generation
        self.time_offset += duration;

        let metadata = StationMetadata::new(
            &self.config.station,
            &self.config.network,
            self.config.sampling_rate,
            self.config.channels.clone(),
            duration,
        )?;

        SampleBlock::new(data, metadata)
    }

    /// Generate single ground motion sample
    fn generate_ground_sample(
        &mut self,
        time: f64,
        channel_idx: usize,
        pattern: &WaveformPattern,
    ) -> f64 {
        let motion = pattern.amplitude_at(time);

        // Components see the same wavefield at slightly different gains
        let site_gain = 1.0 - channel_idx as f64 * 0.03;

        // Incoherent scatter between components
        let scatter = motion * self.rng.gen_range(-0.02..0.02);

        motion * site_gain + scatter
    }

    /// Add various noise components
    fn add_noise(&mut self, time: f64) -> f64 {
        let mut noise = 0.0;

        // Gaussian site noise
        noise += self.normal_dist.sample(&mut self.rng);

        // Tilt wander (slow drift)
        noise += self.config.noise.tilt_wander * (2.0 * std::f64::consts::PI * 0.01 * time).sin();

        // Telemetry spikes
        if self.rng.gen::<f64>() < self.config.noise.spike_prob {
            noise += self.config.noise.spike_amp * self.rng.gen_range(-1.0..1.0);
        }

        noise
    }

    /// Add mains pickup
    fn add_mains_interference(&mut self, time: f64, frequency: f64) -> f64 {
        let amplitude = 0.05; // Small pickup
        amplitude * (2.0 * std::f64::consts::PI * frequency * time).sin()
    }

    /// Reset time offset (useful for restarting simulation)
    pub fn reset_time(&mut self) {
        self.time_offset = 0.0;
    }

    /// Get current configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Update configuration
    pub fn update_config(&mut self, config: SimulatorConfig) -> SspResult<()> {
        StationMetadata::validate_sampling_rate(config.sampling_rate)?;
        StationMetadata::validate_channel_count(config.channels.len())?;

        self.config = config;
        Ok(())
    }

    /// Generate continuous chunks for streaming
    pub fn generate_chunk(&mut self, chunk_duration: f64) -> SspResult<SampleBlock> {
        self.generate(chunk_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveforms::WaveformPattern;

    fn quiet_config() -> SimulatorConfig {
        SimulatorConfig {
            noise: NoiseConfig {
                gaussian_std: 0.0,
                tilt_wander: 0.0,
                spike_prob: 0.0,
                spike_amp: 0.0,
            },
            mains_freq: None,
            seed: Some(7),
            ..SimulatorConfig::default()
        }
    }

    #[test]
    fn test_station_simulator_basic() {
        let config = SimulatorConfig::default();
        let mut simulator = StationSimulator::new(config).unwrap();

        let block = simulator.generate(1.0).unwrap();

        assert_eq!(block.duration(), 1.0);
        assert_eq!(block.sampling_rate(), 40.0);
        assert_eq!(block.channel_count(), 1);
        assert_eq!(block.samples_per_channel(), 40);
    }

    #[test]
    fn test_multichannel_simulation() {
        let mut config = SimulatorConfig::default();
        config.channels = vec![
            ChannelId::new("00", "BHZ").unwrap(),
            ChannelId::new("00", "BHN").unwrap(),
            ChannelId::new("00", "BHE").unwrap(),
        ];

        let mut simulator = StationSimulator::new(config).unwrap();
        let block = simulator.generate(0.5).unwrap();

        assert_eq!(block.channel_count(), 3);
        assert_eq!(block.len(), 60); // 20 samples * 3 channels

        let channels = block.all_channels().unwrap();
        assert_eq!(channels.len(), 3);

        for channel_data in channels {
            assert_eq!(channel_data.len(), 20);
            // Basic sanity check, the noise floor gives every channel variation
            let stats = ssp_core::ChannelStats::calculate(&channel_data);
            assert!(stats.std_dev > 0.0);
        }
    }

    #[test]
    fn test_different_patterns() {
        let patterns = vec![
            WaveformPattern::Quiet { level: 0.5 },
            WaveformPattern::Microseism {
                period: 6.0,
                amplitude: 0.3,
                baseline: 0.0,
            },
            WaveformPattern::Calibration {
                period: 10.0,
                amplitude: 50.0,
            },
        ];

        for pattern in patterns {
            let mut config = SimulatorConfig::default();
            config.pattern = pattern;

            let mut simulator = StationSimulator::new(config).unwrap();
            let block = simulator.generate(1.0).unwrap();

            assert_eq!(block.len(), 40);

            // Verify signal stays inside the clip level
            let channel_data = block.channel_data(0).unwrap();
            let stats = ssp_core::ChannelStats::calculate(&channel_data);
            assert!(stats.min >= -1.0e6);
            assert!(stats.max <= 1.0e6);
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut config = SimulatorConfig::default();
        config.seed = Some(42);

        let mut first = StationSimulator::new(config.clone()).unwrap();
        let mut second = StationSimulator::new(config).unwrap();

        let block_a = first.generate(1.0).unwrap();
        let block_b = second.generate(1.0).unwrap();

        assert_eq!(block_a.data, block_b.data);
    }

    #[test]
    fn test_time_continuity_and_reset() {
        let mut config = quiet_config();
        config.pattern = WaveformPattern::Drift { rate: 1.0 };

        let mut simulator = StationSimulator::new(config).unwrap();

        let first = simulator.generate(1.0).unwrap();
        assert_eq!(first.data[0], 0.0);

        // Second block continues from t = 1s, so the drift is visible
        let second = simulator.generate(1.0).unwrap();
        assert!(second.data[0] > 0.9);

        simulator.reset_time();
        let restarted = simulator.generate(1.0).unwrap();
        assert_eq!(restarted.data[0], 0.0);
    }
}
