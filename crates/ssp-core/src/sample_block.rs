//! SampleBlock: core container for station sample data

use crate::channel::{ChannelId, StationMetadata};
use crate::error::{SspError, SspResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Container for one block of interleaved station samples
#[derive(Debug, Clone)]
pub struct SampleBlock {
    /// Unique identifier for this block
    pub id: Uuid,
    /// Sample data (interleaved channels)
    pub data: Vec<f64>,
    /// Station metadata
    pub metadata: StationMetadata,
    /// Creation timestamp
    pub created_at: u64,
}

impl SampleBlock {
    /// Create new sample block with data and metadata
    pub fn new(data: Vec<f64>, metadata: StationMetadata) -> SspResult<Self> {
        // Validate data length matches metadata expectations
        let expected_samples = metadata.expected_samples();
        if data.len() != expected_samples {
            return Err(SspError::BlockLengthMismatch {
                expected: expected_samples,
                actual: data.len(),
            });
        }

        Ok(SampleBlock {
            id: Uuid::new_v4(),
            data,
            metadata,
            created_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64,
        })
    }

    /// Get total number of samples across all channels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if block is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get number of samples per channel
    pub fn samples_per_channel(&self) -> usize {
        if self.metadata.channel_count == 0 {
            0
        } else {
            self.data.len() / self.metadata.channel_count
        }
    }

    /// Get data for a specific channel
    pub fn channel_data(&self, channel_index: usize) -> SspResult<Vec<f64>> {
        if channel_index >= self.metadata.channel_count {
            return Err(SspError::ConfigurationError {
                message: format!(
                    "Channel index {} out of bounds (0-{})",
                    channel_index,
                    self.metadata.channel_count - 1
                ),
            });
        }

        let samples_per_channel = self.samples_per_channel();
        let mut channel_data = Vec::with_capacity(samples_per_channel);

        // Extract interleaved channel data
        for sample_idx in 0..samples_per_channel {
            let data_idx = sample_idx * self.metadata.channel_count + channel_index;
            channel_data.push(self.data[data_idx]);
        }

        Ok(channel_data)
    }

    /// Get all channel data as separate vectors
    pub fn all_channels(&self) -> SspResult<Vec<Vec<f64>>> {
        let mut channels = Vec::with_capacity(self.metadata.channel_count);

        for ch in 0..self.metadata.channel_count {
            channels.push(self.channel_data(ch)?);
        }

        Ok(channels)
    }

    /// Get block duration in seconds
    pub fn duration(&self) -> f64 {
        self.metadata.duration
    }

    /// Get sampling rate
    pub fn sampling_rate(&self) -> f64 {
        self.metadata.sampling_rate
    }

    /// Get channel count
    pub fn channel_count(&self) -> usize {
        self.metadata.channel_count
    }

    /// Get time vector for plotting
    pub fn time_vector(&self) -> Vec<f64> {
        let samples = self.samples_per_channel();
        let dt = 1.0 / self.metadata.sampling_rate;

        (0..samples)
            .map(|i| i as f64 * dt)
            .collect()
    }

    /// Calculate basic statistics for a channel
    pub fn channel_stats(&self, channel_index: usize) -> SspResult<ChannelStats> {
        let data = self.channel_data(channel_index)?;
        Ok(ChannelStats::calculate(&data))
    }

    /// Slice the block to a time range
    pub fn slice_time(&self, start_time: f64, end_time: f64) -> SspResult<SampleBlock> {
        if start_time < 0.0 || end_time > self.duration() || start_time >= end_time {
            return Err(SspError::ConfigurationError {
                message: format!(
                    "Invalid time range [{:.3}, {:.3}]s for block duration {:.3}s",
                    start_time, end_time, self.duration()
                ),
            });
        }

        let start_sample = (start_time * self.metadata.sampling_rate) as usize;
        let end_sample = (end_time * self.metadata.sampling_rate) as usize;

        let samples_per_channel = end_sample - start_sample;
        let mut sliced_data = Vec::with_capacity(samples_per_channel * self.metadata.channel_count);

        // Extract sliced data maintaining channel interleaving
        for sample_idx in start_sample..end_sample {
            for ch in 0..self.metadata.channel_count {
                let data_idx = sample_idx * self.metadata.channel_count + ch;
                sliced_data.push(self.data[data_idx]);
            }
        }

        let mut new_metadata = self.metadata.clone();
        new_metadata.duration = end_time - start_time;

        SampleBlock::new(sliced_data, new_metadata)
    }
}

/// Basic statistics for one channel of a block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: f64,
    pub rms: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub peak_to_peak: f64,
}

impl ChannelStats {
    pub fn calculate(data: &[f64]) -> Self {
        if data.is_empty() {
            return Self {
                mean: 0.0,
                rms: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                peak_to_peak: 0.0,
            };
        }

        let sum: f64 = data.iter().sum();
        let mean = sum / data.len() as f64;

        let sum_sq: f64 = data.iter().map(|x| x * x).sum();
        let rms = (sum_sq / data.len() as f64).sqrt();

        let variance: f64 = data.iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>() / data.len() as f64;
        let std_dev = variance.sqrt();

        let min = data.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = data.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let peak_to_peak = max - min;

        Self {
            mean,
            rms,
            std_dev,
            min,
            max,
            peak_to_peak,
        }
    }
}

/// Windowed amplitude report for one channel, emitted by the
/// streaming statistics accumulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Channel the window was measured on
    pub channel: ChannelId,
    /// Mean of the window
    pub mean: f64,
    /// Root mean square of the window
    pub rms: f64,
    /// Largest absolute sample in the window
    pub peak: f64,
}

impl std::fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:12.3}{:12.3}{:12.3}",
               self.channel, self.mean, self.rms, self.peak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_metadata(channels: usize, rate: f64, duration: f64) -> StationMetadata {
        let ids = (0..channels)
            .map(|i| ChannelId::new("00", &format!("BH{}", i)).unwrap())
            .collect();
        StationMetadata::new("ANMO", "IU", rate, ids, duration).unwrap()
    }

    #[test]
    fn test_block_creation() {
        let metadata = test_metadata(1, 1000.0, 1.0);
        let data = vec![0.0; 1000]; // 1 second of data
        let block = SampleBlock::new(data, metadata).unwrap();

        assert_eq!(block.len(), 1000);
        assert_eq!(block.samples_per_channel(), 1000);
        assert_eq!(block.channel_count(), 1);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let metadata = test_metadata(1, 1000.0, 1.0);
        let result = SampleBlock::new(vec![0.0; 999], metadata);
        assert_eq!(
            result.unwrap_err(),
            SspError::BlockLengthMismatch { expected: 1000, actual: 999 }
        );
    }

    #[test]
    fn test_multichannel_block() {
        let metadata = test_metadata(2, 1000.0, 1.0);

        // Interleaved data: [ch0_sample0, ch1_sample0, ch0_sample1, ch1_sample1, ...]
        let data = (0..2000).map(|i| i as f64).collect();
        let block = SampleBlock::new(data, metadata).unwrap();

        assert_eq!(block.len(), 2000);
        assert_eq!(block.samples_per_channel(), 1000);
        assert_eq!(block.channel_count(), 2);

        let ch0 = block.channel_data(0).unwrap();
        let ch1 = block.channel_data(1).unwrap();
        assert_eq!(ch0[0], 0.0);
        assert_eq!(ch1[0], 1.0);
        assert_eq!(ch0[1], 2.0);
        assert_eq!(ch1[1], 3.0);
        assert!(block.channel_data(2).is_err());
    }

    #[test]
    fn test_channel_stats() {
        let data = vec![1.0, -1.0, 1.0, -1.0];
        let stats = ChannelStats::calculate(&data);
        assert!((stats.mean - 0.0).abs() < 1e-12);
        assert!((stats.rms - 1.0).abs() < 1e-12);
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 1.0);
        assert_eq!(stats.peak_to_peak, 2.0);
    }

    #[test]
    fn test_slice_time() {
        let metadata = test_metadata(1, 100.0, 2.0);
        let data = (0..200).map(|i| i as f64).collect();
        let block = SampleBlock::new(data, metadata).unwrap();

        let sliced = block.slice_time(0.5, 1.5).unwrap();
        assert_eq!(sliced.samples_per_channel(), 100);
        assert_eq!(sliced.data[0], 50.0);
        assert!(block.slice_time(1.5, 0.5).is_err());
    }

    #[test]
    fn test_stats_record_display() {
        let record = StatsRecord {
            channel: ChannelId::new("00", "BHZ").unwrap(),
            mean: 1.5,
            rms: 2.25,
            peak: 10.0,
        };
        let text = format!("{}", record);
        assert!(text.starts_with("00-BHZ:"));
        assert!(text.contains("1.500"));
        assert!(text.contains("2.250"));
        assert!(text.contains("10.000"));
    }
}
