//! Station and SEED-style channel identity types

use serde::{Deserialize, Serialize};
use crate::error::{SspError, SspResult};

/// Frequency band class encoded in the first letter of a SEED channel name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BandCode {
    /// B - broadband, 10 to 80 sps
    Broadband,
    /// H - high broadband, 80 sps and above
    HighBroadband,
    /// S - short period
    ShortPeriod,
    /// L - long period, around 1 sps
    LongPeriod,
    /// V - very long period, around 0.1 sps
    VeryLongPeriod,
    /// U - ultra long period, 0.01 sps and below
    UltraLongPeriod,
    /// Any code this library does not classify
    Other(char),
}

impl BandCode {
    /// Classify the leading letter of a channel name
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'B' => BandCode::Broadband,
            'H' => BandCode::HighBroadband,
            'S' => BandCode::ShortPeriod,
            'L' => BandCode::LongPeriod,
            'V' => BandCode::VeryLongPeriod,
            'U' => BandCode::UltraLongPeriod,
            other => BandCode::Other(other),
        }
    }
}

impl std::fmt::Display for BandCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandCode::Broadband => write!(f, "Broadband"),
            BandCode::HighBroadband => write!(f, "High Broadband"),
            BandCode::ShortPeriod => write!(f, "Short Period"),
            BandCode::LongPeriod => write!(f, "Long Period"),
            BandCode::VeryLongPeriod => write!(f, "Very Long Period"),
            BandCode::UltraLongPeriod => write!(f, "Ultra Long Period"),
            BandCode::Other(c) => write!(f, "Other({})", c),
        }
    }
}

/// SEED channel identifier: two-character location code plus
/// three-character channel name, e.g. location "00", name "BHZ"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId {
    /// Location code, up to two characters, may be empty
    pub location: String,
    /// Channel name, exactly three characters
    pub seedname: String,
}

impl ChannelId {
    /// Create a validated channel identifier
    pub fn new(location: &str, seedname: &str) -> SspResult<Self> {
        if location.len() > 2 {
            return Err(SspError::InvalidChannelId {
                reason: "location code longer than two characters",
            });
        }
        if seedname.len() != 3 {
            return Err(SspError::InvalidChannelId {
                reason: "channel name must be exactly three characters",
            });
        }
        if !seedname.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SspError::InvalidChannelId {
                reason: "channel name must be alphanumeric",
            });
        }
        Ok(ChannelId {
            location: location.to_string(),
            seedname: seedname.to_string(),
        })
    }

    /// Band class from the channel name's first letter
    pub fn band(&self) -> BandCode {
        match self.seedname.chars().next() {
            Some(c) => BandCode::from_char(c),
            None => BandCode::Other('?'),
        }
    }

    /// Orientation letter (Z, N, E, ...) from the channel name's last position
    pub fn component(&self) -> Option<char> {
        self.seedname.chars().nth(2)
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}", self.seedname)
        } else {
            write!(f, "{}-{}", self.location, self.seedname)
        }
    }
}

/// Per-station acquisition metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationMetadata {
    /// Station code, e.g. "ANMO"
    pub station: String,
    /// Network code, e.g. "IU"
    pub network: String,
    /// Sampling rate in Hz
    pub sampling_rate: f64,
    /// Number of channels
    pub channel_count: usize,
    /// Channel identifiers in interleave order
    pub channels: Vec<ChannelId>,
    /// Block duration in seconds
    pub duration: f64,
    /// Creation timestamp
    pub timestamp: u64,
}

impl StationMetadata {
    /// Create new station metadata
    pub fn new(
        station: &str,
        network: &str,
        sampling_rate: f64,
        channels: Vec<ChannelId>,
        duration: f64,
    ) -> SspResult<Self> {
        Self::validate_sampling_rate(sampling_rate)?;
        Self::validate_channel_count(channels.len())?;

        if duration <= 0.0 {
            return Err(SspError::ConfigurationError {
                message: "Duration must be positive".to_string(),
            });
        }

        Ok(StationMetadata {
            station: station.to_string(),
            network: network.to_string(),
            sampling_rate,
            channel_count: channels.len(),
            channels,
            duration,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64,
        })
    }

    /// Validate sampling rate for seismic acquisition
    pub fn validate_sampling_rate(rate: f64) -> SspResult<()> {
        const MIN_RATE: f64 = 0.001;
        const MAX_RATE: f64 = 1000.0;

        if rate < MIN_RATE || rate > MAX_RATE {
            Err(SspError::InvalidSamplingRate {
                rate,
                valid_range: "0.001-1000Hz",
            })
        } else {
            Ok(())
        }
    }

    /// Validate channel count for one station
    pub fn validate_channel_count(count: usize) -> SspResult<()> {
        const MAX_CHANNELS: usize = 64;

        if count == 0 || count > MAX_CHANNELS {
            Err(SspError::TooManyChannels {
                requested: count,
                max_supported: MAX_CHANNELS,
            })
        } else {
            Ok(())
        }
    }

    /// Get expected number of samples for one block of this metadata
    pub fn expected_samples(&self) -> usize {
        (self.sampling_rate * self.duration) as usize * self.channel_count
    }
}

impl Default for StationMetadata {
    fn default() -> Self {
        StationMetadata {
            station: "TEST".to_string(),
            network: "XX".to_string(),
            sampling_rate: 40.0,
            channel_count: 1,
            channels: vec![ChannelId {
                location: "00".to_string(),
                seedname: "BHZ".to_string(),
            }],
            duration: 1.0,
            timestamp: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_display() {
        let id = ChannelId::new("00", "BHZ").unwrap();
        assert_eq!(format!("{}", id), "00-BHZ");

        let bare = ChannelId::new("", "LHZ").unwrap();
        assert_eq!(format!("{}", bare), "LHZ");
    }

    #[test]
    fn test_channel_id_validation() {
        assert!(ChannelId::new("000", "BHZ").is_err());
        assert!(ChannelId::new("00", "BH").is_err());
        assert!(ChannelId::new("00", "B?Z").is_err());
    }

    #[test]
    fn test_band_classification() {
        let id = ChannelId::new("00", "VHZ").unwrap();
        assert_eq!(id.band(), BandCode::VeryLongPeriod);
        assert_eq!(id.component(), Some('Z'));
    }

    #[test]
    fn test_metadata_validation() {
        let channels = vec![ChannelId::new("00", "BHZ").unwrap()];
        assert!(StationMetadata::new("ANMO", "IU", 40.0, channels.clone(), 1.0).is_ok());
        assert!(StationMetadata::new("ANMO", "IU", 5000.0, channels.clone(), 1.0).is_err());
        assert!(StationMetadata::new("ANMO", "IU", 40.0, channels, 0.0).is_err());
        assert!(StationMetadata::validate_channel_count(0).is_err());
        assert!(StationMetadata::validate_channel_count(65).is_err());
    }
}
