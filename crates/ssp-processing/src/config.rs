//! Session configuration for station signal processing

use crate::fir::FirFilterDef;
use crate::iir::IirDefinition;
use serde::{Deserialize, Serialize};
use ssp_core::{ChannelId, SspError, SspResult};

/// Ids reserved by the standard filter chain
const BUILT_IN_FIR_IDS: [u8; 3] = [0, 1, 2];

/// Complete processing description for one acquisition session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Configuration name/profile
    pub name: String,
    /// Target deployment style
    pub profile: StationProfile,
    /// Client FIR definitions appended behind the standard chain
    pub extra_firs: Vec<FirConfig>,
    /// Named IIR definitions referenced by detectors and statistics
    pub iir_definitions: Vec<IirDefinition>,
    /// Per-channel processing configuration
    pub channels: Vec<ChannelConfig>,
    /// Snap recursive filter outputs away from the denormal range
    pub denormal_guard: bool,
}

/// Deployment styles with ready-made presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationProfile {
    /// Broadband event detection at standard rates
    Broadband,
    /// Very/ultra long period monitoring
    LongPeriod,
    /// Multi-component teleseism watch
    Teleseism,
    /// Hand-assembled configuration
    Custom,
}

/// Serializable form of one client FIR definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirConfig {
    /// Chain-unique id, must avoid the built-in ids 0-2
    pub id: u8,
    /// Short name
    pub name: String,
    /// Input samples per output sample
    pub decimation: u32,
    /// Output scale factor
    pub gain: f64,
    /// Full tap list
    pub coefficients: Vec<f64>,
}

impl FirConfig {
    /// Build the runtime definition, validating the fields
    pub fn to_def(&self) -> SspResult<FirFilterDef> {
        FirFilterDef::new(
            self.id,
            &self.name,
            self.decimation,
            self.gain,
            self.coefficients.clone(),
        )
    }
}

/// One detector's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Detector name, unique within its channel
    pub id: String,
    /// IIR definition feeding this detector; none = raw channel stream
    pub filter: Option<u8>,
}

/// One channel's processing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// SEED identity of the channel
    pub channel: ChannelId,
    /// FIR decimation filter id; none = no decimation
    pub fir: Option<u8>,
    /// Statistics window in output samples; none = statistics off
    pub stats_window: Option<usize>,
    /// IIR definition filtering the statistics stream
    pub stats_filter: Option<u8>,
    /// Detectors consuming this channel
    pub detectors: Vec<DetectorConfig>,
}

fn channel(location: &str, seedname: &str) -> ChannelId {
    ChannelId {
        location: location.to_string(),
        seedname: seedname.to_string(),
    }
}

/// Preset configurations for common deployments
impl SessionConfig {
    /// Broadband station: DEC10 into a shared band-limit detector filter
    pub fn broadband_default() -> Self {
        SessionConfig {
            name: "Broadband station".to_string(),
            profile: StationProfile::Broadband,
            extra_firs: Vec::new(),
            iir_definitions: vec![IirDefinition::new(
                1,
                "DET-BP",
                1.0,
                vec![
                    crate::iir::SectionSpec::highpass(2, 0.1),
                    crate::iir::SectionSpec::lowpass(4, 0.5),
                ],
            )],
            channels: vec![ChannelConfig {
                channel: channel("00", "BHZ"),
                fir: Some(0),
                stats_window: Some(2400),
                stats_filter: None,
                detectors: vec![
                    DetectorConfig {
                        id: "sta-lta".to_string(),
                        filter: Some(1),
                    },
                    DetectorConfig {
                        id: "threshold".to_string(),
                        filter: Some(1),
                    },
                ],
            }],
            denormal_guard: false,
        }
    }

    /// Long-period monitoring: VLP/ULP decimators, smoothed statistics,
    /// denormal guard on for the near-DC recursions
    pub fn long_period_monitoring() -> Self {
        SessionConfig {
            name: "Long-period monitoring".to_string(),
            profile: StationProfile::LongPeriod,
            extra_firs: Vec::new(),
            iir_definitions: vec![
                IirDefinition::new(
                    1,
                    "STAT-SMOOTH",
                    1.0,
                    vec![crate::iir::SectionSpec::lowpass(2, 0.25)],
                ),
                IirDefinition::new(
                    2,
                    "DET-HP",
                    1.0,
                    vec![crate::iir::SectionSpec::highpass(4, 0.2)],
                ),
            ],
            channels: vec![
                ChannelConfig {
                    channel: channel("00", "LHZ"),
                    fir: Some(1),
                    stats_window: Some(3600),
                    stats_filter: Some(1),
                    detectors: vec![DetectorConfig {
                        id: "threshold".to_string(),
                        filter: Some(2),
                    }],
                },
                ChannelConfig {
                    channel: channel("00", "VHZ"),
                    fir: Some(2),
                    stats_window: Some(600),
                    stats_filter: None,
                    detectors: Vec::new(),
                },
            ],
            denormal_guard: true,
        }
    }

    /// Three-component teleseism watch sharing one detection filter
    pub fn teleseism_detection() -> Self {
        let detector = |name: &str| DetectorConfig {
            id: name.to_string(),
            filter: Some(1),
        };
        let component = |seedname: &str, stats: Option<usize>| ChannelConfig {
            channel: channel("00", seedname),
            fir: Some(0),
            stats_window: stats,
            stats_filter: None,
            detectors: vec![detector("sta-lta")],
        };

        SessionConfig {
            name: "Teleseism detection".to_string(),
            profile: StationProfile::Teleseism,
            extra_firs: Vec::new(),
            iir_definitions: vec![IirDefinition::new(
                1,
                "TELE-LP",
                1.0,
                vec![crate::iir::SectionSpec::lowpass(4, 0.3)],
            )],
            channels: vec![
                component("BHZ", Some(4000)),
                component("BHN", None),
                component("BHE", None),
            ],
            denormal_guard: false,
        }
    }

    /// Empty custom configuration to build on
    pub fn custom(name: &str) -> Self {
        SessionConfig {
            name: name.to_string(),
            profile: StationProfile::Custom,
            extra_firs: Vec::new(),
            iir_definitions: Vec::new(),
            channels: Vec::new(),
            denormal_guard: false,
        }
    }

    /// Append a client FIR definition
    pub fn add_fir(&mut self, fir: FirConfig) {
        self.extra_firs.push(fir);
    }

    /// Append an IIR definition
    pub fn add_iir_definition(&mut self, def: IirDefinition) {
        self.iir_definitions.push(def);
    }

    /// Append a channel configuration
    pub fn add_channel(&mut self, config: ChannelConfig) {
        self.channels.push(config);
    }

    /// Validate entire configuration
    pub fn validate(&self) -> SspResult<()> {
        // Client FIR ids must be unique and clear of the built-ins
        let mut fir_ids: Vec<u8> = BUILT_IN_FIR_IDS.to_vec();
        for fir in &self.extra_firs {
            if fir_ids.contains(&fir.id) {
                return Err(SspError::DuplicateFilterId { id: fir.id });
            }
            fir.to_def()?;
            fir_ids.push(fir.id);
        }

        // IIR definitions must be unique and designable
        let mut iir_ids: Vec<u8> = Vec::new();
        for def in &self.iir_definitions {
            if iir_ids.contains(&def.id) {
                return Err(SspError::DuplicateFilterId { id: def.id });
            }
            if def.sections.is_empty() {
                return Err(SspError::ConfigurationError {
                    message: format!("IIR definition '{}' has no sections", def.name),
                });
            }
            def.validate()?;
            iir_ids.push(def.id);
        }

        let mut seen_channels: Vec<&ChannelId> = Vec::new();
        for config in &self.channels {
            if seen_channels.contains(&&config.channel) {
                return Err(SspError::ConfigurationError {
                    message: format!("Duplicate channel {}", config.channel),
                });
            }
            seen_channels.push(&config.channel);
            self.validate_channel(config, &fir_ids, &iir_ids)?;
        }

        Ok(())
    }

    /// Validate one channel against the declared filter ids
    fn validate_channel(
        &self,
        config: &ChannelConfig,
        fir_ids: &[u8],
        iir_ids: &[u8],
    ) -> SspResult<()> {
        if let Some(id) = config.fir {
            if !fir_ids.contains(&id) {
                return Err(SspError::UnknownFirFilter { id });
            }
        }

        if config.stats_window == Some(0) {
            return Err(SspError::InvalidStatsWindow { window: 0 });
        }
        if let Some(id) = config.stats_filter {
            if config.stats_window.is_none() {
                return Err(SspError::ConfigurationError {
                    message: format!(
                        "Channel {} has a statistics filter but no statistics window",
                        config.channel
                    ),
                });
            }
            if !iir_ids.contains(&id) {
                return Err(SspError::UnknownIirFilter { id });
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for detector in &config.detectors {
            if seen.contains(&detector.id.as_str()) {
                return Err(SspError::ConfigurationError {
                    message: format!(
                        "Channel {} configures detector '{}' twice",
                        config.channel, detector.id
                    ),
                });
            }
            seen.push(&detector.id);
            if let Some(id) = detector.filter {
                if !iir_ids.contains(&id) {
                    return Err(SspError::UnknownIirFilter { id });
                }
            }
        }

        Ok(())
    }

    /// Look up an IIR definition by id
    pub fn find_iir(&self, id: u8) -> SspResult<&IirDefinition> {
        self.iir_definitions
            .iter()
            .find(|d| d.id == id)
            .ok_or(SspError::UnknownIirFilter { id })
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> SspResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SspError::ConfigurationError {
            message: format!("Failed to serialize configuration: {}", e),
        })
    }

    /// Import configuration from JSON
    pub fn from_json(json: &str) -> SspResult<Self> {
        serde_json::from_str(json).map_err(|e| SspError::ConfigurationError {
            message: format!("Failed to deserialize configuration: {}", e),
        })
    }

    /// Create configuration suitable for given profile
    pub fn for_profile(profile: StationProfile) -> Self {
        match profile {
            StationProfile::Broadband => Self::broadband_default(),
            StationProfile::LongPeriod => Self::long_period_monitoring(),
            StationProfile::Teleseism => Self::teleseism_detection(),
            StationProfile::Custom => Self::custom("Custom"),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::broadband_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iir::SectionSpec;

    #[test]
    fn test_broadband_config() {
        let config = SessionConfig::broadband_default();
        assert_eq!(config.profile, StationProfile::Broadband);
        assert_eq!(config.channels.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_long_period_config() {
        let config = SessionConfig::long_period_monitoring();
        assert_eq!(config.profile, StationProfile::LongPeriod);
        assert!(config.denormal_guard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_teleseism_config() {
        let config = SessionConfig::teleseism_detection();
        assert_eq!(config.channels.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fir_rejected() {
        let mut config = SessionConfig::broadband_default();
        config.channels[0].fir = Some(9);
        assert_eq!(
            config.validate().unwrap_err(),
            SspError::UnknownFirFilter { id: 9 }
        );
    }

    #[test]
    fn test_unknown_iir_rejected() {
        let mut config = SessionConfig::broadband_default();
        config.channels[0].detectors[0].filter = Some(7);
        assert_eq!(
            config.validate().unwrap_err(),
            SspError::UnknownIirFilter { id: 7 }
        );
    }

    #[test]
    fn test_zero_stats_window_rejected() {
        let mut config = SessionConfig::broadband_default();
        config.channels[0].stats_window = Some(0);
        assert_eq!(
            config.validate().unwrap_err(),
            SspError::InvalidStatsWindow { window: 0 }
        );
    }

    #[test]
    fn test_stats_filter_requires_window() {
        let mut config = SessionConfig::broadband_default();
        config.channels[0].stats_window = None;
        config.channels[0].stats_filter = Some(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_iir_id_rejected() {
        let mut config = SessionConfig::broadband_default();
        config.add_iir_definition(IirDefinition::new(
            1,
            "DUP",
            1.0,
            vec![SectionSpec::lowpass(2, 0.3)],
        ));
        assert_eq!(
            config.validate().unwrap_err(),
            SspError::DuplicateFilterId { id: 1 }
        );
    }

    #[test]
    fn test_extra_fir_cannot_shadow_built_in() {
        let mut config = SessionConfig::broadband_default();
        config.add_fir(FirConfig {
            id: 0,
            name: "SHADOW".to_string(),
            decimation: 2,
            gain: 1.0,
            coefficients: vec![0.5, 0.5],
        });
        assert_eq!(
            config.validate().unwrap_err(),
            SspError::DuplicateFilterId { id: 0 }
        );
    }

    #[test]
    fn test_bad_pole_count_rejected() {
        let mut config = SessionConfig::custom("bad poles");
        config.add_iir_definition(IirDefinition::new(
            1,
            "TOO-MANY",
            1.0,
            vec![SectionSpec::lowpass(9, 0.3)],
        ));
        assert_eq!(
            config.validate().unwrap_err(),
            SspError::InvalidPoleCount { poles: 9, max: 8 }
        );
    }

    #[test]
    fn test_json_serialization() {
        let config = SessionConfig::long_period_monitoring();

        let json = config.to_json().unwrap();
        assert!(!json.is_empty());

        let deserialized = SessionConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_profile_creation() {
        for profile in [
            StationProfile::Broadband,
            StationProfile::LongPeriod,
            StationProfile::Teleseism,
        ] {
            let config = SessionConfig::for_profile(profile);
            assert_eq!(config.profile, profile);
            assert!(config.validate().is_ok());
        }
    }
}
