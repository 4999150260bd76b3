//! SSP-Processing: Filter pipeline for seismic station telemetry
//!
//! FIR decimation chains, Butterworth detector cascades, and windowed
//! channel statistics, assembled per acquisition session.

pub mod coefficients;
pub mod config;
pub mod engine;
pub mod fir;
pub mod iir;
pub mod stats;

pub use config::{
    ChannelConfig, DetectorConfig, FirConfig, SessionConfig, StationProfile,
};
pub use engine::{
    ChannelHandle, EngineOptions, FilterEngine, LogStatsSink, NullTriggerSink, StatsSink,
    TriggerSink,
};
pub use fir::{FilterChain, FirFilter, FirFilterDef};
pub use iir::{
    IirBand, IirCascade, IirDefinition, SectionCoefficients, SectionSpec, MAX_POLES,
};
pub use stats::StatsAccumulator;
