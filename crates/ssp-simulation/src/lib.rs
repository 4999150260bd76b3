//! SSP-Simulation: Synthetic ground motion for station testing
//!
//! Generates realistic station telemetry for development without hardware.

pub mod station_simulator;
pub mod telemetry;
pub mod waveforms;

pub use station_simulator::*;
pub use telemetry::*;
pub use waveforms::*;
