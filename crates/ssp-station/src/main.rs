//! SSP Station - Headless seismic station processing service

mod service;

use anyhow::Context;
use service::{start_station_service, ServiceCommand};
use ssp_processing::SessionConfig;
use ssp_simulation::{start_telemetry, StreamCommand, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("Starting SSP Station...");
    println!("Signal Flow: Station Simulator → Telemetry → Filter Engine → Statistics & Detectors");

    // First argument names a session configuration file, otherwise the
    // broadband preset runs
    let session = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read configuration file {}", path))?;
            let session = SessionConfig::from_json(&text)?;
            session.validate()?;
            session
        }
        None => SessionConfig::default(),
    };
    info!(
        "Session '{}' with {} channel(s)",
        session.name,
        session.channels.len()
    );

    // Simulate exactly the channels the session configures
    let mut telemetry_config = TelemetryConfig::default();
    telemetry_config.simulator.channels = session
        .channels
        .iter()
        .map(|c| c.channel.clone())
        .collect();

    let (block_receiver, telemetry_control) = start_telemetry(telemetry_config).await?;
    let (service_control, stats_handle) = start_station_service(block_receiver, session).await?;

    telemetry_control.send(StreamCommand::Start).await?;
    service_control.send(ServiceCommand::Start).await?;

    // Run until interrupted
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    println!("Shutting down...");
    service_control.send(ServiceCommand::Stop).await?;
    telemetry_control.send(StreamCommand::Stop).await?;

    let stats = stats_handle.lock().await.clone();
    println!(
        "Session summary: {} block(s), {} sample(s) in, {} decimated, {} statistics record(s), {} detector sample(s)",
        stats.blocks_processed,
        stats.samples_ingested,
        stats.outputs_emitted,
        stats.stats_records,
        stats.detector_samples
    );

    Ok(())
}
