//! Station service driving telemetry blocks through the filter engine

use serde::{Deserialize, Serialize};
use ssp_core::{ChannelId, SampleBlock, SspResult, StatsRecord};
use ssp_processing::{FilterEngine, SessionConfig, StatsSink, TriggerSink};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

/// Commands for controlling the station service
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    Start,
    Stop,
    Pause,
    Resume,
    ReplaceSession(SessionConfig),
    ResetFilters,
}

/// Statistics about station processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationStats {
    pub is_running: bool,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub blocks_processed: u64,
    pub samples_ingested: u64,
    pub outputs_emitted: u64,
    pub stats_records: u64,
    pub detector_samples: u64,
    pub average_block_time_us: u64,
    pub last_update: u64,
}

/// Statistics sink that logs each record and counts it
struct CountingStatsSink {
    records: Arc<AtomicU64>,
}

impl StatsSink for CountingStatsSink {
    fn stats(&mut self, record: &StatsRecord) {
        self.records.fetch_add(1, Ordering::Relaxed);
        info!("{}", record);
    }
}

/// Trigger sink that counts detector samples
struct CountingTriggerSink {
    samples: Arc<AtomicU64>,
}

impl TriggerSink for CountingTriggerSink {
    fn detector_sample(&mut self, _channel: &ChannelId, _detector: &str, _value: f64) {
        self.samples.fetch_add(1, Ordering::Relaxed);
    }
}

/// Real-time station processing service
pub struct StationService {
    session: SessionConfig,
    engine: Arc<Mutex<FilterEngine>>,

    // Communication channels
    input_receiver: broadcast::Receiver<SampleBlock>,
    command_receiver: mpsc::Receiver<ServiceCommand>,
    command_sender: mpsc::Sender<ServiceCommand>,

    // State management
    is_running: Arc<Mutex<bool>>,
    stats: Arc<Mutex<StationStats>>,
    stats_records: Arc<AtomicU64>,
    detector_samples: Arc<AtomicU64>,

    // Performance tracking
    blocks_processed: u64,
    samples_ingested: u64,
    outputs_emitted: u64,
    total_block_time: u64,
}

impl StationService {
    /// Create new station service over a telemetry stream
    pub fn new(
        input_receiver: broadcast::Receiver<SampleBlock>,
        session: SessionConfig,
    ) -> SspResult<Self> {
        let (command_sender, command_receiver) = mpsc::channel(32);

        let stats_records = Arc::new(AtomicU64::new(0));
        let detector_samples = Arc::new(AtomicU64::new(0));

        let mut engine = FilterEngine::from_config(&session)?;
        engine.set_stats_sink(Box::new(CountingStatsSink {
            records: stats_records.clone(),
        }));
        engine.set_trigger_sink(Box::new(CountingTriggerSink {
            samples: detector_samples.clone(),
        }));

        Ok(StationService {
            session,
            engine: Arc::new(Mutex::new(engine)),
            input_receiver,
            command_receiver,
            command_sender,
            is_running: Arc::new(Mutex::new(false)),
            stats: Arc::new(Mutex::new(StationStats::default())),
            stats_records,
            detector_samples,
            blocks_processed: 0,
            samples_ingested: 0,
            outputs_emitted: 0,
            total_block_time: 0,
        })
    }

    /// Get command sender for controlling the service
    pub fn command_handle(&self) -> mpsc::Sender<ServiceCommand> {
        self.command_sender.clone()
    }

    /// Main processing loop
    pub async fn run(&mut self) -> SspResult<()> {
        info!(
            "Station service started - Session: {} ({} channel(s))",
            self.session.name,
            self.session.channels.len()
        );

        loop {
            tokio::select! {
                // Handle incoming telemetry blocks
                block_result = self.input_receiver.recv() => {
                    match block_result {
                        Ok(block) => {
                            let is_running = *self.is_running.lock().await;
                            if is_running {
                                self.process_block(block).await;
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!("Station service lagged, skipped {} block(s)", skipped);
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            info!("Telemetry channel closed, stopping station service");
                            break;
                        }
                    }
                }

                // Handle control commands
                command = self.command_receiver.recv() => {
                    match command {
                        Some(ServiceCommand::Start) => {
                            *self.is_running.lock().await = true;
                            self.update_stats(|stats| {
                                stats.is_running = true;
                                stats.started_at = Some(chrono::Utc::now());
                            }).await;
                            info!("Station processing started");
                        }
                        Some(ServiceCommand::Stop) => {
                            *self.is_running.lock().await = false;

                            let started_at = {
                                let mut stats = self.stats.lock().await;
                                stats.is_running = false;
                                stats.started_at.take()
                            };
                            if let Some(started) = started_at {
                                let uptime = chrono::Utc::now() - started;
                                info!(
                                    "Station processing stopped after {}s, {} block(s)",
                                    uptime.num_seconds(),
                                    self.blocks_processed
                                );
                            } else {
                                info!("Station processing stopped");
                            }

                            // All filter state belongs to the session, clear it together
                            self.engine.lock().await.reset();
                            self.reset_metrics();
                        }
                        Some(ServiceCommand::Pause) => {
                            *self.is_running.lock().await = false;
                            self.update_stats(|stats| stats.is_running = false).await;
                            info!("Station processing paused");
                        }
                        Some(ServiceCommand::Resume) => {
                            *self.is_running.lock().await = true;
                            self.update_stats(|stats| stats.is_running = true).await;
                            info!("Station processing resumed");
                        }
                        Some(ServiceCommand::ReplaceSession(config)) => {
                            if let Err(e) = self.replace_session(config).await {
                                warn!("Failed to replace session: {}", e);
                            }
                        }
                        Some(ServiceCommand::ResetFilters) => {
                            self.engine.lock().await.reset();
                            info!("Filter state reset");
                        }
                        None => {
                            info!("Command channel closed");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Route one telemetry block through the engine, channel by channel
    async fn process_block(&mut self, block: SampleBlock) {
        let start_time = std::time::Instant::now();

        let mut samples = 0u64;
        let mut outputs = 0u64;
        {
            let mut engine = self.engine.lock().await;
            for (index, channel) in block.metadata.channels.iter().enumerate() {
                // Channels the session does not configure are ignored
                let handle = match engine.find_channel(channel) {
                    Some(handle) => handle,
                    None => continue,
                };
                let data = match block.channel_data(index) {
                    Ok(data) => data,
                    Err(e) => {
                        warn!("Skipping channel {}: {}", channel, e);
                        continue;
                    }
                };
                for sample in data {
                    samples += 1;
                    if engine.ingest(handle, sample).is_some() {
                        outputs += 1;
                    }
                }
            }
        }

        let block_time = start_time.elapsed().as_micros() as u64;
        self.update_metrics(samples, outputs, block_time).await;
    }

    /// Swap in a new session configuration. Dropping the old engine
    /// releases every filter instance of the previous session at once.
    async fn replace_session(&mut self, config: SessionConfig) -> SspResult<()> {
        info!("Replacing session: {}", config.name);

        let mut engine = FilterEngine::from_config(&config)?;
        engine.set_stats_sink(Box::new(CountingStatsSink {
            records: self.stats_records.clone(),
        }));
        engine.set_trigger_sink(Box::new(CountingTriggerSink {
            samples: self.detector_samples.clone(),
        }));

        {
            let mut engine_lock = self.engine.lock().await;
            *engine_lock = engine;
        }

        self.session = config;
        Ok(())
    }

    /// Update processing metrics
    async fn update_metrics(&mut self, samples: u64, outputs: u64, block_time_us: u64) {
        self.blocks_processed += 1;
        self.samples_ingested += samples;
        self.outputs_emitted += outputs;
        self.total_block_time += block_time_us;

        // Refresh the shared snapshot periodically
        if self.blocks_processed % 10 == 0 {
            let stats_records = self.stats_records.load(Ordering::Relaxed);
            let detector_samples = self.detector_samples.load(Ordering::Relaxed);
            self.update_stats(|stats| {
                stats.blocks_processed = self.blocks_processed;
                stats.samples_ingested = self.samples_ingested;
                stats.outputs_emitted = self.outputs_emitted;
                stats.stats_records = stats_records;
                stats.detector_samples = detector_samples;
                stats.average_block_time_us = if self.blocks_processed > 0 {
                    self.total_block_time / self.blocks_processed
                } else {
                    0
                };
                stats.last_update = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_millis() as u64;
            })
            .await;
        }
    }

    /// Reset metrics
    fn reset_metrics(&mut self) {
        self.blocks_processed = 0;
        self.samples_ingested = 0;
        self.outputs_emitted = 0;
        self.total_block_time = 0;
        self.stats_records.store(0, Ordering::Relaxed);
        self.detector_samples.store(0, Ordering::Relaxed);
    }

    /// Update stats with a closure
    async fn update_stats<F>(&self, update_fn: F)
    where
        F: FnOnce(&mut StationStats),
    {
        let mut stats = self.stats.lock().await;
        update_fn(&mut *stats);
    }

    /// Get current processing statistics
    pub async fn get_stats(&self) -> StationStats {
        self.stats.lock().await.clone()
    }

    /// Check if processing is running
    pub async fn is_running(&self) -> bool {
        *self.is_running.lock().await
    }

    /// Get current session configuration
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }
}

/// Helper function to start the station service in the background
pub async fn start_station_service(
    input_receiver: broadcast::Receiver<SampleBlock>,
    session: SessionConfig,
) -> SspResult<(mpsc::Sender<ServiceCommand>, Arc<Mutex<StationStats>>)> {
    let mut service = StationService::new(input_receiver, session)?;

    let command_sender = service.command_handle();
    let stats_handle = service.stats.clone();

    // Start service in background task
    tokio::spawn(async move {
        if let Err(e) = service.run().await {
            eprintln!("Station service error: {}", e);
        }
    });

    Ok((command_sender, stats_handle))
}
