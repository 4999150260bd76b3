//! Real-time telemetry streaming of simulated station blocks

use crate::station_simulator::{SimulatorConfig, StationSimulator};
use crate::waveforms::WaveformPattern;
use serde::{Deserialize, Serialize};
use ssp_core::{SampleBlock, SspResult};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, Duration, Instant};

/// Configuration for real-time telemetry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Station simulation configuration
    pub simulator: SimulatorConfig,
    /// Block duration in seconds
    pub chunk_duration: f64,
    /// Buffer size for the stream (number of blocks to keep)
    pub buffer_size: usize,
    /// Update rate in Hz (how often to send new data)
    pub update_rate: f64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            simulator: SimulatorConfig::default(),
            chunk_duration: 1.0, // 1s blocks
            buffer_size: 60,     // one minute of history
            update_rate: 1.0,    // 1Hz updates
        }
    }
}

/// Commands for controlling the stream
#[derive(Debug, Clone)]
pub enum StreamCommand {
    Start,
    Stop,
    Pause,
    Resume,
    UpdateConfig(TelemetryConfig),
    SetPattern(WaveformPattern),
}

/// Stream statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryStats {
    pub is_running: bool,
    pub blocks_generated: u64,
    pub total_duration: f64,
    pub average_block_time: f64,
    pub last_update: u64,
}

/// Real-time telemetry stream over a simulated station
pub struct TelemetryStream {
    config: TelemetryConfig,
    simulator: Arc<Mutex<StationSimulator>>,
    data_sender: broadcast::Sender<SampleBlock>,
    control_receiver: mpsc::Receiver<StreamCommand>,
    control_sender: mpsc::Sender<StreamCommand>,
    is_running: Arc<Mutex<bool>>,
    current_block: Arc<Mutex<Option<SampleBlock>>>,
    stats: Arc<Mutex<TelemetryStats>>,
}

impl TelemetryStream {
    /// Create new telemetry stream
    pub fn new(config: TelemetryConfig) -> SspResult<Self> {
        let simulator = StationSimulator::new(config.simulator.clone())?;
        let (data_sender, _) = broadcast::channel(config.buffer_size);
        let (control_sender, control_receiver) = mpsc::channel(32);

        Ok(TelemetryStream {
            config,
            simulator: Arc::new(Mutex::new(simulator)),
            data_sender,
            control_receiver,
            control_sender,
            is_running: Arc::new(Mutex::new(false)),
            current_block: Arc::new(Mutex::new(None)),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
        })
    }

    /// Get a receiver for data updates
    pub fn subscribe(&self) -> broadcast::Receiver<SampleBlock> {
        self.data_sender.subscribe()
    }

    /// Get control sender for sending commands
    pub fn control_handle(&self) -> mpsc::Sender<StreamCommand> {
        self.control_sender.clone()
    }

    /// Drive the streaming loop until the control channel closes
    pub async fn run(&mut self) -> SspResult<()> {
        let update_interval = Duration::from_secs_f64(1.0 / self.config.update_rate);
        let mut interval_timer = interval(update_interval);

        println!(
            "Telemetry stream ready - Update rate: {:.1}Hz, Block duration: {:.0}ms",
            self.config.update_rate,
            self.config.chunk_duration * 1000.0
        );

        loop {
            tokio::select! {
                // Handle timer ticks for block generation
                _ = interval_timer.tick() => {
                    let is_running = *self.is_running.lock().await;
                    if is_running {
                        let start_time = Instant::now();

                        // Generate new block
                        let block = {
                            let mut sim = self.simulator.lock().await;
                            sim.generate_chunk(self.config.chunk_duration)?
                        };

                        let generation_time = start_time.elapsed();

                        // Update statistics
                        {
                            let mut stats = self.stats.lock().await;
                            stats.blocks_generated += 1;
                            stats.total_duration += self.config.chunk_duration;
                            stats.average_block_time = generation_time.as_secs_f64();
                            stats.last_update = std::time::SystemTime::now()
                                .duration_since(std::time::UNIX_EPOCH)
                                .unwrap()
                                .as_millis() as u64;
                        }

                        // Store current block
                        {
                            let mut current = self.current_block.lock().await;
                            *current = Some(block.clone());
                        }

                        // Send to subscribers (ignore if no receivers)
                        let _ = self.data_sender.send(block);

                        // Warn if generation cannot keep up with real time
                        if generation_time.as_millis() > (self.config.chunk_duration * 1000.0) as u128 {
                            println!(
                                "Warning: Block generation took {}ms, longer than block duration {:.0}ms",
                                generation_time.as_millis(),
                                self.config.chunk_duration * 1000.0
                            );
                        }
                    }
                }

                // Handle control commands
                command = self.control_receiver.recv() => {
                    match command {
                        Some(StreamCommand::Start) => {
                            *self.is_running.lock().await = true;
                            self.stats.lock().await.is_running = true;
                            println!("Telemetry stream started");
                        }
                        Some(StreamCommand::Stop) => {
                            *self.is_running.lock().await = false;
                            {
                                let mut stats = self.stats.lock().await;
                                stats.is_running = false;
                                stats.blocks_generated = 0;
                                stats.total_duration = 0.0;
                            }

                            // Reset simulator time
                            {
                                let mut sim = self.simulator.lock().await;
                                sim.reset_time();
                            }
                            println!("Telemetry stream stopped");
                        }
                        Some(StreamCommand::Pause) => {
                            *self.is_running.lock().await = false;
                            self.stats.lock().await.is_running = false;
                            println!("Telemetry stream paused");
                        }
                        Some(StreamCommand::Resume) => {
                            *self.is_running.lock().await = true;
                            self.stats.lock().await.is_running = true;
                            println!("Telemetry stream resumed");
                        }
                        Some(StreamCommand::UpdateConfig(new_config)) => {
                            self.config = new_config.clone();

                            // Update simulator
                            {
                                let mut sim = self.simulator.lock().await;
                                sim.update_config(new_config.simulator)?;
                            }

                            // Update interval timer
                            let new_interval = Duration::from_secs_f64(1.0 / self.config.update_rate);
                            interval_timer = interval(new_interval);

                            println!("Telemetry stream configuration updated");
                        }
                        Some(StreamCommand::SetPattern(pattern)) => {
                            let mut config = self.config.clone();
                            config.simulator.pattern = pattern;

                            {
                                let mut sim = self.simulator.lock().await;
                                sim.update_config(config.simulator.clone())?;
                            }

                            self.config = config;
                            println!("Telemetry pattern updated: {}", pattern.description());
                        }
                        None => {
                            println!("Telemetry control channel closed");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Get current stream statistics
    pub async fn stats(&self) -> TelemetryStats {
        self.stats.lock().await.clone()
    }

    /// Get the most recent block (for immediate access)
    pub async fn current_block(&self) -> Option<SampleBlock> {
        self.current_block.lock().await.clone()
    }

    /// Check if stream is running
    pub async fn is_running(&self) -> bool {
        *self.is_running.lock().await
    }

    /// Get current configuration
    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }
}

/// Helper function to create and start a stream in the background
pub async fn start_telemetry(
    config: TelemetryConfig,
) -> SspResult<(
    broadcast::Receiver<SampleBlock>,
    mpsc::Sender<StreamCommand>,
)> {
    let mut stream = TelemetryStream::new(config)?;
    let data_receiver = stream.subscribe();
    let control_sender = stream.control_handle();

    // Start the stream in a background task
    tokio::spawn(async move {
        if let Err(e) = stream.run().await {
            eprintln!("Telemetry stream error: {}", e);
        }
    });

    Ok((data_receiver, control_sender))
}
