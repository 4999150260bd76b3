//! Session filter engine
//!
//! Owns every filter instance for one acquisition session. Each channel
//! runs its FIR decimator first; detector cascades and the statistics
//! window consume the decimated stream. All state is torn down together
//! when the engine is dropped.

use crate::config::{ChannelConfig, SessionConfig};
use crate::fir::{FilterChain, FirFilter, FirFilterDef};
use crate::iir::{IirCascade, IirDefinition};
use crate::stats::StatsAccumulator;
use ssp_core::{ChannelId, SspError, SspResult, StatsRecord};
use tracing::{debug, info};

/// Consumer of completed statistics windows
pub trait StatsSink: Send + Sync {
    fn stats(&mut self, record: &StatsRecord);
}

/// Consumer of per-detector filtered samples
pub trait TriggerSink: Send + Sync {
    fn detector_sample(&mut self, channel: &ChannelId, detector: &str, value: f64);
}

/// Default sink that writes each record to the log
#[derive(Debug, Default)]
pub struct LogStatsSink;

impl StatsSink for LogStatsSink {
    fn stats(&mut self, record: &StatsRecord) {
        info!("{}", record);
    }
}

/// Default sink that discards detector samples
#[derive(Debug, Default)]
pub struct NullTriggerSink;

impl TriggerSink for NullTriggerSink {
    fn detector_sample(&mut self, _channel: &ChannelId, _detector: &str, _value: f64) {}
}

/// Opaque handle naming a channel registered with the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelHandle(usize);

/// Engine-wide behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Snap recursive filter outputs away from the denormal range
    pub denormal_guard: bool,
}

/// One detector's wiring inside a channel pipeline
#[derive(Debug)]
struct DetectorBinding {
    id: String,
    /// Index into the channel's cascade pool; none = raw stream
    cascade: Option<usize>,
}

/// All filter state for one channel
#[derive(Debug)]
struct ChannelPipeline {
    channel: ChannelId,
    fir: Option<FirFilter>,
    /// Instantiated cascades, shared by consumers with the same definition
    cascades: Vec<IirCascade>,
    /// Last output of each cascade, refreshed once per decimated sample
    cascade_outputs: Vec<f64>,
    detectors: Vec<DetectorBinding>,
    stats: Option<StatsAccumulator>,
    stats_cascade: Option<usize>,
}

/// Session-scoped filter engine. One instance per acquisition session,
/// driven from a single thread, sample by sample.
pub struct FilterEngine {
    chain: FilterChain,
    options: EngineOptions,
    channels: Vec<ChannelPipeline>,
    stats_sink: Box<dyn StatsSink>,
    trigger_sink: Box<dyn TriggerSink>,
}

impl FilterEngine {
    /// Create an empty engine over a filter chain
    pub fn new(chain: FilterChain, options: EngineOptions) -> Self {
        FilterEngine {
            chain,
            options,
            channels: Vec::new(),
            stats_sink: Box::new(LogStatsSink),
            trigger_sink: Box::new(NullTriggerSink),
        }
    }

    /// Build a fully wired engine from a validated session configuration
    pub fn from_config(config: &SessionConfig) -> SspResult<Self> {
        config.validate()?;

        let mut chain = FilterChain::built_in();
        let extras: Vec<FirFilterDef> = config
            .extra_firs
            .iter()
            .map(|f| f.to_def())
            .collect::<SspResult<Vec<_>>>()?;
        chain.append(&extras);

        let options = EngineOptions {
            denormal_guard: config.denormal_guard,
        };

        let mut engine = Self::new(chain, options);
        for channel in &config.channels {
            engine.add_channel(channel, &config.iir_definitions)?;
        }
        Ok(engine)
    }

    /// Replace the statistics consumer
    pub fn set_stats_sink(&mut self, sink: Box<dyn StatsSink>) {
        self.stats_sink = sink;
    }

    /// Replace the detector sample consumer
    pub fn set_trigger_sink(&mut self, sink: Box<dyn TriggerSink>) {
        self.trigger_sink = sink;
    }

    /// Register one channel and instantiate its filters.
    ///
    /// Cascades are pooled per channel: the statistics filter and any
    /// detectors naming the same definition share one instance. The
    /// statistics filter binds first so it seeds the pool.
    pub fn add_channel(
        &mut self,
        config: &ChannelConfig,
        iir_defs: &[IirDefinition],
    ) -> SspResult<ChannelHandle> {
        let fir = match config.fir {
            Some(id) => Some(FirFilter::new(self.chain.find(id)?)),
            None => None,
        };

        let stats = match config.stats_window {
            Some(0) => return Err(SspError::InvalidStatsWindow { window: 0 }),
            Some(window) => Some(StatsAccumulator::new(config.channel.clone(), window)),
            None => None,
        };

        let mut cascades: Vec<IirCascade> = Vec::new();

        let stats_cascade = match config.stats_filter {
            Some(id) => {
                if stats.is_none() {
                    return Err(SspError::ConfigurationError {
                        message: format!(
                            "Channel {} has a statistics filter but no statistics window",
                            config.channel
                        ),
                    });
                }
                let def = find_def(iir_defs, id)?;
                Some(bind_cascade(&mut cascades, def, self.options)?)
            }
            None => None,
        };

        let mut detectors = Vec::with_capacity(config.detectors.len());
        for detector in &config.detectors {
            let cascade = match detector.filter {
                Some(id) => {
                    let def = find_def(iir_defs, id)?;
                    Some(bind_cascade(&mut cascades, def, self.options)?)
                }
                None => None,
            };
            detectors.push(DetectorBinding {
                id: detector.id.clone(),
                cascade,
            });
        }

        debug!(
            "Channel {} bound with {} cascade(s), {} detector(s)",
            config.channel,
            cascades.len(),
            detectors.len()
        );

        let cascade_outputs = vec![0.0; cascades.len()];
        self.channels.push(ChannelPipeline {
            channel: config.channel.clone(),
            fir,
            cascades,
            cascade_outputs,
            detectors,
            stats,
            stats_cascade,
        });
        Ok(ChannelHandle(self.channels.len() - 1))
    }

    /// Feed one raw sample through a channel's pipeline.
    ///
    /// Returns the decimated sample when the FIR stage emits one, after
    /// routing it through the statistics window and detector cascades.
    /// Channels without a FIR stage pass every sample straight through.
    pub fn ingest(&mut self, handle: ChannelHandle, sample: f64) -> Option<f64> {
        let pipeline = &mut self.channels[handle.0];

        let value = match pipeline.fir.as_mut() {
            Some(fir) => fir.push(sample)?,
            None => sample,
        };

        // Each cascade advances exactly once per decimated sample, no
        // matter how many consumers read it
        for (cascade, output) in pipeline
            .cascades
            .iter_mut()
            .zip(pipeline.cascade_outputs.iter_mut())
        {
            *output = cascade.process(value);
        }

        if let Some(stats) = pipeline.stats.as_mut() {
            let measured = match pipeline.stats_cascade {
                Some(index) => pipeline.cascade_outputs[index],
                None => value,
            };
            stats.accumulate(measured);
            if let Some(record) = stats.maybe_flush() {
                self.stats_sink.stats(&record);
            }
        }

        for binding in &pipeline.detectors {
            let routed = match binding.cascade {
                Some(index) => pipeline.cascade_outputs[index],
                None => value,
            };
            self.trigger_sink
                .detector_sample(&pipeline.channel, &binding.id, routed);
        }

        Some(value)
    }

    /// Zero every filter history and partial statistics window
    pub fn reset(&mut self) {
        for pipeline in &mut self.channels {
            if let Some(fir) = pipeline.fir.as_mut() {
                fir.reset();
            }
            for cascade in &mut pipeline.cascades {
                cascade.reset();
            }
            for output in &mut pipeline.cascade_outputs {
                *output = 0.0;
            }
            if let Some(stats) = pipeline.stats.as_mut() {
                stats.reset();
            }
        }
    }

    /// Handle for a registered channel, if present
    pub fn find_channel(&self, channel: &ChannelId) -> Option<ChannelHandle> {
        self.channels
            .iter()
            .position(|p| &p.channel == channel)
            .map(ChannelHandle)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of cascade instances a channel carries
    pub fn cascade_count(&self, handle: ChannelHandle) -> usize {
        self.channels[handle.0].cascades.len()
    }

    /// The filter chain this engine draws FIR definitions from
    pub fn chain(&self) -> &FilterChain {
        &self.chain
    }
}

fn find_def(defs: &[IirDefinition], id: u8) -> SspResult<&IirDefinition> {
    defs.iter()
        .find(|d| d.id == id)
        .ok_or(SspError::UnknownIirFilter { id })
}

/// Reuse a cascade already instantiated from this definition, or
/// instantiate and register a new one
fn bind_cascade(
    cascades: &mut Vec<IirCascade>,
    def: &IirDefinition,
    options: EngineOptions,
) -> SspResult<usize> {
    if let Some(index) = cascades.iter().position(|c| c.definition_id() == def.id) {
        return Ok(index);
    }
    cascades.push(IirCascade::with_options(def, options.denormal_guard)?);
    Ok(cascades.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DetectorConfig, SessionConfig};
    use crate::iir::SectionSpec;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CollectingStats(Arc<Mutex<Vec<StatsRecord>>>);

    impl StatsSink for CollectingStats {
        fn stats(&mut self, record: &StatsRecord) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    #[derive(Clone, Default)]
    struct CollectingTriggers(Arc<Mutex<Vec<(String, f64)>>>);

    impl TriggerSink for CollectingTriggers {
        fn detector_sample(&mut self, _channel: &ChannelId, detector: &str, value: f64) {
            self.0.lock().unwrap().push((detector.to_string(), value));
        }
    }

    fn test_channel(seedname: &str) -> ChannelId {
        ChannelId::new("00", seedname).unwrap()
    }

    fn bare_channel_config(seedname: &str) -> ChannelConfig {
        ChannelConfig {
            channel: test_channel(seedname),
            fir: None,
            stats_window: None,
            stats_filter: None,
            detectors: Vec::new(),
        }
    }

    #[test]
    fn test_from_config_builds_channels() {
        let engine = FilterEngine::from_config(&SessionConfig::broadband_default()).unwrap();
        assert_eq!(engine.channel_count(), 1);
        assert!(engine.find_channel(&test_channel("BHZ")).is_some());
        assert!(engine.find_channel(&test_channel("LHZ")).is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SessionConfig::broadband_default();
        config.channels[0].fir = Some(9);
        assert_eq!(
            FilterEngine::from_config(&config).err(),
            Some(SspError::UnknownFirFilter { id: 9 })
        );
    }

    #[test]
    fn test_passthrough_without_fir() {
        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        let handle = engine
            .add_channel(&bare_channel_config("BHZ"), &[])
            .unwrap();

        for i in 0..20 {
            let sample = i as f64 * 0.5;
            assert_eq!(engine.ingest(handle, sample), Some(sample));
        }
    }

    #[test]
    fn test_decimation_cadence_through_engine() {
        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        let mut config = bare_channel_config("BHZ");
        config.fir = Some(0);
        let handle = engine.add_channel(&config, &[]).unwrap();

        let mut outputs = 0;
        for i in 0..100 {
            if engine.ingest(handle, (i as f64 * 0.1).sin()).is_some() {
                outputs += 1;
            }
        }
        assert_eq!(outputs, 10);
    }

    #[test]
    fn test_stats_emitted_per_window() {
        let records = CollectingStats::default();
        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        engine.set_stats_sink(Box::new(records.clone()));

        let mut config = bare_channel_config("BHZ");
        config.stats_window = Some(4);
        let handle = engine.add_channel(&config, &[]).unwrap();

        for _ in 0..12 {
            engine.ingest(handle, 2.0);
        }

        let records = records.0.lock().unwrap();
        assert_eq!(records.len(), 3);
        for record in records.iter() {
            assert_eq!(record.channel, test_channel("BHZ"));
            assert!((record.mean - 2.0).abs() < 1e-12);
            assert!((record.rms - 2.0).abs() < 1e-12);
            assert!((record.peak - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_detectors_share_one_cascade() {
        let def = IirDefinition::new(1, "SHARED", 1.0, vec![SectionSpec::lowpass(2, 0.3)]);
        let triggers = CollectingTriggers::default();

        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        engine.set_trigger_sink(Box::new(triggers.clone()));

        let mut config = bare_channel_config("BHZ");
        config.detectors = vec![
            DetectorConfig {
                id: "first".to_string(),
                filter: Some(1),
            },
            DetectorConfig {
                id: "second".to_string(),
                filter: Some(1),
            },
        ];
        let handle = engine.add_channel(&config, &[def.clone()]).unwrap();
        assert_eq!(engine.cascade_count(handle), 1);

        let mut reference = IirCascade::new(&def).unwrap();
        let input = [1.0, 0.0, -0.5, 0.25, 0.0, 0.0, 1.5, -1.0];
        for &sample in input.iter() {
            engine.ingest(handle, sample);
        }

        let samples = triggers.0.lock().unwrap();
        assert_eq!(samples.len(), input.len() * 2);
        for (i, &sample) in input.iter().enumerate() {
            let expected = reference.process(sample);
            let (ref first_id, first) = samples[2 * i];
            let (ref second_id, second) = samples[2 * i + 1];
            assert_eq!(first_id, "first");
            assert_eq!(second_id, "second");
            assert_eq!(first, expected);
            assert_eq!(second, expected);
        }
    }

    #[test]
    fn test_distinct_definitions_get_distinct_cascades() {
        let defs = vec![
            IirDefinition::new(1, "LP", 1.0, vec![SectionSpec::lowpass(2, 0.3)]),
            IirDefinition::new(2, "HP", 1.0, vec![SectionSpec::highpass(2, 0.3)]),
        ];

        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        let mut config = bare_channel_config("BHZ");
        config.detectors = vec![
            DetectorConfig {
                id: "low".to_string(),
                filter: Some(1),
            },
            DetectorConfig {
                id: "high".to_string(),
                filter: Some(2),
            },
        ];
        let handle = engine.add_channel(&config, &defs).unwrap();
        assert_eq!(engine.cascade_count(handle), 2);
    }

    #[test]
    fn test_stats_filter_joins_cascade_pool() {
        let def = IirDefinition::new(1, "SMOOTH", 1.0, vec![SectionSpec::lowpass(2, 0.3)]);

        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        let mut config = bare_channel_config("BHZ");
        config.stats_window = Some(100);
        config.stats_filter = Some(1);
        config.detectors = vec![DetectorConfig {
            id: "threshold".to_string(),
            filter: Some(1),
        }];
        let handle = engine.add_channel(&config, &[def]).unwrap();
        assert_eq!(engine.cascade_count(handle), 1);
    }

    #[test]
    fn test_detector_without_filter_gets_raw_stream() {
        let triggers = CollectingTriggers::default();
        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        engine.set_trigger_sink(Box::new(triggers.clone()));

        let mut config = bare_channel_config("BHZ");
        config.detectors = vec![DetectorConfig {
            id: "raw".to_string(),
            filter: None,
        }];
        let handle = engine.add_channel(&config, &[]).unwrap();

        let input = [3.0, -1.5, 0.0, 7.25];
        for &sample in input.iter() {
            engine.ingest(handle, sample);
        }

        let samples = triggers.0.lock().unwrap();
        let values: Vec<f64> = samples.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, input);
    }

    #[test]
    fn test_stats_filter_smooths_stream() {
        let def = IirDefinition::new(1, "SMOOTH", 1.0, vec![SectionSpec::lowpass(2, 0.3)]);
        let records = CollectingStats::default();

        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        engine.set_stats_sink(Box::new(records.clone()));

        let mut config = bare_channel_config("BHZ");
        config.stats_window = Some(200);
        config.stats_filter = Some(1);
        let handle = engine.add_channel(&config, &[def]).unwrap();

        for _ in 0..400 {
            engine.ingest(handle, 5.0);
        }

        let records = records.0.lock().unwrap();
        assert_eq!(records.len(), 2);
        // Second window sees the settled filter only
        assert!((records[1].mean - 5.0).abs() < 1e-6);
        assert!((records[1].rms - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_matches_fresh_engine() {
        let def = IirDefinition::new(1, "LP", 1.0, vec![SectionSpec::lowpass(3, 0.2)]);
        let build = || {
            let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
            let mut config = bare_channel_config("BHZ");
            config.fir = Some(0);
            config.detectors = vec![DetectorConfig {
                id: "threshold".to_string(),
                filter: Some(1),
            }];
            let handle = engine.add_channel(&config, &[def.clone()]).unwrap();
            (engine, handle)
        };

        let (mut seasoned, handle_a) = build();
        for i in 0..137 {
            seasoned.ingest(handle_a, (i as f64 * 0.3).cos());
        }
        seasoned.reset();

        let (mut fresh, handle_b) = build();
        for i in 0..50 {
            let sample = (i as f64 * 0.7).sin();
            assert_eq!(
                seasoned.ingest(handle_a, sample),
                fresh.ingest(handle_b, sample)
            );
        }
    }

    #[test]
    fn test_unknown_detector_filter_rejected() {
        let mut engine = FilterEngine::new(FilterChain::built_in(), EngineOptions::default());
        let mut config = bare_channel_config("BHZ");
        config.detectors = vec![DetectorConfig {
            id: "orphan".to_string(),
            filter: Some(9),
        }];
        assert_eq!(
            engine.add_channel(&config, &[]).unwrap_err(),
            SspError::UnknownIirFilter { id: 9 }
        );
    }
}
