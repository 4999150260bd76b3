//! Basic usage examples for the SSP foundation types
//!
//! Demonstrates channel identity handling, sample block construction,
//! per-channel statistics, and time slicing.

use ssp_core::{
    BandCode, ChannelId, ChannelStats, SampleBlock, SspResult, StationMetadata, StatsRecord,
};

fn main() -> SspResult<()> {
    println!("=== SSP-Core Basic Usage Examples ===\n");

    // Example 1: SEED channel identities
    channel_identity_example()?;

    // Example 2: Building a multi-channel sample block
    sample_block_example()?;

    // Example 3: Channel statistics and record formatting
    statistics_example()?;

    // Example 4: Time slicing a block
    slicing_example()?;

    println!("=== All examples completed successfully! ===");
    Ok(())
}

/// Example 1: Channel identities and band classification
fn channel_identity_example() -> SspResult<()> {
    println!("1. Channel Identity Example");
    println!("   Classifying SEED channel names...");

    for seedname in ["BHZ", "HHN", "LHE", "VHZ", "UHZ"] {
        let channel = ChannelId::new("00", seedname)?;
        println!(
            "   ✓ {}: band={}, component={:?}",
            channel,
            channel.band(),
            channel.component()
        );
    }

    let long_period = ChannelId::new("", "LHZ")?;
    assert_eq!(long_period.band(), BandCode::LongPeriod);
    println!("   ✓ Bare location renders as: {}", long_period);

    Ok(())
}

/// Example 2: Three-component sample block
fn sample_block_example() -> SspResult<()> {
    println!("\n2. Sample Block Example");
    println!("   Creating a 3-component broadband block...");

    let channels = vec![
        ChannelId::new("00", "BHZ")?,
        ChannelId::new("00", "BHN")?,
        ChannelId::new("00", "BHE")?,
    ];
    let metadata = StationMetadata::new("ANMO", "IU", 40.0, channels, 2.0)?;

    let samples_per_channel = 80;
    let channel_count = 3;

    // Interleaved data: each component gets its own oscillation
    let data: Vec<f64> = (0..samples_per_channel * channel_count)
        .map(|i| {
            let channel = i % channel_count;
            let sample = i / channel_count;
            let t = sample as f64 / 40.0;

            match channel {
                0 => 1.0 * (2.0 * t).sin() + 0.05 * rand_noise(),
                1 => 0.6 * (2.0 * t + 0.5).sin() + 0.05 * rand_noise(),
                2 => 0.4 * (2.0 * t + 1.0).sin() + 0.05 * rand_noise(),
                _ => 0.0,
            }
        })
        .collect();

    let block = SampleBlock::new(data, metadata)?;

    println!("   ✓ Block id: {}", block.id);
    println!("   ✓ Total samples: {}", block.len());
    println!("   ✓ Samples per channel: {}", block.samples_per_channel());

    for (index, channel) in block.metadata.channels.iter().enumerate() {
        let stats = block.channel_stats(index)?;
        println!(
            "   ✓ {}: rms={:.3}, peak-to-peak={:.3}",
            channel, stats.rms, stats.peak_to_peak
        );
    }

    Ok(())
}

/// Example 3: Statistics on clean versus noisy data
fn statistics_example() -> SspResult<()> {
    println!("\n3. Statistics Example");
    println!("   Comparing clean and noisy traces...");

    let clean: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin()).collect();
    let noisy: Vec<f64> = clean.iter().map(|s| s + 0.2 * rand_noise()).collect();

    let clean_stats = ChannelStats::calculate(&clean);
    let noisy_stats = ChannelStats::calculate(&noisy);

    println!(
        "   ✓ Clean: mean={:.4}, rms={:.4}, std={:.4}",
        clean_stats.mean, clean_stats.rms, clean_stats.std_dev
    );
    println!(
        "   ✓ Noisy: mean={:.4}, rms={:.4}, std={:.4}",
        noisy_stats.mean, noisy_stats.rms, noisy_stats.std_dev
    );

    // Fixed-width record layout used for statistics reporting
    let record = StatsRecord {
        channel: ChannelId::new("00", "BHZ")?,
        mean: clean_stats.mean,
        rms: clean_stats.rms,
        peak: clean_stats.max.abs().max(clean_stats.min.abs()),
    };
    println!("   ✓ Record line: {}", record);

    Ok(())
}

/// Example 4: Extracting a time range from a block
fn slicing_example() -> SspResult<()> {
    println!("\n4. Time Slicing Example");
    println!("   Cutting a window out of a longer block...");

    let channels = vec![ChannelId::new("00", "BHZ")?];
    let metadata = StationMetadata::new("ANMO", "IU", 40.0, channels, 10.0)?;
    let data: Vec<f64> = (0..400).map(|i| i as f64).collect();
    let block = SampleBlock::new(data, metadata)?;

    let window = block.slice_time(2.0, 4.5)?;
    println!("   ✓ Window duration: {:.1}s", window.duration());
    println!("   ✓ Window samples: {}", window.len());

    let times = window.time_vector();
    println!(
        "   ✓ Window spans t={:.3}s to t={:.3}s (relative)",
        times.first().copied().unwrap_or(0.0),
        times.last().copied().unwrap_or(0.0)
    );

    Ok(())
}

/// Simple pseudo-random noise generator for examples
fn rand_noise() -> f64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::time::{SystemTime, UNIX_EPOCH};

    let mut hasher = DefaultHasher::new();
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .hash(&mut hasher);
    let hash = hasher.finish();

    // Convert to [-1, 1] range
    ((hash % 10000) as f64 / 5000.0) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples() {
        assert!(channel_identity_example().is_ok());
        assert!(sample_block_example().is_ok());
        assert!(statistics_example().is_ok());
        assert!(slicing_example().is_ok());
    }
}
