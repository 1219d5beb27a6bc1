//! Demonstrates multi-channel smoothing with sensor-smooth
//!
//! Feeds the same noisy ADC readings through exponential and running
//! average engines, with and without validity limits.

use sensor_smooth::{Config, Exponential, RunningAverage, SmoothingEngine};

fn main() {
    println!("=== sensor-smooth Filtering Examples ===\n");

    // 4096 is a glitch above the 12-bit ADC range
    let noisy_samples = [2048, 2100, 2000, 4096, 2080, 1990, 2050, 2020, 2060];

    // Example 1: Exponential filter, no limits
    println!("1. Exponential filter (factor=0.3)");
    let mut engine: SmoothingEngine<u16, Exponential<u16>> = SmoothingEngine::default();
    engine.begin(1).expect("Valid channel count");
    engine.filter_mut(0).expect("Channel 0 exists").set_factor(0.3);

    println!("   Input → Output");
    for &sample in &noisy_samples {
        engine.set_value(0, sample).expect("Channel 0 exists");
        println!("   {:4} → {:4}", sample, engine.value(0).expect("Channel 0 exists"));
    }
    println!();

    // Example 2: Running average with the ADC range as valid limits
    println!("2. Running average (window=5), valid range 0..=4095");
    let config = Config::default().with_range(0, 4095);
    let mut engine: SmoothingEngine<u16, RunningAverage<u16, 5>> = SmoothingEngine::new(config);
    engine.begin(1).expect("Valid channel count");

    println!("   Input → Output (accepted)");
    for &sample in &noisy_samples {
        let accepted = engine.set_value(0, sample).expect("Channel 0 exists");
        println!(
            "   {:4} → {:4} ({})",
            sample,
            engine.value(0).expect("Channel 0 exists"),
            accepted
        );
    }
    println!();

    // Example 3: Two channels, max delta rejects the glitch on one of them
    println!("3. Exponential filter, two channels, max delta 200 on channel 1");
    let mut engine: SmoothingEngine<f32, Exponential<f32>> = SmoothingEngine::default();
    engine.begin(2).expect("Valid channel count");
    engine.configure_filters(|filter| filter.set_factor(0.3));
    engine.set_max_delta(1, 200.0).expect("Channel 1 exists");

    println!("   Input → Channel 0 | Channel 1");
    for &sample in &noisy_samples {
        for idx in 0..engine.measures() {
            engine.set_value(idx, sample as f32).expect("Channel exists");
        }
        println!(
            "   {:4} → {:9.1} | {:9.1}",
            sample,
            engine.value(0).expect("Channel 0 exists"),
            engine.value(1).expect("Channel 1 exists")
        );
    }
}
