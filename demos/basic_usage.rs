//! Basic Usage Example for the AQI engine
//!
//! Computes every preset scenario and prints the overall AQI, its category and
//! the per-pollutant breakdown.
//!
//! Run with: cargo run --example basic_usage
//! Set `RUST_LOG=aqi_engine=debug` to see the engine's events.

use aqi_engine::{OverallAqi, Scenario, compute_overall_aqi, standard_engine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🌬️  AQI Engine - Basic Usage Example\n");

    let engine = standard_engine()?;
    for scenario in Scenario::ALL {
        println!("📍 {scenario}");
        println!("{}", "=".repeat(scenario.name().chars().count() + 3));

        let readings = scenario.readings();
        for (pollutant, concentration) in readings.iter() {
            println!(
                "   {:<6} {:>8.1} {}",
                pollutant.label(),
                concentration,
                pollutant.unit().symbol()
            );
        }

        let result = engine.compute(&readings)?;
        print_result(&result);
        println!();
    }

    // The free function uses the same built-in tables
    println!("🔧 Direct call");
    println!("==============");
    let result = compute_overall_aqi(35.5, 0.0, 0.0, 0.0, 0.0)?;
    print_result(&result);

    Ok(())
}

fn print_result(result: &OverallAqi) {
    let category = result.category;
    println!(
        "   ✅ AQI {} ({}, {})",
        result.aqi,
        category.label(),
        category.severity_tag()
    );
    println!("   🏭 Dominant pollutant: {}", result.dominant_pollutant());
    println!("   🩺 {}", category.implication());
    println!("   👉 {}", category.recommendation());

    println!("   📊 Contributions:");
    let max = result.aqi.max(1);
    for (pollutant, index) in result.sub_indices.ranked() {
        let bar = "█".repeat(usize::from(index) * 30 / usize::from(max));
        println!("     {:<6} {:>3} {bar}", pollutant.label(), index);
    }
}
