//! Custom Breakpoint Tables Example
//!
//! Dumps the built-in tables as JSON, swaps in a revised PM2.5 table and shows
//! how the same reading is scored under both.
//!
//! Run with: cargo run --example custom_tables

use aqi_engine::{AqiEngine, Breakpoint, BreakpointTable, EngineConfig, Pollutant, standard_engine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🗂️  AQI Engine - Custom Tables Example\n");

    let mut config = EngineConfig::standard()?;
    let json = config.to_json()?;
    println!("📄 Built-in configuration ({} bytes of JSON)", json.len());
    println!("{}\n", json.lines().take(8).collect::<Vec<_>>().join("\n"));

    // Tighter PM2.5 bands with a lower "Good" ceiling
    config.pm25 = BreakpointTable::new(vec![
        Breakpoint::new(0.0, 9.0, 0, 50),
        Breakpoint::new(9.1, 35.4, 51, 100),
        Breakpoint::new(35.5, 55.4, 101, 150),
        Breakpoint::new(55.5, 125.4, 151, 200),
        Breakpoint::new(125.5, 225.4, 201, 300),
        Breakpoint::new(225.5, 325.4, 301, 500),
    ])?;

    // Reload through JSON to exercise validation on the way in
    let revised = AqiEngine::from_config(EngineConfig::from_json(&config.to_json()?)?);
    let standard = standard_engine()?;

    println!("📊 PM2.5 sub-index: built-in vs revised");
    println!("=======================================");
    for concentration in [5.0, 10.0, 40.0, 100.0, 200.0, 300.0] {
        let before = standard.sub_index(Pollutant::Pm25, concentration)?;
        let after = revised.sub_index(Pollutant::Pm25, concentration)?;
        println!("   {concentration:>6.1} µg/m³  {before:>3} → {after:>3}");
    }

    println!("\n⚠️  Rejected configuration");
    println!("=========================");
    let broken = r#"{"pm25": [], "o3": [], "co": [], "so2": [], "no2": []}"#;
    match EngineConfig::from_json(broken) {
        Ok(_) => println!("   ✅ Unexpectedly accepted"),
        Err(e) => println!("   ❌ {e}"),
    }

    Ok(())
}
