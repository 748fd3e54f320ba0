//! Error Handling Example for the AQI engine
//!
//! Produces each error the engine can report and shows that a failed
//! computation leaves later ones unaffected.
//!
//! Run with: cargo run --example error_handling

use aqi_engine::{
    AqiError, Breakpoint, BreakpointTable, EngineConfig, Pollutant, Readings, classify,
    standard_engine,
};

/// Tally of outcomes across a batch of inputs
#[derive(Debug, Default)]
struct Outcomes {
    succeeded: u32,
    invalid_concentration: u32,
    other: u32,
}

impl Outcomes {
    fn total(&self) -> u32 {
        self.succeeded + self.invalid_concentration + self.other
    }

    fn record(&mut self, result: &Result<u16, AqiError>) {
        match result {
            Ok(_) => self.succeeded += 1,
            Err(AqiError::InvalidConcentration { .. }) => self.invalid_concentration += 1,
            Err(_) => self.other += 1,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("⚠️  AQI Engine - Error Handling Example\n");

    let engine = standard_engine()?;

    println!("🧪 Batch with bad readings");
    println!("==========================");
    let batch = [
        Readings::new(75.0, 50.0, 8.0, 30.0, 60.0),
        Readings::new(-5.0, 50.0, 8.0, 30.0, 60.0),
        Readings::new(10.0, f64::NAN, 1.0, 1.0, 1.0),
        Readings::new(8.0, 40.0, 0.5, 2.0, 5.0),
    ];
    let mut outcomes = Outcomes::default();
    for readings in &batch {
        let result = engine.compute(readings).map(|r| r.aqi);
        match &result {
            Ok(aqi) => println!("   ✅ AQI {aqi}"),
            Err(e) => println!("   ❌ {e}"),
        }
        outcomes.record(&result);
    }
    println!(
        "   {} of {} succeeded, {} invalid concentration(s), {} other\n",
        outcomes.succeeded,
        outcomes.total(),
        outcomes.invalid_concentration,
        outcomes.other
    );

    println!("🏷️  Classifying external values");
    println!("===============================");
    for aqi in [42, 301, -7] {
        match classify(aqi) {
            Ok(category) => println!("   {aqi:>4} → {category}"),
            Err(e) => println!("   {aqi:>4} → ❌ {e}"),
        }
    }
    println!();

    println!("🗂️  Building tables");
    println!("==================");
    let attempts: [(&str, Vec<Breakpoint>); 3] = [
        ("empty", vec![]),
        (
            "overlapping",
            vec![
                Breakpoint::new(0.0, 10.0, 0, 50),
                Breakpoint::new(5.0, 20.0, 51, 100),
            ],
        ),
        ("valid", vec![Breakpoint::new(0.0, 10.0, 0, 50)]),
    ];
    for (name, tiers) in attempts {
        match BreakpointTable::new(tiers) {
            Ok(table) => println!("   ✅ {name}: {} tier(s)", table.tiers().len()),
            Err(e) => println!("   ❌ {name}: {e}"),
        }
    }
    println!();

    println!("🔤 Parsing identifiers and config");
    println!("=================================");
    for name in ["pm2.5", "NO2", "pm10"] {
        match name.parse::<Pollutant>() {
            Ok(pollutant) => println!("   ✅ {name} → {pollutant} ({})", pollutant.unit().symbol()),
            Err(e) => println!("   ❌ {e}"),
        }
    }
    if let Err(e) = EngineConfig::from_json("not json") {
        println!("   ❌ {e}");
    }

    Ok(())
}
