//! Basic example demonstrating a sales forecast
//!
//! Run with: cargo run --example basic -p forecast-facade

use forecast_facade::{DashboardSession, GaussianNoise, Language, ZeroNoise};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== salescast Basic Example ===\n");

    let mut session = DashboardSession::with_sample_data();
    for record in session.records() {
        println!("   {:>4}: {:>8.0}", record.label, record.value);
    }

    // 1. Dashboard metrics
    let metrics = session.metrics();
    println!("\n1. Metrics");
    println!(
        "   total={:.0}  average={:.0}  trend={}",
        metrics.total, metrics.average, metrics.trend
    );

    // 2. Deterministic forecast
    println!("\n2. Forecast (no noise)");
    let report = session.generate_forecast(&mut ZeroNoise)?;
    println!(
        "   slope={:.2}  intercept={:.2}  r2={:.3}",
        report.fit.slope, report.fit.intercept, report.fit.r_squared
    );
    for p in &report.points {
        println!("   period {:>2}: {:.0}", p.period, p.value);
    }

    // 3. Noisy forecast
    println!("\n3. Forecast (seeded noise)");
    let report = session.generate_forecast(&mut GaussianNoise::seeded(42))?;
    println!("   {:?}", report.values().iter().map(|v| format!("{:.0}", v)).collect::<Vec<_>>());

    // 4. Insights
    println!("\n4. Insights");
    for lang in [Language::English, Language::Arabic] {
        for line in session.insight_lines(lang).unwrap_or_default() {
            println!("   {}", line);
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
