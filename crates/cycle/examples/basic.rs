//! Basic example demonstrating HP filter decomposition and cycle comparison
//!
//! Run with: RUST_LOG=cycle_core=debug cargo run --example basic -p cycle-facade

use cycle_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Synthetic quarterly real GDP levels
fn gdp(quarters: usize, growth: f64, amplitude: f64, phase: f64) -> Result<TimeSeries> {
    let values = (0..quarters)
        .map(|q| {
            let t = q as f64;
            (11.5 + growth * t + amplitude * (t * 0.28 + phase).sin()).exp()
        })
        .collect();
    TimeSeries::from_values(values)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cycle_core=info".into()),
        )
        .init();

    println!("=== Business Cycle Examples ===\n");

    // 1. Trends at several smoothing parameters
    println!("1. HP trends (lambda = 10, 100, 1600)");
    let france = gdp(100, 0.004, 0.015, 0.0)?;
    let config = FilterConfigBuilder::new()
        .lambdas(&[10.0, 100.0, 1600.0])
        .log_transform(true)
        .build()?;
    for result in config.run(&france)? {
        let trend = result.trend().values();
        println!(
            "   lambda {:>7}: trend start {:.4}, end {:.4}, cycle std {:.3}%",
            result.lambda(),
            trend[0],
            trend[trend.len() - 1],
            percent_deviation(cycle_volatility(result.cycle())?)
        );
    }

    // 2. Two-country comparison
    println!("\n2. Cycle comparison (lambda = 1600)");
    let uk = gdp(100, 0.005, 0.018, 0.0)?;
    let japan = gdp(100, 0.003, 0.011, 0.6)?;
    let analysis = AnalysisConfig {
        filter: FilterConfig {
            lambdas: vec![Frequency::Quarterly.recommended_lambda()],
            log_transform: true,
        },
        statistics: StatisticsConfig {
            std_dev: StdDevKind::Sample,
            percent: true,
        },
    };
    let cmp = analysis.compare_series("UK", &uk, "Japan", &japan)?;
    println!("   {} std: {:.3}%", cmp.left_label, cmp.left_volatility_percent());
    println!("   {} std: {:.3}%", cmp.right_label, cmp.right_volatility_percent());
    println!("   relative volatility: {:.3}", cmp.relative_volatility);
    println!("   correlation: {:.3} over {} quarters", cmp.correlation, cmp.observations);

    println!("\n=== Examples Complete ===");
    Ok(())
}
