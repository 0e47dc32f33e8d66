use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::info;

use zone_traffic::city::{
    load_city_config, test_layout, City, LogMessageSink, MessageSink, MetricsSink, TrafficMetrics,
};

#[derive(Parser)]
#[command(name = "zone_traffic")]
#[command(about = "Zone-based traffic signal simulation")]
struct Cli {
    /// City layout JSON file; a built-in 2x2 layout is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to run
    #[arg(long, default_value = "1000")]
    ticks: u32,

    /// Seed for reproducible signal cycle draws
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks between summary lines (0 disables periodic summaries)
    #[arg(long, default_value = "120")]
    summary_every: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let layout = match &cli.config {
        Some(path) => load_city_config(path)?,
        None => test_layout(),
    };

    let messaging: Arc<dyn MessageSink> = Arc::new(LogMessageSink);
    let metrics = Arc::new(TrafficMetrics::new());
    let metrics_sink: Arc<dyn MetricsSink> = metrics.clone();

    let mut city = City::from_config(&layout, cli.seed, Some(messaging), Some(metrics_sink));

    info!(
        "City '{}' initialized with {} zones",
        city.name(),
        city.zones().len()
    );
    city.print_summary();
    println!();

    for tick in 1..=cli.ticks {
        city.advance_tick();

        if cli.summary_every > 0 && tick % cli.summary_every == 0 {
            println!("--- After tick {} ---", tick);
            city.print_summary();
            println!();
        }
    }

    println!("=== Final State ===");
    city.print_summary();
    metrics.log_summary();

    Ok(())
}
