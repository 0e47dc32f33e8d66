//! Whole-city aggregate
//!
//! Builds one zone per layout entry, fans the shared collaborators out to
//! all of them, and drives every zone's tick.

use std::sync::Arc;

use super::config::CityConfig;
use super::messaging::MessageSink;
use super::metrics::MetricsSink;
use super::signal::TrafficSignal;
use super::types::SignalPhase;
use super::zone::Zone;

/// All zones of the simulated city
pub struct City {
    name: String,
    zones: Vec<Zone>,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl City {
    /// Build and initialize one zone per config entry.
    ///
    /// With a seed, each zone gets a derived seed (`seed + index`) so runs
    /// reproduce while zones still draw different cycles.
    pub fn from_config(
        config: &CityConfig,
        seed: Option<u64>,
        messaging: Option<Arc<dyn MessageSink>>,
        metrics: Option<Arc<dyn MetricsSink>>,
    ) -> Self {
        let mut zones = Vec::with_capacity(config.zones.len());
        for (index, zone_config) in config.zones.iter().enumerate() {
            let mut zone = match seed {
                Some(seed) => Zone::new_with_seed(
                    zone_config.id.clone(),
                    zone_config.bounds,
                    messaging.clone(),
                    metrics.clone(),
                    seed.wrapping_add(index as u64),
                ),
                None => Zone::new(
                    zone_config.id.clone(),
                    zone_config.bounds,
                    messaging.clone(),
                    metrics.clone(),
                ),
            };
            zone.initialize(&TrafficSignal::boxed);
            zones.push(zone);
        }

        Self {
            name: config.city_name.clone(),
            zones,
            metrics,
        }
    }

    /// Advance every zone one time step, then record the completed tick.
    pub fn advance_tick(&mut self) {
        for zone in &mut self.zones {
            zone.advance_tick();
        }
        if let Some(metrics) = &self.metrics {
            metrics.tick_completed();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zones_mut(&mut self) -> &mut [Zone] {
        &mut self.zones
    }

    pub fn print_summary(&self) {
        let mut green = 0;
        let mut yellow = 0;
        let mut red = 0;
        for zone in &self.zones {
            for signal in zone.traffic_lights_local() {
                match signal.phase() {
                    SignalPhase::Green => green += 1,
                    SignalPhase::Yellow => yellow += 1,
                    SignalPhase::Red => red += 1,
                }
            }
        }

        println!("=== City '{}' ===", self.name);
        println!("Zones: {}", self.zones.len());
        println!(
            "Signals: {} ({} green / {} yellow / {} red)",
            green + yellow + red,
            green,
            yellow,
            red
        );
    }
}
