//! Standalone zone/city traffic model
//!
//! Everything here runs independently of any renderer: geometry derivation,
//! signal placement and timing, spawn point calculation, and the per-zone
//! and whole-city aggregates.

mod config;
mod geometry;
mod messaging;
mod metrics;
mod placement;
mod signal;
mod spawn;
mod types;
mod world;
mod zone;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use config::{load_city_config, test_layout, CityConfig, ZoneBounds, ZoneConfig};
#[allow(unused_imports)]
pub use geometry::{build_roads, find_intersections, road_with_orientation};
#[allow(unused_imports)]
pub use messaging::{LogMessageSink, MessageSink};
#[allow(unused_imports)]
pub use metrics::{MetricsSink, TrafficMetrics};
#[allow(unused_imports)]
pub use placement::{plan_signals, SignalSchedule};
#[allow(unused_imports)]
pub use signal::{SignalFactory, SignalParams, SignalUnit, TrafficSignal};
#[allow(unused_imports)]
pub use spawn::spawn_points;
#[allow(unused_imports)]
pub use types::{
    Heading, Orientation, Rect, Road, SignalPhase, SpawnPoint, CYCLE_TIME_MAX, CYCLE_TIME_MIN,
    PAIR_PHASE_OFFSET, ROAD_WIDTH, SIGNAL_CLEARANCE, SIGNAL_HOUSING_HORIZONTAL,
    SIGNAL_HOUSING_VERTICAL, SPAWN_SPAN_HORIZONTAL, SPAWN_SPAN_VERTICAL, VEHICLE_APPROX_LENGTH,
    VEHICLE_BUFFER,
};
#[allow(unused_imports)]
pub use world::City;
pub use zone::Zone;
