//! The per-zone aggregate
//!
//! Owns one rectangular region's road geometry, traffic signals, and derived
//! spawn points. All owned geometry lives in the zone's local frame (origin
//! at the zone's top-left); the global offset is only applied by consumers
//! compositing the full city view.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::config::ZoneBounds;
use super::geometry;
use super::messaging::MessageSink;
use super::metrics::MetricsSink;
use super::placement::{self, SignalSchedule};
use super::signal::{SignalFactory, SignalUnit};
use super::spawn;
use super::types::{Rect, Road, SpawnPoint, CYCLE_TIME_MAX, CYCLE_TIME_MIN};

/// One rectangular region of the simulated city
pub struct Zone {
    zone_id: String,
    width: f32,
    height: f32,
    global_offset_x: f32,
    global_offset_y: f32,
    roads: Vec<Road>,
    intersections: Vec<Rect>,
    signals: Vec<Box<dyn SignalUnit>>,
    messaging: Option<Arc<dyn MessageSink>>,
    metrics: Option<Arc<dyn MetricsSink>>,

    /// Optional seeded RNG for reproducible cycle draws
    rng: Option<StdRng>,
}

impl Zone {
    fn new_internal(
        zone_id: String,
        bounds: ZoneBounds,
        messaging: Option<Arc<dyn MessageSink>>,
        metrics: Option<Arc<dyn MetricsSink>>,
        rng: Option<StdRng>,
    ) -> Self {
        Self {
            zone_id,
            width: bounds.width,
            height: bounds.height,
            global_offset_x: bounds.x,
            global_offset_y: bounds.y,
            roads: Vec::new(),
            intersections: Vec::new(),
            signals: Vec::new(),
            messaging,
            metrics,
            rng,
        }
    }

    pub fn new(
        zone_id: impl Into<String>,
        bounds: ZoneBounds,
        messaging: Option<Arc<dyn MessageSink>>,
        metrics: Option<Arc<dyn MetricsSink>>,
    ) -> Self {
        Self::new_internal(zone_id.into(), bounds, messaging, metrics, None)
    }

    /// Create a zone with a seeded RNG so cycle draws are reproducible.
    pub fn new_with_seed(
        zone_id: impl Into<String>,
        bounds: ZoneBounds,
        messaging: Option<Arc<dyn MessageSink>>,
        metrics: Option<Arc<dyn MetricsSink>>,
        seed: u64,
    ) -> Self {
        Self::new_internal(
            zone_id.into(),
            bounds,
            messaging,
            metrics,
            Some(StdRng::seed_from_u64(seed)),
        )
    }

    /// Draw a base cycle duration, using the seeded RNG if available.
    fn random_cycle(&mut self) -> u32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(CYCLE_TIME_MIN..=CYCLE_TIME_MAX),
            None => rand::rng().random_range(CYCLE_TIME_MIN..=CYCLE_TIME_MAX),
        }
    }

    /// Build geometry and plant signals, replacing any prior state.
    ///
    /// Safe to call again on a reset; geometry is identical each time while
    /// the cycle durations are redrawn within their bounded range.
    pub fn initialize(&mut self, factory: &SignalFactory) {
        self.roads = geometry::build_roads(self.width, self.height);
        self.intersections = geometry::find_intersections(&self.roads);

        let schedule = SignalSchedule {
            east_west_cycle: self.random_cycle(),
            north_south_cycle: self.random_cycle(),
        };
        self.signals = placement::plan_signals(
            &self.zone_id,
            &self.roads,
            &self.intersections,
            schedule,
            factory,
            self.messaging.as_ref(),
            self.metrics.as_ref(),
        );
    }

    /// Advance every owned signal one time step.
    ///
    /// Signals are mutually independent; no ordering is guaranteed between
    /// them, only that all have advanced when this returns. A no-op with
    /// zero signals.
    pub fn advance_tick(&mut self) {
        for signal in &mut self.signals {
            signal.advance();
        }
    }

    /// Reserved extension point for dynamic overlays owned by the zone.
    ///
    /// Background, roads, and buildings come from an external static-image
    /// layer, and signals are drawn by the caller via the signal list, so
    /// there is currently nothing to draw here.
    pub fn draw(&self, _offset_x: f32, _offset_y: f32) {}

    /// Fresh spawn points for the zone's current geometry.
    pub fn spawn_points_local(&self) -> Vec<SpawnPoint> {
        spawn::spawn_points(self.width, self.height, &self.roads)
    }

    pub fn traffic_lights_local(&self) -> &[Box<dyn SignalUnit>] {
        &self.signals
    }

    pub fn traffic_lights_local_mut(&mut self) -> &mut [Box<dyn SignalUnit>] {
        &mut self.signals
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn intersections(&self) -> &[Rect] {
        &self.intersections
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Global position of the zone's local origin in the city frame.
    pub fn global_offset(&self) -> (f32, f32) {
        (self.global_offset_x, self.global_offset_y)
    }
}
