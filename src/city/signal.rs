//! Timed traffic signal unit
//!
//! Each signal cycles green -> yellow -> red on its own clock, offset by a
//! fraction of the cycle so paired approaches are not synchronized. Phase
//! changes are reported to the optional metrics sink and published through
//! the optional message sink.

use std::sync::Arc;

use serde_json::json;

use super::messaging::MessageSink;
use super::metrics::MetricsSink;
use super::types::{Orientation, Rect, SignalPhase};

/// Fraction of the cycle spent green.
const GREEN_RATIO: f32 = 0.45;

/// Fraction of the cycle spent yellow; red takes the remainder.
const YELLOW_RATIO: f32 = 0.10;

/// Everything needed to construct one signal head.
pub struct SignalParams {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub orientation: Orientation,
    /// Full repeat period, in ticks.
    pub cycle_time: u32,
    /// Starting position within the cycle, as a fraction of `cycle_time`.
    pub initial_offset_factor: f32,
    pub messaging: Option<Arc<dyn MessageSink>>,
    pub metrics: Option<Arc<dyn MetricsSink>>,
}

/// The capability a zone needs from a signal: advance it each tick and let
/// the renderer and driving loop read its state.
pub trait SignalUnit {
    fn id(&self) -> &str;
    fn rect(&self) -> Rect;
    fn orientation(&self) -> Orientation;
    fn phase(&self) -> SignalPhase;
    fn cycle_time(&self) -> u32;
    fn phase_offset(&self) -> f32;

    /// Progress one time step. Independent of every other signal.
    fn advance(&mut self);
}

/// Factory the placement planner instantiates signals through, so it has no
/// compile-time dependency on a concrete signal implementation.
pub type SignalFactory = dyn Fn(SignalParams) -> Box<dyn SignalUnit>;

fn phase_at(green_ticks: u32, yellow_ticks: u32, time_in_cycle: u32) -> SignalPhase {
    if time_in_cycle < green_ticks {
        SignalPhase::Green
    } else if time_in_cycle < green_ticks + yellow_ticks {
        SignalPhase::Yellow
    } else {
        SignalPhase::Red
    }
}

/// A concrete three-phase signal head
pub struct TrafficSignal {
    id: String,
    rect: Rect,
    orientation: Orientation,
    cycle_time: u32,
    phase_offset: f32,
    green_ticks: u32,
    yellow_ticks: u32,
    time_in_cycle: u32,
    ticks: u64,
    phase: SignalPhase,
    messaging: Option<Arc<dyn MessageSink>>,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl TrafficSignal {
    pub fn new(params: SignalParams) -> Self {
        let cycle_time = params.cycle_time.max(1); // Ensure a non-empty cycle
        let green_ticks = (GREEN_RATIO * cycle_time as f32) as u32;
        let yellow_ticks = (YELLOW_RATIO * cycle_time as f32) as u32;
        let time_in_cycle =
            (params.initial_offset_factor * cycle_time as f32) as u32 % cycle_time;

        let signal = Self {
            id: params.id,
            rect: Rect::new(params.x, params.y, params.width, params.height),
            orientation: params.orientation,
            cycle_time,
            phase_offset: params.initial_offset_factor,
            green_ticks,
            yellow_ticks,
            time_in_cycle,
            ticks: 0,
            phase: phase_at(green_ticks, yellow_ticks, time_in_cycle),
            messaging: params.messaging,
            metrics: params.metrics,
        };

        signal.publish_state();
        signal
    }

    /// Default factory: builds a boxed `TrafficSignal`.
    pub fn boxed(params: SignalParams) -> Box<dyn SignalUnit> {
        Box::new(TrafficSignal::new(params))
    }

    fn publish_state(&self) {
        let sink = match &self.messaging {
            Some(sink) => sink,
            None => return,
        };

        let payload = json!({
            "signal_id": self.id,
            "phase": self.phase.as_str(),
            "position": { "x": self.rect.x, "y": self.rect.y },
            "orientation": self.orientation.as_str(),
            "tick": self.ticks,
        });
        sink.publish(&format!("traffic.signal.state.{}", self.id), payload);
    }
}

impl SignalUnit for TrafficSignal {
    fn id(&self) -> &str {
        &self.id
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn phase(&self) -> SignalPhase {
        self.phase
    }

    fn cycle_time(&self) -> u32 {
        self.cycle_time
    }

    fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    fn advance(&mut self) {
        self.time_in_cycle = (self.time_in_cycle + 1) % self.cycle_time;
        self.ticks += 1;

        let next = phase_at(self.green_ticks, self.yellow_ticks, self.time_in_cycle);
        if next != self.phase {
            self.phase = next;
            if let Some(metrics) = &self.metrics {
                metrics.signal_changed(&self.id, next);
            }
            self.publish_state();
        }
    }
}
