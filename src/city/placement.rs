//! Signal placement planner
//!
//! Plants the four approach signals around a zone's intersection. Each
//! signal head is centered on the lane of the approach it gates: east and
//! west sit on opposite halves of the horizontal road, north and south on
//! opposite halves of the vertical road.

use std::sync::Arc;

use log::warn;

use super::geometry::road_with_orientation;
use super::messaging::MessageSink;
use super::metrics::MetricsSink;
use super::signal::{SignalFactory, SignalParams, SignalUnit};
use super::types::{
    Heading, Orientation, Rect, Road, PAIR_PHASE_OFFSET, SIGNAL_CLEARANCE,
    SIGNAL_HOUSING_HORIZONTAL, SIGNAL_HOUSING_VERTICAL,
};

/// Base cycle duration for each approach axis, in ticks. Drawn once per
/// zone initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalSchedule {
    pub east_west_cycle: u32,
    pub north_south_cycle: u32,
}

/// Instantiate and position the four approach signals for the zone's
/// intersection.
///
/// Returns an empty list (after reporting) when no intersection or road of
/// either orientation exists; a zone without signals keeps running.
pub fn plan_signals(
    zone_id: &str,
    roads: &[Road],
    intersections: &[Rect],
    schedule: SignalSchedule,
    factory: &SignalFactory,
    messaging: Option<&Arc<dyn MessageSink>>,
    metrics: Option<&Arc<dyn MetricsSink>>,
) -> Vec<Box<dyn SignalUnit>> {
    let intersection = match intersections.first() {
        Some(rect) => rect,
        None => {
            warn!("[{}] no intersection, skipping signal placement", zone_id);
            return Vec::new();
        }
    };

    let (h_road, v_road) = match (
        road_with_orientation(roads, Orientation::Horizontal),
        road_with_orientation(roads, Orientation::Vertical),
    ) {
        (Some(h), Some(v)) => (h, v),
        _ => {
            warn!(
                "[{}] missing a road orientation, skipping signal placement",
                zone_id
            );
            return Vec::new();
        }
    };

    let lane = h_road.rect.height / 2.0;
    let (v_width, v_height) = SIGNAL_HOUSING_VERTICAL;
    let (h_width, h_height) = SIGNAL_HOUSING_HORIZONTAL;

    let mut signals = Vec::with_capacity(4);

    // East: near lane of the horizontal road, housing past the right edge.
    signals.push(factory(SignalParams {
        id: signal_id(zone_id, Heading::East),
        x: intersection.right() + SIGNAL_CLEARANCE,
        y: h_road.rect.y + lane / 2.0 - v_height / 2.0,
        width: v_width,
        height: v_height,
        orientation: Orientation::Vertical,
        cycle_time: schedule.east_west_cycle,
        initial_offset_factor: 0.0,
        messaging: messaging.cloned(),
        metrics: metrics.cloned(),
    }));

    // West: opposite lane, measured up from the road bottom.
    signals.push(factory(SignalParams {
        id: signal_id(zone_id, Heading::West),
        x: intersection.x - SIGNAL_CLEARANCE - v_width,
        y: h_road.rect.bottom() - lane / 2.0 - v_height / 2.0,
        width: v_width,
        height: v_height,
        orientation: Orientation::Vertical,
        cycle_time: schedule.east_west_cycle,
        initial_offset_factor: PAIR_PHASE_OFFSET,
        messaging: messaging.cloned(),
        metrics: metrics.cloned(),
    }));

    // North: far lane of the vertical road, housing above the top edge.
    signals.push(factory(SignalParams {
        id: signal_id(zone_id, Heading::North),
        x: v_road.rect.right() - lane / 2.0 - h_width / 2.0,
        y: intersection.y - SIGNAL_CLEARANCE - h_height,
        width: h_width,
        height: h_height,
        orientation: Orientation::Horizontal,
        cycle_time: schedule.north_south_cycle,
        initial_offset_factor: 0.0,
        messaging: messaging.cloned(),
        metrics: metrics.cloned(),
    }));

    // South: opposite lane, housing below the bottom edge.
    signals.push(factory(SignalParams {
        id: signal_id(zone_id, Heading::South),
        x: v_road.rect.x + lane / 2.0 - h_width / 2.0,
        y: intersection.bottom() + SIGNAL_CLEARANCE,
        width: h_width,
        height: h_height,
        orientation: Orientation::Horizontal,
        cycle_time: schedule.north_south_cycle,
        initial_offset_factor: PAIR_PHASE_OFFSET,
        messaging: messaging.cloned(),
        metrics: metrics.cloned(),
    }));

    signals
}

fn signal_id(zone_id: &str, approach: Heading) -> String {
    format!("{}_tl0_{}", zone_id, approach.approach_tag())
}
