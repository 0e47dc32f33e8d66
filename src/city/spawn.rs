//! Spawn point calculation
//!
//! Derives the four edge entry points a vehicle spawner consumes. Opposite
//! entry directions use opposite lane halves of the same road, so vehicles
//! never spawn into oncoming traffic.

use log::warn;

use super::geometry::road_with_orientation;
use super::types::{
    Heading, Orientation, Road, SpawnPoint, ROAD_WIDTH, SPAWN_SPAN_HORIZONTAL,
    SPAWN_SPAN_VERTICAL, VEHICLE_BUFFER,
};

/// Compute the zone's four edge spawn points.
///
/// Cheap enough to recompute on every call; nothing is cached. Requires one
/// road of each orientation, otherwise reports and returns an empty list.
pub fn spawn_points(width: f32, height: f32, roads: &[Road]) -> Vec<SpawnPoint> {
    let (h_road, v_road) = match (
        road_with_orientation(roads, Orientation::Horizontal),
        road_with_orientation(roads, Orientation::Vertical),
    ) {
        (Some(h), Some(v)) => (h, v),
        _ => {
            warn!("missing horizontal or vertical road, no spawn points derived");
            return Vec::new();
        }
    };

    vec![
        // East edge, travelling west on the near lane.
        SpawnPoint {
            x: width - VEHICLE_BUFFER,
            y: h_road.rect.y + ROAD_WIDTH / 2.0 - SPAWN_SPAN_HORIZONTAL / 2.0,
            direction: Heading::West,
            entry_edge: Heading::East,
        },
        // West edge, travelling east on the opposite lane.
        SpawnPoint {
            x: VEHICLE_BUFFER,
            y: h_road.rect.y + ROAD_WIDTH - SPAWN_SPAN_HORIZONTAL / 2.0,
            direction: Heading::East,
            entry_edge: Heading::West,
        },
        // South edge, travelling north.
        SpawnPoint {
            x: v_road.rect.x + ROAD_WIDTH / 2.0 - SPAWN_SPAN_VERTICAL / 2.0,
            y: height - VEHICLE_BUFFER,
            direction: Heading::North,
            entry_edge: Heading::South,
        },
        // North edge, travelling south on the opposite lane.
        SpawnPoint {
            x: v_road.rect.x + ROAD_WIDTH - SPAWN_SPAN_VERTICAL / 2.0,
            y: VEHICLE_BUFFER,
            direction: Heading::South,
            entry_edge: Heading::North,
        },
    ]
}
