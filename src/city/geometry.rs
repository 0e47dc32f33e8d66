//! Road and intersection derivation for a zone
//!
//! Pure functions over zone dimensions. Degenerate zones degrade to fewer
//! roads and no intersections; they never fail.

use log::warn;

use super::types::{Orientation, Rect, Road, ROAD_WIDTH};

/// Build the zone's roads: one horizontal road centered vertically and one
/// vertical road centered horizontally, both of `ROAD_WIDTH`.
///
/// A road is only built when the zone is wide/tall enough to contain it, so
/// a degenerate zone yields fewer than two roads and, downstream, no
/// intersections.
pub fn build_roads(width: f32, height: f32) -> Vec<Road> {
    let mut roads = Vec::new();

    if height >= ROAD_WIDTH {
        roads.push(Road {
            rect: Rect::new(0.0, height / 2.0 - ROAD_WIDTH / 2.0, width, ROAD_WIDTH),
            orientation: Orientation::Horizontal,
        });
    }

    if width >= ROAD_WIDTH {
        roads.push(Road {
            rect: Rect::new(width / 2.0 - ROAD_WIDTH / 2.0, 0.0, ROAD_WIDTH, height),
            orientation: Orientation::Vertical,
        });
    }

    roads
}

/// Find every overlap between a horizontal and a vertical road.
///
/// Overlaps are kept only when both clipped dimensions are strictly
/// positive. Fewer than two roads is reported and yields an empty list.
pub fn find_intersections(roads: &[Road]) -> Vec<Rect> {
    if roads.len() < 2 {
        warn!(
            "expected two roads but found {}; no intersections derived",
            roads.len()
        );
        return Vec::new();
    }

    let mut intersections = Vec::new();
    for h_road in roads
        .iter()
        .filter(|r| r.orientation == Orientation::Horizontal)
    {
        for v_road in roads
            .iter()
            .filter(|r| r.orientation == Orientation::Vertical)
        {
            let overlap = h_road.rect.intersection(&v_road.rect);
            if overlap.width > 0.0 && overlap.height > 0.0 {
                intersections.push(overlap);
            }
        }
    }

    intersections
}

/// First road with the given orientation, if any.
pub fn road_with_orientation(roads: &[Road], orientation: Orientation) -> Option<&Road> {
    roads.iter().find(|r| r.orientation == orientation)
}
