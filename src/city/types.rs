//! Core types for the zone traffic model
//!
//! These are standalone types that don't depend on any renderer.

/// Width of every road strip in local units.
///
/// This must match the road width baked into the static background art, or
/// signals and spawn points will not line up with the drawn roads.
pub const ROAD_WIDTH: f32 = 60.0;

/// Gap between a signal housing and the intersection edge it faces.
pub const SIGNAL_CLEARANCE: f32 = 20.0;

/// Housing size (width, height) for signals gating a vertical vehicle stream.
pub const SIGNAL_HOUSING_VERTICAL: (f32, f32) = (28.0, 36.0);

/// Housing size (width, height) for signals gating a horizontal vehicle stream.
pub const SIGNAL_HOUSING_HORIZONTAL: (f32, f32) = (36.0, 28.0);

/// Bounds for the randomized base cycle duration, in ticks.
pub const CYCLE_TIME_MIN: u32 = 200;
pub const CYCLE_TIME_MAX: u32 = 360;

/// Extra phase offset given to the second approach of each axis pair, as a
/// fraction of the cycle. Half a cycle models offset-coordinated timing
/// rather than perfectly synchronized pairs.
pub const PAIR_PHASE_OFFSET: f32 = 0.5;

/// Distance from the zone edge at which vehicles enter.
pub const VEHICLE_BUFFER: f32 = 15.0;

/// Approximate length of a vehicle, for spawner collaborators that need to
/// keep newly placed vehicles from overlapping.
pub const VEHICLE_APPROX_LENGTH: f32 = 25.0;

/// Lane-centering span for vehicles entering along the horizontal road.
pub const SPAWN_SPAN_HORIZONTAL: f32 = 40.0;

/// Lane-centering span for vehicles entering along the vertical road.
pub const SPAWN_SPAN_VERTICAL: f32 = 20.0;

/// An axis-aligned rectangle in the zone's local coordinate frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The overlap of two rectangles. A result with non-positive width or
    /// height means the rectangles do not overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Which way a road runs, and which vehicle stream a signal gates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Compass heading used for both travel directions and zone entry edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// Single-letter approach tag used in signal identifiers.
    pub fn approach_tag(&self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::South => "S",
            Heading::East => "E",
            Heading::West => "W",
        }
    }
}

/// Display state of a signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalPhase {
    Green,
    Yellow,
    Red,
}

impl SignalPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalPhase::Green => "green",
            SignalPhase::Yellow => "yellow",
            SignalPhase::Red => "red",
        }
    }
}

/// A straight strip of drivable surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub rect: Rect,
    pub orientation: Orientation,
}

/// A boundary location where new vehicles are introduced into a zone.
///
/// `direction` is the heading the vehicle travels when entering, so a point
/// on the east edge has direction `West`. Spawn points are recomputed on
/// every request and carry no cached state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
    pub direction: Heading,
    pub entry_edge: Heading,
}
