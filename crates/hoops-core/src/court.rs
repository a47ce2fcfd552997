//! Court configuration.
//!
//! A parametric, JSON-described half court: boundary, markings, hoop,
//! backboard, and the start spot players shoot from. Purely geometry;
//! there is no physics behind it.

use serde::{Deserialize, Serialize};

/// Geometric primitive used by court elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CourtShape {
    Line {
        start: [f32; 2],
        end: [f32; 2],
    },
    Circle {
        center: [f32; 2],
        radius: f32,
    },
    Rect {
        center: [f32; 2],
        size: [f32; 2],
    },
    /// Circular arc; angles in degrees, counterclockwise from +x.
    Arc {
        center: [f32; 2],
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
}

impl CourtShape {
    /// Representative center point of the shape.
    pub fn center(&self) -> [f32; 2] {
        match self {
            Self::Line { start, end } => [
                f32::midpoint(start[0], end[0]),
                f32::midpoint(start[1], end[1]),
            ],
            Self::Circle { center, .. }
            | Self::Rect { center, .. }
            | Self::Arc { center, .. } => *center,
        }
    }
}

/// What a court element is for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    /// Outer bounds of the playing surface.
    Boundary,
    /// Painted floor markings (key, arcs, lines).
    Marking,
    Hoop,
    Backboard,
    /// Where the active player stands between moves.
    StartSpot,
}

/// One element of the court layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: ElementRole,
    pub shape: CourtShape,
}

/// Court metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtMeta {
    pub name: String,
}

/// Complete court configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtConfig {
    pub meta: CourtMeta,
    /// Width and length of the court in meters.
    pub size: [f32; 2],
    pub elements: Vec<CourtElement>,
}

impl CourtConfig {
    /// Loads a court configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the court configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The default half court.
    /// Loaded from courts/halfcourt.json at compile time.
    pub fn default_halfcourt() -> Self {
        const COURT_JSON: &str = include_str!("../courts/halfcourt.json");
        Self::from_json(COURT_JSON).expect("Failed to parse default court JSON")
    }

    fn first_center(&self, role: ElementRole) -> Option<[f32; 2]> {
        self.elements
            .iter()
            .find(|e| e.role == role)
            .map(|e| e.shape.center())
    }

    /// Center of the hoop; ball flights land here.
    pub fn hoop_center(&self) -> Option<[f32; 2]> {
        self.first_center(ElementRole::Hoop)
    }

    /// Where the active player stands when a turn begins.
    pub fn start_spot(&self) -> Option<[f32; 2]> {
        self.first_center(ElementRole::StartSpot)
    }
}
