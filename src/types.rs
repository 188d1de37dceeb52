use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShadowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassDirection {
    #[serde(alias = "N", alias = "North")]
    North,
    #[serde(alias = "S", alias = "South")]
    South,
    #[serde(alias = "E", alias = "East")]
    East,
    #[serde(alias = "W", alias = "West")]
    West,
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// Axis along which a wall-like obstacle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleOrientation {
    EastWest,
    NorthSouth,
}

impl ObstacleOrientation {
    /// The two sides an obstacle with this orientation can shade.
    pub fn shaded_sides(self) -> [CompassDirection; 2] {
        match self {
            Self::EastWest => [CompassDirection::North, CompassDirection::South],
            Self::NorthSouth => [CompassDirection::East, CompassDirection::West],
        }
    }

    pub fn is_perpendicular_to(self, direction: CompassDirection) -> bool {
        self.shaded_sides().contains(&direction)
    }
}

impl fmt::Display for ObstacleOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EastWest => f.write_str("East-West"),
            Self::NorthSouth => f.write_str("North-South"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Latitude 0 counts as northern.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Self::Southern
        } else {
            Self::Northern
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            Self::Northern => 1,
            Self::Southern => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalEvent {
    SummerSolstice,
    WinterSolstice,
    SpringEquinox,
    AutumnEquinox,
}

impl SeasonalEvent {
    /// Order used for every table row and chart axis.
    pub const ALL: [SeasonalEvent; 4] = [
        SeasonalEvent::SummerSolstice,
        SeasonalEvent::AutumnEquinox,
        SeasonalEvent::WinterSolstice,
        SeasonalEvent::SpringEquinox,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SummerSolstice => "Summer solstice",
            Self::WinterSolstice => "Winter solstice",
            Self::SpringEquinox => "Spring equinox",
            Self::AutumnEquinox => "Autumn equinox",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::SummerSolstice => "summer_solstice",
            Self::WinterSolstice => "winter_solstice",
            Self::SpringEquinox => "spring_equinox",
            Self::AutumnEquinox => "autumn_equinox",
        }
    }
}

impl fmt::Display for SeasonalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated site on the globe, in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ShadowError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ShadowError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_latitude(self.latitude)
    }
}

/// A vertical, wall-like obstacle and the side it is expected to shade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    height_m: f64,
    orientation: ObstacleOrientation,
    shadow_direction: CompassDirection,
}

impl Obstacle {
    pub fn new(
        height_m: f64,
        orientation: ObstacleOrientation,
        shadow_direction: CompassDirection,
    ) -> Result<Self> {
        if !height_m.is_finite() || height_m <= 0.0 {
            return Err(ShadowError::InvalidHeight { value: height_m });
        }
        if !orientation.is_perpendicular_to(shadow_direction) {
            return Err(ShadowError::NotPerpendicular {
                orientation,
                direction: shadow_direction,
            });
        }
        Ok(Self {
            height_m,
            orientation,
            shadow_direction,
        })
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn orientation(&self) -> ObstacleOrientation {
        self.orientation
    }

    pub fn shadow_direction(&self) -> CompassDirection {
        self.shadow_direction
    }
}

/// Shadow length at solar noon. `NoFiniteShadow` marks a sun at or below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "length_m", rename_all = "snake_case")]
pub enum ShadowLength {
    Finite(f64),
    NoFiniteShadow,
}

impl ShadowLength {
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    pub fn meters(&self) -> Option<f64> {
        match *self {
            Self::Finite(m) => Some(m),
            Self::NoFiniteShadow => None,
        }
    }
}

/// Planar offset of the shadow tip from the obstacle base.
/// Map frame: +x points east, +y points south.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowOffset {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarGeometryResult {
    pub event: SeasonalEvent,
    pub day_of_year: i32,
    pub date_label: String,
    pub declination_deg: f64,
    pub elevation_deg: f64,
    pub shadow: ShadowLength,
    pub endpoint: Option<ShadowOffset>,
    /// Side of the zenith the sun culminates on; `None` when overhead.
    pub sun_side: Option<CompassDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalAnalysis {
    pub hemisphere: Hemisphere,
    pub obstacle_height_m: f64,
    pub results: Vec<SolarGeometryResult>,
    pub max_shadow_m: Option<f64>,
    pub min_shadow_m: Option<f64>,
    pub percent_variation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub date_labels: Vec<String>,
    pub obstacle_heights_m: Vec<f64>,
    pub shadow_lengths_m: Vec<Option<f64>>,
    /// Noon elevation per season, for the elevation bar view.
    pub elevations_deg: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchematicEntry {
    pub label: String,
    pub date_label: String,
    pub elevation_deg: f64,
    pub shadow_length_m: Option<f64>,
    pub endpoint: Option<ShadowOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarPoint {
    pub label: String,
    pub date_label: String,
    pub angle_deg: f64,
    pub radius_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariationPoint {
    pub label: String,
    pub date_label: String,
    pub percent_above_min: Option<f64>,
}

/// Everything the charting side needs, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub bar: BarSeries,
    pub schematic: Vec<SchematicEntry>,
    pub polar: Vec<PolarPoint>,
    pub variation: Vec<VariationPoint>,
    pub percent_variation: Option<f64>,
}
