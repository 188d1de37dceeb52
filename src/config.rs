use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angles::dms_to_decimal;
use crate::error::{Result, ShadowError};
use crate::types::{CompassDirection, GeoPoint, Obstacle, ObstacleOrientation};

/// A coordinate given either as signed decimal degrees or as degrees,
/// minutes and seconds with a compass letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Decimal(f64),
    Dms {
        degrees: f64,
        #[serde(default)]
        minutes: f64,
        #[serde(default)]
        seconds: f64,
        direction: CompassDirection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn accepts(self, direction: CompassDirection) -> bool {
        use CompassDirection::*;
        match self {
            Self::Latitude => matches!(direction, North | South),
            Self::Longitude => matches!(direction, East | West),
        }
    }
}

impl Coordinate {
    /// Signed decimal degrees. A DMS value must carry a letter of its own
    /// axis and minutes/seconds within `[0, 60)`.
    pub fn to_decimal(self, axis: Axis) -> Result<f64> {
        match self {
            Self::Decimal(value) => Ok(value),
            Self::Dms {
                degrees,
                minutes,
                seconds,
                direction,
            } => {
                if !axis.accepts(direction) {
                    return Err(ShadowError::Config(format!(
                        "{:?} cannot be given with direction {}",
                        axis, direction
                    )));
                }
                for (name, value) in [("minutes", minutes), ("seconds", seconds)] {
                    if !(0.0..60.0).contains(&value) {
                        return Err(ShadowError::Config(format!(
                            "{:?} {} must be within [0, 60), got {}",
                            axis, name, value
                        )));
                    }
                }
                Ok(dms_to_decimal(degrees, minutes, seconds, direction))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub site_name: Option<String>,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub obstacle_height_m: f64,
    pub orientation: ObstacleOrientation,
    pub shadow_direction: CompassDirection,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            site_name: None,
            latitude: Coordinate::Dms {
                degrees: 21.0,
                minutes: 44.0,
                seconds: 21.3,
                direction: CompassDirection::South,
            },
            longitude: Coordinate::Dms {
                degrees: 48.0,
                minutes: 6.0,
                seconds: 21.4,
                direction: CompassDirection::West,
            },
            obstacle_height_m: 1.65,
            orientation: ObstacleOrientation::EastWest,
            shadow_direction: CompassDirection::South,
        }
    }
}

impl FromStr for StudyConfig {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl StudyConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading study configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Validates the inputs. Fails before any geometry is computed.
    pub fn build(&self) -> Result<ShadowStudy> {
        let geo = GeoPoint::new(
            self.latitude.to_decimal(Axis::Latitude)?,
            self.longitude.to_decimal(Axis::Longitude)?,
        )?;
        let obstacle =
            Obstacle::new(self.obstacle_height_m, self.orientation, self.shadow_direction)?;
        debug!(
            latitude = geo.latitude(),
            longitude = geo.longitude(),
            height_m = obstacle.height_m(),
            "study configuration validated"
        );
        Ok(ShadowStudy {
            site_name: self.site_name.clone(),
            geo,
            obstacle,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowStudy {
    pub site_name: Option<String>,
    pub geo: GeoPoint,
    pub obstacle: Obstacle,
}
