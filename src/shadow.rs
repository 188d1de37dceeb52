use crate::angles::deg_to_rad;
use crate::error::{Result, ShadowError};
use crate::types::{CompassDirection, Obstacle, ObstacleOrientation, ShadowLength, ShadowOffset};

/// Horizontal length of the shadow cast by a vertical obstacle.
///
/// A sun at or below the horizon gives `NoFiniteShadow` without dividing; a
/// sun at the zenith gives exactly zero.
pub fn shadow_length(height_m: f64, elevation_deg: f64) -> ShadowLength {
    if elevation_deg <= 0.0 {
        ShadowLength::NoFiniteShadow
    } else if elevation_deg >= 90.0 {
        ShadowLength::Finite(0.0)
    } else {
        ShadowLength::Finite(height_m / deg_to_rad(elevation_deg).tan())
    }
}

/// Splits a shadow length into a map-frame offset (+x east, +y south) along
/// the axis perpendicular to the obstacle.
pub fn shadow_endpoint_offset(
    length_m: f64,
    orientation: ObstacleOrientation,
    direction: CompassDirection,
) -> Result<ShadowOffset> {
    if !orientation.is_perpendicular_to(direction) {
        return Err(ShadowError::NotPerpendicular {
            orientation,
            direction,
        });
    }
    Ok(project(length_m, direction))
}

/// Endpoint offset for an already validated obstacle.
pub fn obstacle_shadow_offset(length_m: f64, obstacle: &Obstacle) -> ShadowOffset {
    project(length_m, obstacle.shadow_direction())
}

fn project(length_m: f64, direction: CompassDirection) -> ShadowOffset {
    match direction {
        CompassDirection::South => ShadowOffset { dx: 0.0, dy: length_m },
        CompassDirection::North => ShadowOffset { dx: 0.0, dy: -length_m },
        CompassDirection::East => ShadowOffset { dx: length_m, dy: 0.0 },
        CompassDirection::West => ShadowOffset { dx: -length_m, dy: 0.0 },
    }
}
