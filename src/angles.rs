use crate::types::CompassDirection;

pub const EARTH_AXIAL_TILT: f64 = 23.45;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Cooper's approximation, in degrees.
pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

/// Sun elevation when the hour angle is zero. Never negative: a sun at or
/// below the horizon reports 0.
pub fn elevation_at_solar_noon(latitude: f64, declination: f64) -> f64 {
    (90.0 - (latitude - declination).abs()).max(0.0)
}

/// Which side of the zenith the sun culminates on.
pub fn noon_sun_side(latitude: f64, declination: f64) -> Option<CompassDirection> {
    if declination < latitude {
        Some(CompassDirection::South)
    } else if declination > latitude {
        Some(CompassDirection::North)
    } else {
        None
    }
}

/// Degrees/minutes/seconds to signed decimal degrees. South and west are negative.
pub fn dms_to_decimal(
    degrees: f64,
    minutes: f64,
    seconds: f64,
    direction: CompassDirection,
) -> f64 {
    let decimal = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    match direction {
        CompassDirection::South | CompassDirection::West => -decimal,
        CompassDirection::North | CompassDirection::East => decimal,
    }
}

/// Unsigned (degrees, minutes, seconds) of a decimal angle.
pub fn decimal_to_dms(value: f64) -> (u32, u32, f64) {
    let abs = value.abs();
    let mut degrees = abs.trunc() as u32;
    let minutes_f = (abs - degrees as f64) * 60.0;
    let mut minutes = minutes_f.trunc() as u32;
    let mut seconds = (minutes_f - minutes as f64) * 60.0;
    // 59.99995" would print as 60.0"
    if (seconds * 10.0).round() >= 600.0 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        degrees += 1;
    }
    (degrees, minutes, seconds)
}

/// Formats a latitude (`is_latitude`) or longitude as `21°44'21.3"S`.
pub fn format_dms(value: f64, is_latitude: bool) -> String {
    let (d, m, s) = decimal_to_dms(value);
    let suffix = match (is_latitude, value < 0.0) {
        (true, false) => 'N',
        (true, true) => 'S',
        (false, false) => 'E',
        (false, true) => 'W',
    };
    format!("{}°{:02}'{:04.1}\"{}", d, m, s, suffix)
}
