use noon_shadow::angles::*;
use noon_shadow::types::CompassDirection;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── SolarDeclination ──

#[test]
fn test_solar_declination_solstices_equinoxes() {
    assert_approx!(solar_declination(172), 23.45, 0.5);
    assert_approx!(solar_declination(355), -23.45, 0.5);
    assert_approx!(solar_declination(79), 0.0, 1.0);
    assert_approx!(solar_declination(266), 0.0, 1.5);
}

#[test]
fn test_solar_declination_bounded_all_days() {
    for n in 1..=365 {
        let decl = solar_declination(n);
        assert!(
            decl >= -EARTH_AXIAL_TILT && decl <= EARTH_AXIAL_TILT,
            "Day {}: {}",
            n, decl
        );
    }
}

#[test]
fn test_solar_declination_sign_by_half_year() {
    assert!(solar_declination(172) > 0.0);
    assert!(solar_declination(355) < 0.0);
}

// ── ElevationAtSolarNoon ──

#[test]
fn test_elevation_high_latitude_winter() {
    assert_approx!(elevation_at_solar_noon(60.0, -23.45), 6.55, 1e-9);
}

#[test]
fn test_elevation_equator_equinox_overhead() {
    assert_eq!(elevation_at_solar_noon(0.0, 0.0), 90.0);
}

#[test]
fn test_elevation_clamped_at_horizon() {
    assert_eq!(elevation_at_solar_noon(90.0, -23.45), 0.0);
    assert_eq!(elevation_at_solar_noon(-90.0, 23.45), 0.0);
    assert_eq!(elevation_at_solar_noon(80.0, -23.45), 0.0);
}

#[test]
fn test_elevation_hemisphere_symmetry() {
    for lat in [-90.0, -66.5, -45.0, -21.739, -5.0, 0.0, 12.0, 39.8, 60.0, 89.0] {
        for decl in [-23.45, -10.0, -0.8, 0.0, 5.5, 23.45] {
            assert_approx!(
                elevation_at_solar_noon(lat, decl),
                elevation_at_solar_noon(-lat, -decl),
                1e-12
            );
        }
    }
}

#[test]
fn test_elevation_in_range() {
    for lat in (-90..=90).step_by(5) {
        for n in (1..=365).step_by(7) {
            let e = elevation_at_solar_noon(lat as f64, solar_declination(n));
            assert!((0.0..=90.0).contains(&e), "lat={} day={} elevation={}", lat, n, e);
        }
    }
}

// ── NoonSunSide ──

#[test]
fn test_noon_sun_side() {
    assert_eq!(noon_sun_side(39.8, 0.0), Some(CompassDirection::South));
    assert_eq!(noon_sun_side(-21.739, 23.45), Some(CompassDirection::North));
    assert_eq!(noon_sun_side(-21.739, -23.45), Some(CompassDirection::South));
    assert_eq!(noon_sun_side(10.0, 10.0), None);
}

// ── DMS ──

#[test]
fn test_dms_to_decimal_signs() {
    assert_approx!(dms_to_decimal(21.0, 44.0, 21.3, CompassDirection::South), -21.739250, 1e-6);
    assert_approx!(dms_to_decimal(48.0, 6.0, 21.4, CompassDirection::West), -48.105944, 1e-6);
    assert_approx!(dms_to_decimal(39.0, 48.0, 0.0, CompassDirection::North), 39.8, 1e-9);
    assert_approx!(dms_to_decimal(151.0, 12.0, 0.0, CompassDirection::East), 151.2, 1e-9);
}

#[test]
fn test_decimal_to_dms_known_value() {
    let (d, m, s) = decimal_to_dms(-21.739250);
    assert_eq!((d, m), (21, 44));
    assert_approx!(s, 21.3, 1e-6);
}

#[test]
fn test_decimal_to_dms_carries_rounded_seconds() {
    let (d, m, s) = decimal_to_dms(10.999999);
    assert_eq!((d, m), (11, 0));
    assert_approx!(s, 0.0, 1e-9);
}

#[test]
fn test_format_dms() {
    let lat = dms_to_decimal(21.0, 44.0, 21.3, CompassDirection::South);
    let lon = dms_to_decimal(48.0, 6.0, 21.4, CompassDirection::West);
    assert_eq!(format_dms(lat, true), "21°44'21.3\"S");
    assert_eq!(format_dms(lon, false), "48°06'21.4\"W");
    assert_eq!(format_dms(39.8, true), "39°48'00.0\"N");
}

// ── DegRad ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, -45.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}
