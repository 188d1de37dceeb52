pub mod analysis;
pub mod angles;
pub mod calendar;
pub mod config;
pub mod error;
pub mod report;
pub mod shadow;
pub mod types;

pub use analysis::{analyze, seasonal_variation, solar_geometry};

pub use angles::{
    decimal_to_dms, deg_to_rad, dms_to_decimal, elevation_at_solar_noon, format_dms,
    noon_sun_side, rad_to_deg, solar_declination, EARTH_AXIAL_TILT,
};

pub use calendar::{
    date_label, reference_date, resolve, resolve_tag, DECEMBER_SOLSTICE_DOY, JUNE_SOLSTICE_DOY,
    MARCH_EQUINOX_DOY, REFERENCE_YEAR, SEPTEMBER_EQUINOX_DOY,
};

pub use config::{Axis, Coordinate, ShadowStudy, StudyConfig};

pub use error::{Result, ShadowError};

pub use report::{
    example_study, format_degrees, format_meters, format_percent, format_shadow, render_report,
};

pub use shadow::{obstacle_shadow_offset, shadow_endpoint_offset, shadow_length};

pub use types::{
    BarSeries, ChartData, CompassDirection, GeoPoint, Hemisphere, Obstacle, ObstacleOrientation,
    PolarPoint, SchematicEntry, SeasonalAnalysis, SeasonalEvent, ShadowLength, ShadowOffset,
    SolarGeometryResult, VariationPoint,
};
