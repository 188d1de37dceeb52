//! Runs the per-date geometry over the four reference events and derives the
//! aggregates and chart series from it.

use tracing::{debug, instrument, warn};

use crate::angles::{elevation_at_solar_noon, noon_sun_side, solar_declination};
use crate::calendar::{date_label, resolve};
use crate::error::Result;
use crate::shadow::{obstacle_shadow_offset, shadow_length};
use crate::types::{
    BarSeries, ChartData, GeoPoint, Obstacle, PolarPoint, SchematicEntry, SeasonalAnalysis,
    SeasonalEvent, SolarGeometryResult, VariationPoint,
};

pub fn solar_geometry(
    event: SeasonalEvent,
    geo: &GeoPoint,
    obstacle: &Obstacle,
) -> SolarGeometryResult {
    let n = resolve(event, geo.hemisphere());
    let decl = solar_declination(n);
    let elevation = elevation_at_solar_noon(geo.latitude(), decl);
    let shadow = shadow_length(obstacle.height_m(), elevation);
    let endpoint = shadow.meters().map(|len| obstacle_shadow_offset(len, obstacle));

    debug!(
        event = event.tag(),
        day_of_year = n,
        declination = decl,
        elevation,
        "solar noon geometry"
    );
    if !shadow.is_finite() {
        warn!(
            event = event.tag(),
            day_of_year = n,
            "sun at or below the horizon at solar noon"
        );
    }

    SolarGeometryResult {
        event,
        day_of_year: n,
        date_label: date_label(n),
        declination_deg: decl,
        elevation_deg: elevation,
        shadow,
        endpoint,
        sun_side: noon_sun_side(geo.latitude(), decl),
    }
}

#[instrument(
    skip_all,
    fields(
        latitude = geo.latitude(),
        longitude = geo.longitude(),
        height_m = obstacle.height_m()
    )
)]
pub fn analyze(geo: &GeoPoint, obstacle: &Obstacle) -> SeasonalAnalysis {
    let results: Vec<SolarGeometryResult> = SeasonalEvent::ALL
        .iter()
        .map(|&event| solar_geometry(event, geo, obstacle))
        .collect();

    let finite: Vec<f64> = results.iter().filter_map(|r| r.shadow.meters()).collect();
    let max_shadow_m = finite.iter().copied().reduce(f64::max);
    let min_shadow_m = finite.iter().copied().reduce(f64::min);
    let percent_variation = seasonal_variation(max_shadow_m, min_shadow_m);

    debug!(?max_shadow_m, ?min_shadow_m, ?percent_variation, "seasonal aggregates");

    SeasonalAnalysis {
        hemisphere: geo.hemisphere(),
        obstacle_height_m: obstacle.height_m(),
        results,
        max_shadow_m,
        min_shadow_m,
        percent_variation,
    }
}

/// `(max - min) / min * 100`, undefined unless both exist and `min > 0`.
pub fn seasonal_variation(max_shadow_m: Option<f64>, min_shadow_m: Option<f64>) -> Option<f64> {
    match (max_shadow_m, min_shadow_m) {
        (Some(max), Some(min)) if min > 0.0 => Some((max - min) / min * 100.0),
        _ => None,
    }
}

impl SeasonalAnalysis {
    pub fn result_for(&self, event: SeasonalEvent) -> Option<&SolarGeometryResult> {
        self.results.iter().find(|r| r.event == event)
    }

    pub fn all_below_horizon(&self) -> bool {
        self.results.iter().all(|r| !r.shadow.is_finite())
    }

    pub fn any_below_horizon(&self) -> bool {
        self.results.iter().any(|r| !r.shadow.is_finite())
    }

    /// Result with the longest finite shadow. Ties keep the earlier season.
    pub fn longest(&self) -> Option<&SolarGeometryResult> {
        self.results
            .iter()
            .filter(|r| r.shadow.is_finite())
            .fold(None, |best: Option<&SolarGeometryResult>, r| match best {
                Some(b) if b.shadow.meters() >= r.shadow.meters() => Some(b),
                _ => Some(r),
            })
    }

    /// Result with the shortest finite shadow. Ties keep the earlier season.
    pub fn shortest(&self) -> Option<&SolarGeometryResult> {
        self.results
            .iter()
            .filter(|r| r.shadow.is_finite())
            .fold(None, |best: Option<&SolarGeometryResult>, r| match best {
                Some(b) if b.shadow.meters() <= r.shadow.meters() => Some(b),
                _ => Some(r),
            })
    }

    pub fn bar_series(&self) -> BarSeries {
        BarSeries {
            labels: self.results.iter().map(|r| r.event.label().to_string()).collect(),
            date_labels: self.results.iter().map(|r| r.date_label.clone()).collect(),
            obstacle_heights_m: vec![self.obstacle_height_m; self.results.len()],
            shadow_lengths_m: self.results.iter().map(|r| r.shadow.meters()).collect(),
            elevations_deg: self.results.iter().map(|r| r.elevation_deg).collect(),
        }
    }

    pub fn schematic_series(&self) -> Vec<SchematicEntry> {
        self.results
            .iter()
            .map(|r| SchematicEntry {
                label: r.event.label().to_string(),
                date_label: r.date_label.clone(),
                elevation_deg: r.elevation_deg,
                shadow_length_m: r.shadow.meters(),
                endpoint: r.endpoint,
            })
            .collect()
    }

    pub fn polar_series(&self) -> Vec<PolarPoint> {
        self.results
            .iter()
            .map(|r| PolarPoint {
                label: r.event.label().to_string(),
                date_label: r.date_label.clone(),
                angle_deg: r.elevation_deg,
                radius_m: r.shadow.meters(),
            })
            .collect()
    }

    /// How far each season's shadow exceeds the shortest one, in percent.
    pub fn variation_series(&self) -> Vec<VariationPoint> {
        let min = self.min_shadow_m.filter(|&m| m > 0.0);
        self.results
            .iter()
            .map(|r| VariationPoint {
                label: r.event.label().to_string(),
                date_label: r.date_label.clone(),
                percent_above_min: match (r.shadow.meters(), min) {
                    (Some(len), Some(min)) => Some((len - min) / min * 100.0),
                    _ => None,
                },
            })
            .collect()
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData {
            bar: self.bar_series(),
            schematic: self.schematic_series(),
            polar: self.polar_series(),
            variation: self.variation_series(),
            percent_variation: self.percent_variation,
        }
    }
}

impl ChartData {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
