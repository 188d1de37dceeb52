//! Plain Markdown rendering of a study. Meters are shown with two decimals,
//! degrees with one.

use std::fmt::{self, Display};

use chrono::{DateTime, TimeZone, Utc};

use crate::analysis::analyze;
use crate::angles::format_dms;
use crate::config::{ShadowStudy, StudyConfig};
use crate::error::Result;
use crate::types::{SeasonalAnalysis, ShadowLength};

pub fn format_meters(value: f64) -> String {
    format!("{:.2} m", value)
}

pub fn format_degrees(value: f64) -> String {
    format!("{:.1}°", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_shadow(shadow: &ShadowLength) -> String {
    match shadow.meters() {
        Some(m) => format_meters(m),
        None => "no finite shadow".to_string(),
    }
}

pub fn render_report<Tz>(
    study: &ShadowStudy,
    analysis: &SeasonalAnalysis,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Report {
        study,
        analysis,
        generated_at,
    }
    .to_string()
}

struct Report<'a, Tz: TimeZone> {
    study: &'a ShadowStudy,
    analysis: &'a SeasonalAnalysis,
    generated_at: &'a DateTime<Tz>,
}

impl<Tz> Display for Report<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.study, self.analysis, self.generated_at)
    }
}

fn write_report<Tz>(
    out: &mut fmt::Formatter<'_>,
    study: &ShadowStudy,
    analysis: &SeasonalAnalysis,
    generated_at: &DateTime<Tz>,
) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let geo = &study.geo;
    let obstacle = &study.obstacle;

    writeln!(out, "# Solar-noon shadow study")?;
    writeln!(out)?;
    if let Some(name) = &study.site_name {
        writeln!(out, "Site: {}", name)?;
    }
    writeln!(out, "Generated: {}", generated_at.format("%d/%m/%Y %H:%M %Z"))?;
    writeln!(out)?;

    writeln!(out, "## 1 - Input data")?;
    writeln!(out)?;
    writeln!(out, "| Parameter | Value |")?;
    writeln!(out, "|---|---|")?;
    writeln!(
        out,
        "| Coordinates | {}, {} ({:.6}°, {:.6}°) |",
        format_dms(geo.latitude(), true),
        format_dms(geo.longitude(), false),
        geo.latitude(),
        geo.longitude()
    )?;
    writeln!(out, "| Hemisphere | {:?} |", geo.hemisphere())?;
    writeln!(out, "| Obstacle height | {} |", format_meters(obstacle.height_m()))?;
    writeln!(out, "| Obstacle orientation | {} |", obstacle.orientation())?;
    writeln!(out, "| Shadow direction | {} |", obstacle.shadow_direction())?;
    writeln!(out)?;

    writeln!(out, "## 2 - Results")?;
    writeln!(out)?;
    writeln!(out, "Sun position taken at solar noon on each reference date.")?;
    writeln!(out)?;
    writeln!(out, "| Season | Reference date | Declination | Solar elevation | Shadow length |")?;
    writeln!(out, "|---|---|---|---|---|")?;
    for r in &analysis.results {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            r.event,
            r.date_label,
            format_degrees(r.declination_deg),
            format_degrees(r.elevation_deg),
            format_shadow(&r.shadow)
        )?;
    }
    writeln!(out)?;

    if analysis.all_below_horizon() {
        writeln!(
            out,
            "**Main result:** the sun stays at or below the horizon at solar noon \
             on all reference dates at this latitude; no finite shadow is cast."
        )?;
    } else if let (Some(longest), Some(shortest)) = (analysis.longest(), analysis.shortest()) {
        writeln!(
            out,
            "**Main result:** the longest shadow occurs on the {} ({}) with {}, \
             the shortest on the {} ({}) with {}.",
            longest.event,
            longest.date_label,
            format_shadow(&longest.shadow),
            shortest.event,
            shortest.date_label,
            format_shadow(&shortest.shadow)
        )?;
    }
    writeln!(out)?;

    let horizon: Vec<_> = analysis.results.iter().filter(|r| !r.shadow.is_finite()).collect();
    let opposite: Vec<_> = analysis
        .results
        .iter()
        .filter(|r| r.shadow.is_finite() && r.sun_side == Some(obstacle.shadow_direction()))
        .collect();
    if !horizon.is_empty() || !opposite.is_empty() {
        writeln!(out, "### Caveats")?;
        writeln!(out)?;
        for r in horizon {
            writeln!(
                out,
                "- {} ({}): sun at or below the horizon at solar noon, no finite shadow.",
                r.event, r.date_label
            )?;
        }
        for r in opposite {
            writeln!(
                out,
                "- {} ({}): the noon sun stands {} of the zenith, \
                 so the shadow falls away from the {} side.",
                r.event,
                r.date_label,
                obstacle.shadow_direction(),
                obstacle.shadow_direction()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## 3 - Seasonal variation")?;
    writeln!(out)?;
    writeln!(out, "| Season | Above shortest shadow |")?;
    writeln!(out, "|---|---|")?;
    for point in analysis.variation_series() {
        let value = point
            .percent_above_min
            .map_or_else(|| "n/a".to_string(), format_percent);
        writeln!(out, "| {} ({}) | {} |", point.label, point.date_label, value)?;
    }
    writeln!(out)?;
    let variation = analysis
        .percent_variation
        .map_or_else(|| "undefined".to_string(), format_percent);
    writeln!(out, "Variation between longest and shortest shadow: {}.", variation)?;
    writeln!(out)?;

    writeln!(out, "## 4 - Conclusion")?;
    writeln!(out)?;
    if let (Some(max), Some(min)) = (analysis.max_shadow_m, analysis.min_shadow_m) {
        writeln!(
            out,
            "- Seasonal difference between longest and shortest noon shadow: {}.",
            format_meters(max - min)
        )?;
        writeln!(
            out,
            "- Keep at least {} from the obstacle on the shaded side \
             to avoid noon shading all year.",
            format_meters(max)
        )?;
    } else {
        writeln!(
            out,
            "- No finite noon shadow on any reference date; no clearance figure applies."
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## 5 - Method")?;
    writeln!(out)?;
    writeln!(out, "- Declination: δ = 23.45° × sin(360° / 365 × (284 + n)), n = day of year")?;
    writeln!(out, "- Solar-noon elevation: α = 90° − |φ − δ|, φ = latitude")?;
    writeln!(out, "- Shadow length: L = H / tan(α), H = obstacle height")?;
    writeln!(out)?;

    writeln!(out, "## 6 - Assumptions")?;
    writeln!(out)?;
    writeln!(out, "- Flat, horizontal terrain and a rigid vertical obstacle.")?;
    writeln!(out, "- Sun position at true solar noon only.")?;
    writeln!(out, "- No atmospheric refraction, relief or neighbouring obstructions.")?;
    writeln!(out, "- Fixed reference dates without leap-year correction.")?;

    Ok(())
}

/// Runs the default study (21°44'21.3"S, 48°06'21.4"W, 1.65 m east-west wall)
/// and prints its report.
pub fn example_study() -> Result<SeasonalAnalysis> {
    let study = StudyConfig::default().build()?;
    let analysis = analyze(&study.geo, &study.obstacle);
    println!("{}", render_report(&study, &analysis, &Utc::now()));
    Ok(analysis)
}
