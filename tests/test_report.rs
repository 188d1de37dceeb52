use chrono::{TimeZone, Utc};
use chrono_tz::America::Sao_Paulo;

use noon_shadow::analysis::analyze;
use noon_shadow::config::{ShadowStudy, StudyConfig};
use noon_shadow::report::*;
use noon_shadow::types::*;

fn default_study() -> (ShadowStudy, SeasonalAnalysis) {
    let study = StudyConfig::default().build().unwrap();
    let analysis = analyze(&study.geo, &study.obstacle);
    (study, analysis)
}

// ── Formatting ──

#[test]
fn test_format_units() {
    assert_eq!(format_meters(1.65), "1.65 m");
    assert_eq!(format_meters(0.04928), "0.05 m");
    assert_eq!(format_degrees(44.8112), "44.8°");
    assert_eq!(format_degrees(6.55), "6.5°");
    assert_eq!(format_percent(3269.44), "3269.4%");
}

#[test]
fn test_format_shadow() {
    assert_eq!(format_shadow(&ShadowLength::Finite(1.661)), "1.66 m");
    assert_eq!(format_shadow(&ShadowLength::NoFiniteShadow), "no finite shadow");
}

// ── Report ──

#[test]
fn test_report_sections() {
    let (study, analysis) = default_study();
    let generated = Utc.with_ymd_and_hms(2025, 6, 21, 12, 0, 0).unwrap();
    let report = render_report(&study, &analysis, &generated);

    assert!(report.contains("Generated: 21/06/2025 12:00 UTC"));
    for heading in [
        "## 1 - Input data",
        "## 2 - Results",
        "## 3 - Seasonal variation",
        "## 4 - Conclusion",
        "## 5 - Method",
        "## 6 - Assumptions",
    ] {
        assert!(report.contains(heading), "missing {}", heading);
    }
    assert!(report.contains("21°44'21.3\"S, 48°06'21.4\"W"));
    assert!(report.contains("| Obstacle height | 1.65 m |"));
    assert!(report.contains("| Obstacle orientation | East-West |"));
    assert!(report.contains("| Shadow direction | South |"));
}

#[test]
fn test_report_values_match_analysis() {
    let (study, analysis) = default_study();
    let report = render_report(&study, &analysis, &Utc::now());
    for r in &analysis.results {
        let row = format!(
            "| {} | {} | {} | {} | {} |",
            r.event,
            r.date_label,
            format_degrees(r.declination_deg),
            format_degrees(r.elevation_deg),
            format_shadow(&r.shadow)
        );
        assert!(report.contains(&row), "missing row {}", row);
    }
    let longest = analysis.longest().unwrap();
    assert_eq!(longest.event, SeasonalEvent::WinterSolstice);
    assert!(report.contains("longest shadow occurs on the Winter solstice (21 Jun)"));
    assert!(report.contains("shortest on the Summer solstice (21 Dec)"));
    assert!(report.contains(&format!(
        "Keep at least {} from the obstacle",
        format_meters(analysis.max_shadow_m.unwrap())
    )));
}

#[test]
fn test_report_flags_sun_on_shaded_side() {
    let (study, analysis) = default_study();
    let report = render_report(&study, &analysis, &Utc::now());
    assert!(report.contains("### Caveats"));
    assert!(report.contains("Summer solstice (21 Dec): the noon sun stands South of the zenith"));
}

#[test]
fn test_report_horizon_caveat() {
    let config = StudyConfig {
        latitude: noon_shadow::config::Coordinate::Decimal(90.0),
        longitude: noon_shadow::config::Coordinate::Decimal(0.0),
        shadow_direction: CompassDirection::North,
        ..StudyConfig::default()
    };
    let study = config.build().unwrap();
    let analysis = analyze(&study.geo, &study.obstacle);
    let report = render_report(&study, &analysis, &Utc::now());
    assert!(report.contains("Winter solstice (21 Dec): sun at or below the horizon"));
    assert!(report.contains("| Winter solstice | 21 Dec | -23.4° | 0.0° | no finite shadow |"));
}

#[test]
fn test_report_all_below_horizon_notice() {
    let (study, mut analysis) = default_study();
    for r in &mut analysis.results {
        r.elevation_deg = 0.0;
        r.shadow = ShadowLength::NoFiniteShadow;
        r.endpoint = None;
    }
    analysis.max_shadow_m = None;
    analysis.min_shadow_m = None;
    analysis.percent_variation = None;

    let report = render_report(&study, &analysis, &Utc::now());
    assert!(report.contains("sun stays at or below the horizon at solar noon on all reference dates"));
    assert!(report.contains("Variation between longest and shortest shadow: undefined."));
    assert!(report.contains("no clearance figure applies"));
}

#[test]
fn test_report_renders_to_the_last_section() {
    let (study, analysis) = default_study();
    let report = render_report(&study, &analysis, &Utc::now());
    assert!(report.starts_with("# Solar-noon shadow study\n"));
    assert!(report.ends_with("- Fixed reference dates without leap-year correction.\n"));
    assert!(report.contains(&format!(
        "Variation between longest and shortest shadow: {}.",
        format_percent(analysis.percent_variation.unwrap())
    )));
}

#[test]
fn test_report_local_timestamp() {
    let (study, analysis) = default_study();
    let generated = Utc
        .with_ymd_and_hms(2025, 6, 21, 12, 0, 0)
        .unwrap()
        .with_timezone(&Sao_Paulo);
    let report = render_report(&study, &analysis, &generated);
    assert!(report.contains("Generated: 21/06/2025 09:00"));
}

#[test]
fn test_example_study_runs() {
    let analysis = example_study().unwrap();
    assert_eq!(analysis.results.len(), 4);
    assert_eq!(analysis.hemisphere, Hemisphere::Southern);
}
