use chrono::Utc;
use chrono_tz::America::Sao_Paulo;

use noon_shadow::analysis::analyze;
use noon_shadow::config::StudyConfig;
use noon_shadow::report::render_report;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => StudyConfig::from_path(path)?,
        None => StudyConfig::default(),
    };
    let study = config.build()?;
    let analysis = analyze(&study.geo, &study.obstacle);

    let now = Utc::now().with_timezone(&Sao_Paulo);
    println!("{}", render_report(&study, &analysis, &now));
    println!("--- Chart data ---");
    println!("{}", analysis.chart_data().to_json()?);
    Ok(())
}
