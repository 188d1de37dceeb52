//! Reference dates for the solstices and equinoxes.
//!
//! Day-of-year values are fixed approximations in a non-leap year, labelled
//! for the northern hemisphere. Southern sites swap the solstice labels and
//! the equinox labels.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Result, ShadowError};
use crate::types::{Hemisphere, SeasonalEvent};

/// March 20.
pub const MARCH_EQUINOX_DOY: i32 = 79;
/// June 21.
pub const JUNE_SOLSTICE_DOY: i32 = 172;
/// September 23.
pub const SEPTEMBER_EQUINOX_DOY: i32 = 266;
/// December 21.
pub const DECEMBER_SOLSTICE_DOY: i32 = 355;

/// Non-leap year used only to turn a day of year into a calendar label.
pub const REFERENCE_YEAR: i32 = 2025;

pub fn resolve(event: SeasonalEvent, hemisphere: Hemisphere) -> i32 {
    match (event, hemisphere) {
        (SeasonalEvent::SummerSolstice, Hemisphere::Northern)
        | (SeasonalEvent::WinterSolstice, Hemisphere::Southern) => JUNE_SOLSTICE_DOY,
        (SeasonalEvent::WinterSolstice, Hemisphere::Northern)
        | (SeasonalEvent::SummerSolstice, Hemisphere::Southern) => DECEMBER_SOLSTICE_DOY,
        (SeasonalEvent::SpringEquinox, Hemisphere::Northern)
        | (SeasonalEvent::AutumnEquinox, Hemisphere::Southern) => MARCH_EQUINOX_DOY,
        (SeasonalEvent::AutumnEquinox, Hemisphere::Northern)
        | (SeasonalEvent::SpringEquinox, Hemisphere::Southern) => SEPTEMBER_EQUINOX_DOY,
    }
}

/// Resolves an event given by its textual tag, e.g. `"winter_solstice"`.
pub fn resolve_tag(tag: &str, hemisphere: Hemisphere) -> Result<i32> {
    let event: SeasonalEvent = tag.parse()?;
    Ok(resolve(event, hemisphere))
}

impl FromStr for SeasonalEvent {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        SeasonalEvent::ALL
            .into_iter()
            .find(|event| event.tag() == normalized)
            .ok_or_else(|| ShadowError::InvalidEvent { tag: s.to_string() })
    }
}

pub fn reference_date(day_of_year: i32) -> Option<NaiveDate> {
    u32::try_from(day_of_year)
        .ok()
        .and_then(|doy| NaiveDate::from_yo_opt(REFERENCE_YEAR, doy))
}

/// "21 Jun" style label; falls back to "day N" outside 1..=365.
pub fn date_label(day_of_year: i32) -> String {
    match reference_date(day_of_year) {
        Some(date) => date.format("%d %b").to_string(),
        None => format!("day {}", day_of_year),
    }
}
