//! Calendar and clock commands

use tracing::{debug, info};
use valobs_core::{Date, DateTime, Duration, ValueError, Weekday};

use super::format_duration;
use crate::config::CliConfig;
use crate::error::Result;

/// Run the weekday command
pub fn weekday(date: &str) -> Result<String> {
    let date = Date::parse(date)?;
    info!(date = %date, "Computing weekday");

    let name = match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    Ok(name.to_string())
}

/// Run the add-days command
pub fn add_days(date: &str, days: i64) -> Result<String> {
    let date = Date::parse(date)?;
    info!(date = %date, days, "Adding days");

    let shifted = date.add_days(days).map_err(ValueError::from)?;
    Ok(shifted.to_string())
}

/// Run the shift command: DateTime plus a signed Duration
pub fn shift(datetime: &str, duration: &str) -> Result<String> {
    let start = DateTime::parse(datetime)?;
    let offset = Duration::parse(duration)?;
    info!(start = %start, offset = %offset.to_unit_string(), "Shifting datetime");

    let shifted = start.checked_add(offset).map_err(ValueError::from)?;
    debug!(result = %shifted);
    Ok(shifted.to_string())
}

/// Run the diff command: the Duration from `earlier` to `later`
pub fn diff(later: &str, earlier: &str, config: &CliConfig) -> Result<String> {
    let later = DateTime::parse(later)?;
    let earlier = DateTime::parse(earlier)?;
    info!(later = %later, earlier = %earlier, "Computing difference");

    let span = later.difference(&earlier);
    debug!(millis = span.num_milliseconds());
    Ok(format_duration(span, config))
}
