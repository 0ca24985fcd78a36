// Time card
//
// Clock-in/clock-out pairs in 24-hour HH:MM, with overnight shifts
// wrapping across midnight. Totals feed a wage calculation.

use crate::error::{EngineError, EngineResult};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSheet {
    pub total_minutes: u32,
    pub total_hours: f64,
    pub total_wages: f64,
    /// Hours per date label, in entry order
    pub daily_hours: Vec<(String, f64)>,
}

/// Parse a strict 24-hour "HH:MM" into minutes since midnight.
/// Hours take one or two digits, minutes exactly two.
pub fn parse_clock(text: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidTime {
        text: text.to_string(),
    };

    let (hours_text, minutes_text) = text.split_once(':').ok_or_else(invalid)?;
    if hours_text.is_empty() || hours_text.len() > 2 || minutes_text.len() != 2 {
        return Err(invalid());
    }
    if !hours_text.bytes().all(|b| b.is_ascii_digit())
        || !minutes_text.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hours: u32 = hours_text.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes_text.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Minutes worked between clock-in and clock-out, adding 24 hours when
/// the end time precedes the start (overnight shift)
pub fn shift_minutes(clock_in: &str, clock_out: &str) -> EngineResult<u32> {
    let start = parse_clock(clock_in)?;
    let mut end = parse_clock(clock_out)?;

    if end < start {
        end += MINUTES_PER_DAY;
    }

    Ok(end - start)
}

/// Total a set of entries at the given hourly wage
pub fn tally(entries: &[TimeEntry], hourly_wage: f64) -> EngineResult<TimeSheet> {
    if entries.is_empty() {
        return Err(EngineError::EmptyInput {
            what: "time entries".to_string(),
        });
    }
    if !hourly_wage.is_finite() || hourly_wage <= 0.0 {
        return Err(EngineError::NonPositive {
            what: "hourly wage".to_string(),
        });
    }

    for entry in entries {
        if entry.date.is_empty() || entry.clock_in.is_empty() || entry.clock_out.is_empty() {
            return Err(EngineError::InvalidInput {
                what: "time entry".to_string(),
                reason: "date, clock-in, and clock-out are all required".to_string(),
            });
        }
    }

    let mut total_minutes = 0u32;
    let mut daily_minutes: Vec<(String, u32)> = Vec::new();

    for entry in entries {
        let minutes = shift_minutes(&entry.clock_in, &entry.clock_out)?;
        total_minutes += minutes;

        match daily_minutes.iter_mut().find(|(date, _)| *date == entry.date) {
            Some((_, day_total)) => *day_total += minutes,
            None => daily_minutes.push((entry.date.clone(), minutes)),
        }
    }

    let total_hours = total_minutes as f64 / 60.0;
    Ok(TimeSheet {
        total_minutes,
        total_hours,
        total_wages: total_hours * hourly_wage,
        daily_hours: daily_minutes
            .into_iter()
            .map(|(date, minutes)| (date, minutes as f64 / 60.0))
            .collect(),
    })
}
