//! Relative time formatting ("há 7 dias").

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.436_875;
const DAYS_PER_YEAR: f64 = 365.2425;

/// Unit a threshold is measured in.
#[derive(Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn measure(self, seconds: f64) -> f64 {
        match self {
            Unit::Second => seconds,
            Unit::Minute => seconds / SECONDS_PER_MINUTE,
            Unit::Hour => seconds / SECONDS_PER_HOUR,
            Unit::Day => seconds / SECONDS_PER_DAY,
            Unit::Month => seconds / SECONDS_PER_DAY / DAYS_PER_MONTH,
            Unit::Year => seconds / SECONDS_PER_DAY / DAYS_PER_YEAR,
        }
    }
}

/// Wording picked when the rounded amount is at most `max`.
enum Wording {
    Fixed(&'static str),
    Counted(&'static str),
}

struct Threshold {
    /// Unit to re-measure in, or None to keep the previous measure
    unit: Option<Unit>,
    max: Option<u64>,
    wording: Wording,
}

const THRESHOLDS: [Threshold; 11] = [
    Threshold { unit: Some(Unit::Second), max: Some(44), wording: Wording::Fixed("poucos segundos") },
    Threshold { unit: None, max: Some(89), wording: Wording::Fixed("um minuto") },
    Threshold { unit: Some(Unit::Minute), max: Some(44), wording: Wording::Counted("minutos") },
    Threshold { unit: None, max: Some(89), wording: Wording::Fixed("uma hora") },
    Threshold { unit: Some(Unit::Hour), max: Some(21), wording: Wording::Counted("horas") },
    Threshold { unit: None, max: Some(35), wording: Wording::Fixed("um dia") },
    Threshold { unit: Some(Unit::Day), max: Some(25), wording: Wording::Counted("dias") },
    Threshold { unit: None, max: Some(45), wording: Wording::Fixed("um mês") },
    Threshold { unit: Some(Unit::Month), max: Some(10), wording: Wording::Counted("meses") },
    Threshold { unit: None, max: Some(17), wording: Wording::Fixed("um ano") },
    Threshold { unit: Some(Unit::Year), max: None, wording: Wording::Counted("anos") },
];

/// Format `then` relative to `now`.
///
/// # Arguments
/// * `then` - Timestamp to describe
/// * `now` - Reference instant
///
/// # Returns
/// * `String` - e.g. "há poucos segundos", "há 7 dias", "em 2 horas"
///
/// # Details
/// Each unit is used until its rounded amount exceeds the threshold, then
/// the next coarser wording applies: 45 seconds become "um minuto", 90
/// seconds "2 minutos", 45 minutes "uma hora", 22 hours "um dia", 26 days
/// "um mês", 11 months "um ano".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = now.signed_duration_since(then).num_milliseconds();
    let seconds = elapsed_ms.unsigned_abs() as f64 / 1_000.0;

    let mut amount = 0u64;
    let mut phrase = String::new();
    for threshold in &THRESHOLDS {
        if let Some(unit) = threshold.unit {
            amount = unit.measure(seconds).round() as u64;
        }
        if threshold.max.is_none_or(|max| amount <= max) {
            phrase = match threshold.wording {
                Wording::Fixed(text) => text.to_string(),
                Wording::Counted(noun) => format!("{} {}", amount, noun),
            };
            break;
        }
    }

    if elapsed_ms >= 0 {
        format!("há {}", phrase)
    } else {
        format!("em {}", phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ago(duration: Duration) -> String {
        let now = Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();
        format_relative(now - duration, now)
    }

    #[test]
    fn test_seconds_and_minutes() {
        assert_eq!(ago(Duration::seconds(0)), "há poucos segundos");
        assert_eq!(ago(Duration::seconds(44)), "há poucos segundos");
        assert_eq!(ago(Duration::seconds(45)), "há um minuto");
        assert_eq!(ago(Duration::seconds(89)), "há um minuto");
        assert_eq!(ago(Duration::seconds(90)), "há 2 minutos");
        assert_eq!(ago(Duration::minutes(44)), "há 44 minutos");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(ago(Duration::minutes(45)), "há uma hora");
        assert_eq!(ago(Duration::minutes(90)), "há 2 horas");
        assert_eq!(ago(Duration::hours(21)), "há 21 horas");
        assert_eq!(ago(Duration::hours(22)), "há um dia");
        assert_eq!(ago(Duration::hours(36)), "há 2 dias");
        assert_eq!(ago(Duration::days(7)), "há 7 dias");
        assert_eq!(ago(Duration::days(25)), "há 25 dias");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(ago(Duration::days(26)), "há um mês");
        assert_eq!(ago(Duration::days(61)), "há 2 meses");
        assert_eq!(ago(Duration::days(320)), "há um ano");
        assert_eq!(ago(Duration::days(365 * 3)), "há 3 anos");
    }

    #[test]
    fn test_future_timestamps() {
        assert_eq!(ago(Duration::hours(-3)), "em 3 horas");
    }
}
