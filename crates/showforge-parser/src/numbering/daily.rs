//! Air-date extraction for daily series.

use super::{capture_u16, NumberingOutcome};
use crate::analyzers::rx;
use crate::error::Result;
use crate::model::{Numbering, ParsedInfo};
use chrono::{Days, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

const TIER_YMD: &str = "daily-ymd";
const TIER_SHORT: &str = "daily-short-year";
const TIER_YDM: &str = "daily-ydm";

/// Four-digit year, then month, then day.
static YMD: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"^(?P<year>\d{4})[-_. /](?P<month>\d{1,2})[-_. /](?P<day>\d{1,2})$")
});

/// Two-digit year, pivoted: 70 and above is 19xx, below is 20xx.
static SHORT: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"^(?P<year>\d{2})[-_. ](?P<month>\d{1,2})[-_. ](?P<day>\d{1,2})$")
});

/// Four-digit year with day and month swapped. Only consulted when the
/// month-first reading fails validation.
static YDM: LazyLock<Regex> = LazyLock::new(|| {
    rx(r"^(?P<year>\d{4})[-_. /](?P<day>\d{1,2})[-_. /](?P<month>\d{1,2})$")
});

/// Extract the most recent valid air date among the date-shaped tokens.
pub fn extract(info: &ParsedInfo<'_>) -> Result<Option<NumberingOutcome>> {
    let mut best: Option<(NaiveDate, usize)> = None;
    for token in &info.daily_dates {
        let date = if let Some(caps) = YMD.captures(token.text) {
            let year = capture_u16(&caps, "year", TIER_YMD)?;
            let month = capture_u16(&caps, "month", TIER_YMD)?;
            let day = capture_u16(&caps, "day", TIER_YMD)?;
            validate(year, month, day).or_else(|| {
                YDM.captures(token.text).and_then(|caps| {
                    let swapped = (
                        caps.name("year"),
                        caps.name("month"),
                        caps.name("day"),
                    );
                    match swapped {
                        (Some(y), Some(m), Some(d)) => validate(
                            y.as_str().parse().unwrap_or(0),
                            m.as_str().parse().unwrap_or(0),
                            d.as_str().parse().unwrap_or(0),
                        ),
                        _ => None,
                    }
                })
            })
        } else if let Some(caps) = SHORT.captures(token.text) {
            let short = capture_u16(&caps, "year", TIER_SHORT)?;
            let year = if short >= 70 { 1900 + short } else { 2000 + short };
            let month = capture_u16(&caps, "month", TIER_SHORT)?;
            let day = capture_u16(&caps, "day", TIER_SHORT)?;
            validate(year, month, day)
        } else {
            None
        };

        if let Some(date) = date {
            let better = best.map_or(true, |(current, _)| date > current);
            if better {
                best = Some((date, token.offset));
            }
        }
    }
    Ok(best.map(|(air_date, position)| NumberingOutcome {
        numbering: Numbering::Daily { air_date },
        position,
        mini: false,
    }))
}

/// Reject implausible dates: pre-1970, post-tomorrow, or simply not a date.
fn validate(year: u16, month: u16, day: u16) -> Option<NaiveDate> {
    if year <= 1900 || !(1..=12).contains(&month) || day == 0 {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))?;
    let floor = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    let ceiling = Utc::now().date_naive().checked_add_days(Days::new(1))?;
    (date >= floor && date <= ceiling).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline;
    use crate::segment;

    fn extract_date(title: &str) -> Option<NaiveDate> {
        let info = pipeline::run(segment::fragments(title));
        extract(&info)
            .expect("no pattern defects")
            .map(|o| match o.numbering {
                Numbering::Daily { air_date } => air_date,
                other => panic!("expected daily numbering, got {other:?}"),
            })
    }

    #[test]
    fn test_year_first_date() {
        assert_eq!(
            extract_date("The.Daily.Show.2020.01.05.720p.HDTV"),
            NaiveDate::from_ymd_opt(2020, 1, 5)
        );
    }

    #[test]
    fn test_swapped_day_month() {
        // 23 cannot be a month, so the day-first reading applies.
        assert_eq!(
            extract_date("Show.2019.23.04.HDTV"),
            NaiveDate::from_ymd_opt(2019, 4, 23)
        );
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(
            extract_date("Show.99.12.31.HDTV"),
            NaiveDate::from_ymd_opt(1999, 12, 31)
        );
        assert_eq!(
            extract_date("Show.15.06.01.HDTV"),
            NaiveDate::from_ymd_opt(2015, 6, 1)
        );
    }

    #[test]
    fn test_future_date_rejected() {
        assert_eq!(extract_date("Show.2098.01.05.HDTV"), None);
    }

    #[test]
    fn test_pre_epoch_date_rejected() {
        assert_eq!(extract_date("Show.1962.01.05.HDTV"), None);
    }

    #[test]
    fn test_most_recent_date_wins() {
        assert_eq!(
            extract_date("Show.2019.01.05.vs.2020.01.05.HDTV"),
            NaiveDate::from_ymd_opt(2020, 1, 5)
        );
    }
}
