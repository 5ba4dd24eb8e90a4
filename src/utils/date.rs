use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// "Jan 2025" style label used for monthly breakdowns.
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{month:02}/{year}"))
}

pub fn month_key(date: &NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Bounds of a single period: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = p.split_once('-')?;
            let y: i32 = y.parse().ok()?;
            let m: u32 = m.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, m, 1)?,
                NaiveDate::from_ymd_opt(y, m, month_last_day(y, m)?)?,
            ))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse a period filter into inclusive date bounds.
///
/// Supported:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - ranges `start:end` where both sides share the same format
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start, end)) = r.split_once(':') {
        let (start, end) = (start.trim(), end.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{r}: start and end must have the same format"
            )));
        }
        let (from, _) = period_bounds(start).ok_or_else(|| AppError::InvalidDate(r.into()))?;
        let (_, to) = period_bounds(end).ok_or_else(|| AppError::InvalidDate(r.into()))?;
        if to < from {
            return Err(AppError::InvalidDate(format!("{r}: end is before start")));
        }
        return Ok((from, to));
    }

    period_bounds(r).ok_or_else(|| AppError::InvalidDate(r.into()))
}
