// Query translator: loosely typed request parameters in, typed event store arguments out.
//
// Purpose
// - Parse RFC 3339 bounds, calendar coordinates in a named time zone, sort tokens and limits.
// - Reject malformed input with a ValidationError before any storage access.
//
// Responsibilities
// - Normalize every instant to UTC. The store never sees local time.
// - Resolve calendar units at local midnight. A midnight skipped by a DST jump resolves to
//   the first instant after the jump, an ambiguous one to the earliest instant.
//
// Boundaries
// - No input or output. Inbound adapters (HTTP, GraphQL) call these functions.

use crate::modules::events::core::event::EventDetails;
use crate::modules::events::core::query::{EventQuery, SortField, SortOrder, TimeWindow};
use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    Weekday,
};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("query parameter {param}={value} is not a valid RFC 3339 date-time: {reason}")]
    InvalidDateTime {
        param: &'static str,
        value: String,
        reason: String,
    },

    #[error("query parameter date={value} is not a valid YYYY-MM-DD date: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("unknown time zone {0}")]
    UnknownTimezone(String),

    #[error("query parameter {param}={value} is not a valid number: {reason}")]
    InvalidNumber {
        param: &'static str,
        value: String,
        reason: String,
    },

    #[error("query parameter {param}={value} out of range")]
    OutOfRange { param: &'static str, value: String },

    #[error("query parameter {param}={value} not supported")]
    Unsupported { param: &'static str, value: String },

    #[error("missing query parameter {0}")]
    Missing(&'static str),

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

pub fn parse_datetime(param: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| ValidationError::InvalidDateTime {
            param,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|err| ValidationError::InvalidDate {
        value: value.to_string(),
        reason: err.to_string(),
    })
}

pub fn parse_timezone(value: &str) -> Result<Tz, ValidationError> {
    value
        .parse::<Tz>()
        .map_err(|_| ValidationError::UnknownTimezone(value.to_string()))
}

fn parse_number<T>(param: &'static str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse::<T>().map_err(|err| ValidationError::InvalidNumber {
        param,
        value: value.to_string(),
        reason: err.to_string(),
    })
}

pub fn parse_year(value: &str) -> Result<i32, ValidationError> {
    parse_number("year", value)
}

/// Any integer. Weeks outside the ISO year roll into the neighbouring year.
pub fn parse_week(value: &str) -> Result<i32, ValidationError> {
    parse_number("week", value)
}

pub fn parse_month(value: &str) -> Result<u32, ValidationError> {
    parse_number("month", value)
}

/// Non-negative row cap, 0 meaning unbounded.
pub fn parse_limit(value: &str) -> Result<u32, ValidationError> {
    parse_number("limit", value)
}

pub fn parse_sort_field(value: &str) -> Result<SortField, ValidationError> {
    SortField::ALL
        .into_iter()
        .find(|field| field.column() == value)
        .ok_or_else(|| ValidationError::Unsupported {
            param: "sort",
            value: value.to_string(),
        })
}

pub fn parse_sort_order(value: &str) -> Result<SortOrder, ValidationError> {
    match value {
        "asc" | "" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(ValidationError::Unsupported {
            param: "ord",
            value: other.to_string(),
        }),
    }
}

/// Missing `sort` means id order. `ord` defaults to ascending.
pub fn parse_sort(
    sort: Option<&str>,
    ord: Option<&str>,
) -> Result<(SortField, SortOrder), ValidationError> {
    let field = sort.map(parse_sort_field).transpose()?.unwrap_or_default();
    let order = parse_sort_order(ord.unwrap_or(""))?;
    Ok((field, order))
}

fn local_midnight(tz: Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            instant.with_timezone(&Utc)
        }
        LocalResult::None => first_instant_after_gap(tz, midnight),
    }
}

fn first_instant_after_gap(tz: Tz, midnight: NaiveDateTime) -> DateTime<Utc> {
    (1..=24 * 60)
        .find_map(|minutes| {
            let local = midnight.checked_add_signed(Duration::minutes(minutes))?;
            tz.from_local_datetime(&local).earliest()
        })
        .map(|instant| instant.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

fn out_of_range(param: &'static str, value: impl ToString) -> ValidationError {
    ValidationError::OutOfRange {
        param,
        value: value.to_string(),
    }
}

/// `[local midnight, +24h)` of `date` in `tz`.
pub fn day_window(tz: Tz, date: NaiveDate) -> Result<TimeWindow, ValidationError> {
    let start = local_midnight(tz, date);
    let end = start
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| out_of_range("date", date))?;
    Ok(TimeWindow::Between { start, end })
}

/// `[Monday of week 1 + (week - 1) weeks, +7d)` in `tz`. Week 1 is the week holding January 4.
pub fn week_window(tz: Tz, year: i32, week: i32) -> Result<TimeWindow, ValidationError> {
    let monday = NaiveDate::from_isoywd_opt(year, 1, Weekday::Mon)
        .ok_or_else(|| out_of_range("year", year))?
        .checked_add_signed(Duration::weeks(i64::from(week) - 1))
        .ok_or_else(|| out_of_range("week", week))?;
    let start = local_midnight(tz, monday);
    let end = start
        .checked_add_signed(Duration::weeks(1))
        .ok_or_else(|| out_of_range("week", week))?;
    Ok(TimeWindow::Between { start, end })
}

/// `[first of month, first of next month)`, both at local midnight in `tz`.
pub fn month_window(tz: Tz, year: i32, month: u32) -> Result<TimeWindow, ValidationError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| out_of_range("month", month))?;
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| out_of_range("year", year))?;
    Ok(TimeWindow::Between {
        start: local_midnight(tz, first),
        end: local_midnight(tz, next),
    })
}

fn required<'a>(param: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    value.as_deref().ok_or(ValidationError::Missing(param))
}

#[derive(Debug, Default, Deserialize)]
pub struct EventListParams {
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Option<String>,
    pub ord: Option<String>,
    pub limit: Option<String>,
}

impl EventListParams {
    pub fn translate(&self) -> Result<EventQuery, ValidationError> {
        let start = self
            .start
            .as_deref()
            .map(|value| parse_datetime("start", value))
            .transpose()?;
        let end = self
            .end
            .as_deref()
            .map(|value| parse_datetime("end", value))
            .transpose()?;
        let limit = self.limit.as_deref().map(parse_limit).transpose()?;
        let (sort_field, sort_order) = parse_sort(self.sort.as_deref(), self.ord.as_deref())?;

        Ok(EventQuery {
            window: TimeWindow::from_bounds(start, end),
            sort_field,
            sort_order,
            limit: limit.unwrap_or(0),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DayParams {
    pub date: Option<String>,
    pub tz: Option<String>,
}

impl DayParams {
    pub fn translate(&self) -> Result<EventQuery, ValidationError> {
        let tz = parse_timezone(required("tz", &self.tz)?)?;
        let date = parse_date(required("date", &self.date)?)?;
        Ok(EventQuery::calendar(day_window(tz, date)?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WeekParams {
    pub year: Option<String>,
    pub week: Option<String>,
    pub tz: Option<String>,
}

impl WeekParams {
    pub fn translate(&self) -> Result<EventQuery, ValidationError> {
        let tz = parse_timezone(required("tz", &self.tz)?)?;
        let year = parse_year(required("year", &self.year)?)?;
        let week = parse_week(required("week", &self.week)?)?;
        Ok(EventQuery::calendar(week_window(tz, year, week)?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MonthParams {
    pub year: Option<String>,
    pub month: Option<String>,
    pub tz: Option<String>,
}

impl MonthParams {
    pub fn translate(&self) -> Result<EventQuery, ValidationError> {
        let tz = parse_timezone(required("tz", &self.tz)?)?;
        let year = parse_year(required("year", &self.year)?)?;
        let month = parse_month(required("month", &self.month)?)?;
        Ok(EventQuery::calendar(month_window(tz, year, month)?))
    }
}

/// Request body for create and update. Instants may carry any offset and are stored in UTC.
#[derive(Debug, Deserialize)]
pub struct EventInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
}

impl From<EventInput> for EventDetails {
    fn from(input: EventInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            date_from: input.date_from,
            date_to: input.date_to,
        }
    }
}
