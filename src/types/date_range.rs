//! Inclusive date ranges for queries, with conversions from whole years and months.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The inclusive start and end date of a query.
///
/// No ordering between `start` and `end` is enforced; the provider decides
/// what to do with an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Renders as `YYYY-MM-DDZ--YYYY-MM-DDZ`, the time segment of a request path.
///
/// # Examples
///
/// ```
/// use meteomatics::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// );
/// assert_eq!(range.to_string(), "2024-02-28Z--2024-03-01Z");
/// ```
impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Z--{}Z",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// A single day.
impl From<NaiveDate> for DateRange {
    fn from(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }
}

impl From<(NaiveDate, NaiveDate)> for DateRange {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        Self { start, end }
    }
}

/// A whole calendar year, usable wherever a date range is accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);

/// A calendar month as `Month(year, month)`, with `month` in `1..=12`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, self.1, 1)
    }
}

/// Anything a client can be queried for: an explicit range or a calendar period.
///
/// Returns `None` when the value does not name a real period, such as month 13.
pub trait AnyDateRange {
    fn date_range(self) -> Option<DateRange>;
}

impl AnyDateRange for DateRange {
    fn date_range(self) -> Option<DateRange> {
        Some(self)
    }
}

impl AnyDateRange for NaiveDate {
    fn date_range(self) -> Option<DateRange> {
        Some(self.into())
    }
}

impl AnyDateRange for (NaiveDate, NaiveDate) {
    fn date_range(self) -> Option<DateRange> {
        Some(self.into())
    }
}

/// A single `YYYY-MM-DD` day.
impl AnyDateRange for &str {
    fn date_range(self) -> Option<DateRange> {
        NaiveDate::parse_from_str(self, DATE_FORMAT)
            .ok()
            .map(DateRange::from)
    }
}

impl AnyDateRange for Year {
    fn date_range(self) -> Option<DateRange> {
        let start = Month(self.0, 1).first_day()?;
        let end = Month(self.0, 12).date_range()?.end;
        Some(DateRange { start, end })
    }
}

impl AnyDateRange for Month {
    fn date_range(self) -> Option<DateRange> {
        let start = self.first_day()?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(DateRange { start, end })
    }
}
