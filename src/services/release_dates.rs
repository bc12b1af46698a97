use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::models::{AgeBucket, DateRange};

/// The catalog holds nothing older than this
pub fn earliest_supported_date() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// `years` whole years before `date`, never earlier than the supported floor.
///
/// Subtraction goes by calendar months, so a day missing from the target month clamps
/// to that month's last day: Feb 29 minus one year is Feb 28.
fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    let floor = earliest_supported_date();
    date.checked_sub_months(Months::new(years * 12))
        .map_or(floor, |shifted| shifted.max(floor))
}

/// Resolves an age bucket to its `[start, end)` release window relative to `today`
pub fn resolve_date_range(bucket: AgeBucket, today: NaiveDate) -> DateRange {
    let (start, end) = match bucket {
        AgeBucket::New => (years_before(today, 1), today),
        AgeBucket::Recent => (years_before(today, 5), years_before(today, 1)),
        AgeBucket::Aged => (years_before(today, 10), years_before(today, 5)),
        AgeBucket::Older => (earliest_supported_date(), years_before(today, 10)),
    };

    DateRange { start, end }
}
