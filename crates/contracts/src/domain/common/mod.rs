use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// Helpers for the hard-coded mock datasets. Inputs are literals, so an
// invalid date is a typo in the data and fails loudly on first access.

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid mock date")
}

pub(crate) fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("invalid mock time")
}

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_time(time(hour, minute))
}
