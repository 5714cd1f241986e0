use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use icu_calendar::{Date, persian::Persian};
use serde::{Serialize, Serializer};
use std::fmt;

/// A day on the Solar Hijri calendar, the calendar every timestamp is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarHijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarHijriDate {
    /// `None` only for dates the calendar library cannot represent.
    pub fn from_gregorian(date: NaiveDate) -> Option<Self> {
        let month = u8::try_from(date.month()).ok()?;
        let day = u8::try_from(date.day()).ok()?;
        let iso = Date::try_new_iso_date(date.year(), month, day).ok()?;
        let persian = iso.to_calendar(Persian::new());
        Some(Self {
            year: persian.year().number,
            month: persian.month().ordinal,
            day: persian.day_of_month().0,
        })
    }
}

impl fmt::Display for SolarHijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

fn write_local(f: &mut fmt::Formatter<'_>, at: NaiveDateTime, seconds: bool) -> fmt::Result {
    let date = SolarHijriDate::from_gregorian(at.date()).ok_or(fmt::Error)?;
    write!(f, "{date} {:02}:{:02}", at.hour(), at.minute())?;
    if seconds {
        write!(f, ":{:02}", at.second())?;
    }
    Ok(())
}

/// Local wall-clock time truncated to the minute, rendered `YYYY/MM/DD HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteStamp(NaiveDateTime);

impl MinuteStamp {
    pub fn new(at: NaiveDateTime) -> Self {
        let time = NaiveTime::from_hms_opt(at.hour(), at.minute(), 0).unwrap_or(at.time());
        Self(at.date().and_time(time))
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for MinuteStamp {
    fn from(at: NaiveDateTime) -> Self {
        Self::new(at)
    }
}

impl fmt::Display for MinuteStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_local(f, self.0, false)
    }
}

impl Serialize for MinuteStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Local wall-clock time at second precision, rendered `YYYY/MM/DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondStamp(pub NaiveDateTime);

impl fmt::Display for SecondStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_local(f, self.0, true)
    }
}
