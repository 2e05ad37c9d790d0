//! Decoded wall-clock time kept by the host.

use core::fmt;

use rtc_hal::RawRtcRecord;

use crate::bcd::Bcd;
use crate::config::DEFAULT_BASE_YEAR;

/// Binary date and time as last synchronised from the RTC.
///
/// Fields are copied from a validated capture, so they carry the same limits as the validator:
/// hours up to 24 and minutes/seconds up to 60 can appear.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct LocalTime {
    year: u16,
    month: u8,
    day: u8,
    day_of_week: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

/// Field of a capture that could not be decoded or converted.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum LocalTimeError {
    Year,
    Month,
    Day,
    DayOfWeek,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for LocalTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::DayOfWeek => "day of week",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        };
        write!(f, "invalid {} field", field)
    }
}

/// 2000-01-01 00:00:00, the time the dummy record stands for.
impl Default for LocalTime {
    fn default() -> Self {
        LocalTime {
            year: DEFAULT_BASE_YEAR,
            month: 1,
            day: 1,
            day_of_week: 0,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl LocalTime {
    /// Decodes every BCD field of `record`, adding `base_year` to the two-digit year.
    ///
    /// Only the encoding is checked here; range checks belong to [`crate::validate()`].
    pub fn from_record(record: &RawRtcRecord, base_year: u16) -> Result<LocalTime, LocalTimeError> {
        let datetime = &record.datetime;
        let field = |byte: u8, error: LocalTimeError| Bcd::decode(byte).ok_or(error);

        Ok(LocalTime {
            year: base_year.saturating_add(u16::from(field(datetime.year, LocalTimeError::Year)?)),
            month: field(datetime.month, LocalTimeError::Month)?,
            day: field(datetime.day, LocalTimeError::Day)?,
            day_of_week: field(datetime.day_of_week, LocalTimeError::DayOfWeek)?,
            hour: field(datetime.hour, LocalTimeError::Hour)?,
            minute: field(datetime.minute, LocalTimeError::Minute)?,
            second: field(datetime.second, LocalTimeError::Second)?,
        })
    }

    /// Returns the year, including the base year.
    pub const fn year(&self) -> u16 {
        self.year
    }
    /// Returns the month (1-12).
    pub const fn month(&self) -> u8 {
        self.month
    }
    /// Returns the day of the month (1-31).
    pub const fn day(&self) -> u8 {
        self.day
    }
    /// Returns the day of the week as counted by the RTC (0-6).
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }
    pub const fn hour(&self) -> u8 {
        self.hour
    }
    pub const fn minute(&self) -> u8 {
        self.minute
    }
    pub const fn second(&self) -> u8 {
        self.second
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<LocalTime> for chrono::NaiveDateTime {
    type Error = LocalTimeError;

    fn try_from(time: LocalTime) -> Result<Self, LocalTimeError> {
        let date = chrono::NaiveDate::from_ymd_opt(
            i32::from(time.year),
            u32::from(time.month),
            u32::from(time.day),
        )
        .ok_or(if (1..=12).contains(&time.month) {
            LocalTimeError::Day
        } else {
            LocalTimeError::Month
        })?;

        // The RTC tolerates 24:00 and :60, chrono does not.
        if time.hour > 23 {
            return Err(LocalTimeError::Hour);
        }
        if time.minute > 59 {
            return Err(LocalTimeError::Minute);
        }

        date.and_hms_opt(u32::from(time.hour), u32::from(time.minute), u32::from(time.second))
            .ok_or(LocalTimeError::Second)
    }
}
