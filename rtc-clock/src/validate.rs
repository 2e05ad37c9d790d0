//! Plausibility checks for raw RTC captures.

use core::fmt;

use rtc_hal::{RawRtcRecord, RtcStatus};

use crate::bcd::Bcd;
use crate::calendar::{self, DECEMBER, JANUARY};

bitflags::bitflags! {
    /// Health of the RTC as seen by the last initialisation.
    ///
    /// Flags are independent: a capture with several bad fields reports every one of them.
    /// An empty value means the chip answered and its last capture is trustworthy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ErrorStatus: u16 {
        /// The chip did not answer the probe.
        const INIT_ERROR = 0x0001;
        /// The chip answered the probe but raised diagnostic warnings.
        const INIT_WARNING = 0x0002;
        /// The chip counts hours in 12-hour mode.
        const CLOCK_12HOUR = 0x0010;
        /// The chip lost power.
        const POWER_FAILURE = 0x0020;
        const INVALID_YEAR = 0x0040;
        const INVALID_MONTH = 0x0080;
        const INVALID_DAY = 0x0100;
        const INVALID_HOUR = 0x0200;
        const INVALID_MINUTE = 0x0400;
        const INVALID_SECOND = 0x0800;

        /// Every anomaly `validate` can report.
        const RECORD_ERRORS = Self::CLOCK_12HOUR.bits()
            | Self::POWER_FAILURE.bits()
            | Self::INVALID_YEAR.bits()
            | Self::INVALID_MONTH.bits()
            | Self::INVALID_DAY.bits()
            | Self::INVALID_HOUR.bits()
            | Self::INVALID_MINUTE.bits()
            | Self::INVALID_SECOND.bits();

        /// Conditions under which the chip's data must not be handed out.
        const FATAL = Self::INIT_ERROR.bits() | Self::RECORD_ERRORS.bits();
    }
}

impl ErrorStatus {
    /// True when the chip's data must be replaced by the dummy record.
    pub const fn is_fatal(&self) -> bool {
        self.intersects(Self::FATAL)
    }
}

impl Default for ErrorStatus {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "ok");
        }

        // Composite constants would repeat their members, so only name single bits.
        let mut first = true;
        for (name, flag) in self.iter_names() {
            if flag.bits().count_ones() != 1 {
                continue;
            }
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "{}", name)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(all(feature = "defmt", not(test)))]
impl defmt::Format for ErrorStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ErrorStatus({=u16:#06x})", self.bits())
    }
}

/// Largest hour, minute and second values accepted, one above what a clock can show.
const MAX_HOUR: u8 = 24;
const MAX_MINUTE: u8 = 60;
const MAX_SECOND: u8 = 60;

/// Checks a raw capture and returns every anomaly found in it.
///
/// Every check runs regardless of earlier failures. A day can only be checked against a month
/// in 1-12; when the month is unusable the day is reported invalid too.
pub fn validate(record: &RawRtcRecord) -> ErrorStatus {
    let mut errors = ErrorStatus::empty();
    let datetime = &record.datetime;

    if record.status.contains(RtcStatus::POWER) {
        errors |= ErrorStatus::POWER_FAILURE;
    }

    if !record.status.contains(RtcStatus::HOUR_24) {
        errors |= ErrorStatus::CLOCK_12HOUR;
    }

    let year = Bcd::decode(datetime.year);
    if year.is_none() {
        errors |= ErrorStatus::INVALID_YEAR;
    }

    let month = Bcd::decode(datetime.month).filter(|month| (JANUARY..=DECEMBER).contains(month));
    if month.is_none() {
        errors |= ErrorStatus::INVALID_MONTH;
    }

    // 20YY is a leap year exactly when YY is. An undecodable year counts as a common year.
    let leap_year = year.is_some_and(|year| calendar::is_leap_year(u16::from(year)));
    let max_day = month.and_then(|month| calendar::month_length(month, leap_year));
    match (Bcd::decode(datetime.day), max_day) {
        (Some(day), Some(max_day)) if day <= max_day => {}
        _ => errors |= ErrorStatus::INVALID_DAY,
    }

    if Bcd::decode(datetime.hour).is_none_or(|hour| hour > MAX_HOUR) {
        errors |= ErrorStatus::INVALID_HOUR;
    }

    if Bcd::decode(datetime.minute).is_none_or(|minute| minute > MAX_MINUTE) {
        errors |= ErrorStatus::INVALID_MINUTE;
    }

    if Bcd::decode(datetime.second).is_none_or(|second| second > MAX_SECOND) {
        errors |= ErrorStatus::INVALID_SECOND;
    }

    if !errors.is_empty() {
        log::warn!("rtc: capture failed validation: {}", errors);
    }

    errors
}
