//! Calendar rules used when validating RTC dates.

pub const JANUARY: u8 = 1;
pub const FEBRUARY: u8 = 2;
pub const DECEMBER: u8 = 12;

// Non-leap baseline, January first.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Check if a year is a leap year under the Gregorian rule.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`, or `None` for a month outside 1-12.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    month_length(month, is_leap_year(year))
}

/// Number of days in `month` (1-12), or `None` for a month outside 1-12.
pub const fn month_length(month: u8, leap_year: bool) -> Option<u8> {
    if month < JANUARY || month > DECEMBER {
        return None;
    }

    let days = DAYS_IN_MONTH[(month - 1) as usize];
    if month == FEBRUARY && leap_year {
        Some(days + 1)
    } else {
        Some(days)
    }
}
