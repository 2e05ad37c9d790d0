#![cfg_attr(not(test), no_std)]

/// Packed binary-coded decimal conversion.
pub mod bcd;
pub use bcd::Bcd;

/// Gregorian calendar rules needed to check RTC dates.
pub mod calendar;

/// Plausibility checks for raw RTC captures.
mod validate;
pub use validate::{validate, ErrorStatus};

/// Scoped interrupt masking.
mod guard;
pub use guard::InterruptGuard;

/// Initialisation and guarded access to the RTC chip.
mod session;
pub use session::RtcSession;

/// Decoded wall-clock time.
mod local_time;
pub use local_time::{LocalTime, LocalTimeError};

/// Periodic resynchronisation of the local time.
mod ticker;
pub use ticker::LocalClock;

mod config;
pub use config::{ClockConfig, DEFAULT_BASE_YEAR, DEFAULT_REFRESH_TICKS};

pub use rtc_hal::{BcdDateTime, InterruptMask, ProbeResult, RawRtcRecord, RtcStatus, SiiRtc};

#[cfg(test)]
mod testing;
