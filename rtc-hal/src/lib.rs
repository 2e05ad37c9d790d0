#![cfg_attr(not(test), no_std)]

/// Hardware-shaped register images read from the RTC chip.
mod record;
pub use record::{BcdDateTime, ProbeResult, RawRtcRecord, RtcStatus};

/// Traits for the serial RTC chip itself.
mod rtc;
pub use rtc::SiiRtc;

/// Traits for masking host CPU interrupts around RTC transactions.
mod interrupt;
pub use interrupt::InterruptMask;
