//! Traits for a serial real-time clock chip (S-3511A style, as found in game cartridges).

use crate::record::{BcdDateTime, ProbeResult, RtcStatus};

/// Raw access to the RTC chip.
///
/// Every method is a single bus transaction. Implementations do not mask interrupts
/// themselves; callers are expected to hold interrupts disabled for the duration of each call
/// because the chip is clocked one bit at a time over GPIO and must not be interrupted mid-frame.
///
/// None of the methods interpret the data they return: the date/time bytes are passed on in
/// their BCD form and validation is left to the caller.
pub trait SiiRtc {
    /// Runs the chip's presence/health diagnostic.
    fn probe(&mut self) -> ProbeResult;

    /// Clears the chip's write protection.
    fn unprotect(&mut self);

    /// Reads the status register.
    fn read_status(&mut self) -> RtcStatus;

    /// Reads the date and time registers.
    fn read_datetime(&mut self) -> BcdDateTime;
}

impl<T: SiiRtc + ?Sized> SiiRtc for &mut T {
    #[inline]
    fn probe(&mut self) -> ProbeResult {
        T::probe(self)
    }

    #[inline]
    fn unprotect(&mut self) {
        T::unprotect(self)
    }

    #[inline]
    fn read_status(&mut self) -> RtcStatus {
        T::read_status(self)
    }

    #[inline]
    fn read_datetime(&mut self) -> BcdDateTime {
        T::read_datetime(self)
    }
}
