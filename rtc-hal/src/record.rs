//! Register images of the RTC chip.

bitflags::bitflags! {
    /// The RTC's status register.
    ///
    /// `POWER` is set by the chip after its supply dropped out and is read-only; the remaining
    /// bits are configuration written by the host. Bits the chip does not document are kept
    /// as read so they can still be logged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RtcStatus: u8 {
        /// Frequency interrupt enable.
        const INTFE = 0x01;
        /// Per-minute interrupt enable.
        const INTME = 0x02;
        /// Alarm interrupt enable.
        const INTAE = 0x08;
        /// Hours are counted 0-23 instead of 1-12 AM/PM.
        const HOUR_24 = 0x40;
        /// The chip lost power since the flag was last cleared.
        const POWER = 0x80;

        const _ = !0;
    }
}

impl Default for RtcStatus {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(all(feature = "defmt", not(test)))]
impl defmt::Format for RtcStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "RtcStatus({=u8:#04x})", self.bits())
    }
}

/// Date and time registers, exactly as read from the chip.
///
/// Each field is packed binary-coded decimal: the high nibble holds the tens digit and the
/// low nibble the units digit, so `0x59` means 59. Nothing here has been checked.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct BcdDateTime {
    /// Years since 2000 (0x00-0x99).
    pub year: u8,
    /// Month of the year (0x01-0x12).
    pub month: u8,
    /// Day of the month (0x01-0x31).
    pub day: u8,
    /// Day of the week (0x00-0x06).
    pub day_of_week: u8,
    /// Hour of the day (0x00-0x23 in 24-hour mode).
    pub hour: u8,
    /// Minute of the hour (0x00-0x59).
    pub minute: u8,
    /// Second of the minute (0x00-0x59).
    pub second: u8,
}

/// A status and date/time capture from one read cycle.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct RawRtcRecord {
    /// Status register.
    pub status: RtcStatus,
    /// Date and time registers.
    pub datetime: BcdDateTime,
}

impl RawRtcRecord {
    /// Stand-in record handed out when the chip cannot be trusted: 2000-01-01 00:00:00.
    pub const DUMMY: RawRtcRecord = RawRtcRecord {
        status: RtcStatus::empty(),
        datetime: BcdDateTime {
            year: 0x00,
            month: 0x01,
            day: 0x01,
            day_of_week: 0x00,
            hour: 0x00,
            minute: 0x00,
            second: 0x00,
        },
    };
}

/// Result byte of the chip's probe sequence.
///
/// The low nibble is 1 when the chip answered; the high nibble carries the chip's own
/// diagnostic warning bits.
#[cfg_attr(all(feature = "defmt", not(test)), derive(defmt::Format))]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct ProbeResult(pub u8);

impl ProbeResult {
    /// True when the chip is present and responding.
    pub const fn is_present(&self) -> bool {
        self.0 & 0x0F == 1
    }

    /// The diagnostic warning bits, shifted down to 0-15.
    pub const fn warnings(&self) -> u8 {
        self.0 >> 4
    }

    /// True when any diagnostic warning bit is set.
    pub const fn has_warnings(&self) -> bool {
        self.warnings() != 0
    }
}

impl From<u8> for ProbeResult {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
