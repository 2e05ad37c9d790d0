//! Initialisation and guarded access to the RTC chip.

use rtc_hal::{BcdDateTime, InterruptMask, ProbeResult, RawRtcRecord, RtcStatus, SiiRtc};

use crate::guard::InterruptGuard;
use crate::validate::{validate, ErrorStatus};

/// Owns the RTC chip and tracks whether its data can be trusted.
///
/// Every chip transaction runs with host interrupts masked through an [`InterruptGuard`].
/// The session starts out in `INIT_ERROR` until [`RtcSession::init`] has been run; an
/// `INIT_ERROR` stays in place until the next `init`, nothing here retries on its own.
pub struct RtcSession<R: SiiRtc, I: InterruptMask> {
    rtc: R,
    irq: I,
    error_status: ErrorStatus,
    probe_result: ProbeResult,
    captured: RawRtcRecord,
}

impl<R: SiiRtc, I: InterruptMask> RtcSession<R, I> {
    /// Creates an uninitialised session.
    pub fn new(rtc: R, irq: I) -> Self {
        Self {
            rtc,
            irq,
            error_status: ErrorStatus::INIT_ERROR,
            probe_result: ProbeResult::default(),
            captured: RawRtcRecord::DUMMY,
        }
    }

    /// Probes the chip, captures its registers and validates them.
    ///
    /// Returns the new error status, which is also kept for [`RtcSession::error_status`].
    /// When the chip does not answer the probe the status is `INIT_ERROR` and nothing is read.
    /// Otherwise the status is the validation result, plus `INIT_WARNING` if the probe
    /// reported diagnostic warnings.
    pub fn init(&mut self) -> ErrorStatus {
        self.probe_result = {
            let _guard = InterruptGuard::new(&mut self.irq);
            self.rtc.unprotect();
            self.rtc.probe()
        };

        if !self.probe_result.is_present() {
            log::error!("rtc: chip not responding (probe {:#04x})", self.probe_result.0);
            self.error_status = ErrorStatus::INIT_ERROR;
            return self.error_status;
        }

        let mut status = ErrorStatus::empty();
        if self.probe_result.has_warnings() {
            log::warn!("rtc: probe raised warnings {:#x}", self.probe_result.warnings());
            status |= ErrorStatus::INIT_WARNING;
        }

        self.captured = self.raw_info();
        status |= validate(&self.captured);
        self.error_status = status;

        log::debug!("rtc: init finished, status {}", status);
        status
    }

    /// Health of the chip as of the last [`RtcSession::init`]. No hardware access.
    pub fn error_status(&self) -> ErrorStatus {
        self.error_status
    }

    /// Probe byte returned during the last [`RtcSession::init`].
    pub fn probe_result(&self) -> ProbeResult {
        self.probe_result
    }

    /// Returns a fresh capture of the chip, or [`RawRtcRecord::DUMMY`] when the last init
    /// found the chip missing or its data implausible.
    pub fn info(&mut self) -> RawRtcRecord {
        if self.error_status.is_fatal() {
            RawRtcRecord::DUMMY
        } else {
            self.raw_info()
        }
    }

    /// Reads the status and date/time registers without any validation.
    pub fn raw_info(&mut self) -> RawRtcRecord {
        let status = self.read_status();
        let datetime = self.read_datetime();
        RawRtcRecord { status, datetime }
    }

    /// Reads the status register.
    pub fn read_status(&mut self) -> RtcStatus {
        let _guard = InterruptGuard::new(&mut self.irq);
        self.rtc.read_status()
    }

    /// Reads the date and time registers.
    pub fn read_datetime(&mut self) -> BcdDateTime {
        let _guard = InterruptGuard::new(&mut self.irq);
        self.rtc.read_datetime()
    }

    /// The capture taken by the last [`RtcSession::init`], validated or not.
    pub fn captured(&self) -> &RawRtcRecord {
        &self.captured
    }

    /// The capture taken by the last [`RtcSession::init`], if it passed.
    pub fn validated_record(&self) -> Option<&RawRtcRecord> {
        if self.error_status.is_fatal() {
            None
        } else {
            Some(&self.captured)
        }
    }

    /// The underlying chip.
    pub fn rtc(&self) -> &R {
        &self.rtc
    }

    /// The underlying chip, e.g. for writing the time. Transactions made through this
    /// reference are not interrupt-protected by the session.
    pub fn rtc_mut(&mut self) -> &mut R {
        &mut self.rtc
    }

    /// Consumes the session and returns the chip and interrupt controller.
    pub fn release(self) -> (R, I) {
        (self.rtc, self.irq)
    }
}
