//! Periodic resynchronisation of the local time from the RTC.

use rtc_hal::{InterruptMask, RawRtcRecord, SiiRtc};

use crate::config::ClockConfig;
use crate::local_time::LocalTime;
use crate::session::RtcSession;

/// Host-side copy of the RTC's date and time, refreshed from the chip at a bounded rate.
///
/// [`LocalClock::calc_local_time`] is meant to be called once per host tick. When the tick
/// counter is zero the RTC session is re-initialised and the local time is copied from its
/// validated capture; the counter then counts up to the configured threshold and wraps back
/// to zero on the following tick, so one refresh window spans `threshold + 1` ticks.
pub struct LocalClock<R: SiiRtc, I: InterruptMask> {
    session: RtcSession<R, I>,
    config: ClockConfig,
    time: LocalTime,
    counter: u8,
}

impl<R: SiiRtc, I: InterruptMask> LocalClock<R, I> {
    /// Creates a clock that will initialise `session` on its first tick.
    pub fn new(session: RtcSession<R, I>, config: ClockConfig) -> Self {
        let time = LocalTime::from_record(&RawRtcRecord::DUMMY, config.base_year).unwrap_or_default();
        Self {
            session,
            config,
            time,
            counter: 0,
        }
    }

    /// Advances the tick counter, resynchronising with the RTC when a window starts.
    pub fn calc_local_time(&mut self) {
        if self.counter == 0 {
            self.session.init();
            self.update_from_rtc();
        } else if self.counter >= self.config.threshold() {
            self.counter = 0;
            return;
        }

        self.counter += 1;
    }

    /// Makes the next [`LocalClock::calc_local_time`] resynchronise with the RTC.
    pub fn force_clock_update(&mut self) {
        log::trace!("rtc: forced resync at tick {}", self.counter);
        self.counter = 0;
    }

    fn update_from_rtc(&mut self) {
        let Some(record) = self.session.validated_record() else {
            log::warn!(
                "rtc: keeping local time, chip status {}",
                self.session.error_status()
            );
            return;
        };

        match LocalTime::from_record(record, self.config.base_year) {
            Ok(time) => self.time = time,
            Err(err) => log::warn!("rtc: keeping local time, {}", err),
        }
    }

    /// The local time as of the last successful resync.
    pub fn local_time(&self) -> &LocalTime {
        &self.time
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn session(&self) -> &RtcSession<R, I> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut RtcSession<R, I> {
        &mut self.session
    }
}
