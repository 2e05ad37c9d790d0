//! Fake RTC chip and interrupt controller for unit tests.

use std::cell::Cell;
use std::rc::Rc;

use rtc_hal::{BcdDateTime, InterruptMask, ProbeResult, RawRtcRecord, RtcStatus, SiiRtc};

/// Interrupt master enable shared between the fakes.
pub type Ime = Rc<Cell<bool>>;

/// Interrupt controller backed by a shared enable flag.
pub struct FakeIrq {
    pub ime: Ime,
    pub disables: usize,
    pub restores: usize,
}

impl FakeIrq {
    pub fn new(ime: &Ime) -> Self {
        Self {
            ime: ime.clone(),
            disables: 0,
            restores: 0,
        }
    }
}

impl InterruptMask for FakeIrq {
    type State = bool;

    fn disable(&mut self) -> bool {
        self.disables += 1;
        self.ime.replace(false)
    }

    fn restore(&mut self, state: bool) {
        self.restores += 1;
        self.ime.set(state);
    }
}

/// RTC chip that serves fixed register contents and counts transactions.
pub struct FakeRtc {
    pub ime: Ime,
    pub probe: u8,
    pub status: RtcStatus,
    pub datetime: BcdDateTime,
    pub probes: usize,
    pub unprotects: usize,
    pub status_reads: usize,
    pub datetime_reads: usize,
    /// Transactions issued while interrupts were enabled.
    pub unmasked_accesses: usize,
}

impl FakeRtc {
    /// A healthy chip reading 2024-02-29 (Thursday) 23:59:58 in 24-hour mode.
    pub fn healthy(ime: &Ime) -> Self {
        Self {
            ime: ime.clone(),
            probe: 0x01,
            status: RtcStatus::HOUR_24,
            datetime: BcdDateTime {
                year: 0x24,
                month: 0x02,
                day: 0x29,
                day_of_week: 0x04,
                hour: 0x23,
                minute: 0x59,
                second: 0x58,
            },
            probes: 0,
            unprotects: 0,
            status_reads: 0,
            datetime_reads: 0,
            unmasked_accesses: 0,
        }
    }

    pub fn record(&self) -> RawRtcRecord {
        RawRtcRecord {
            status: self.status,
            datetime: self.datetime,
        }
    }

    fn access(&mut self) {
        if self.ime.get() {
            self.unmasked_accesses += 1;
        }
    }
}

impl SiiRtc for FakeRtc {
    fn probe(&mut self) -> ProbeResult {
        self.access();
        self.probes += 1;
        ProbeResult(self.probe)
    }

    fn unprotect(&mut self) {
        self.access();
        self.unprotects += 1;
    }

    fn read_status(&mut self) -> RtcStatus {
        self.access();
        self.status_reads += 1;
        self.status
    }

    fn read_datetime(&mut self) -> BcdDateTime {
        self.access();
        self.datetime_reads += 1;
        self.datetime
    }
}

/// A healthy chip and an interrupt controller sharing an enabled IME.
pub fn fakes() -> (FakeRtc, FakeIrq) {
    let ime = Rc::new(Cell::new(true));
    (FakeRtc::healthy(&ime), FakeIrq::new(&ime))
}
