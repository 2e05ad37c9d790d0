//! Scoped interrupt masking.

use rtc_hal::InterruptMask;

/// Keeps host interrupts masked for as long as it is alive.
///
/// The previous enable state is saved on creation and put back on drop, so it is restored on
/// every exit path of the enclosing scope, unwinding included. Guards nest.
pub struct InterruptGuard<'a, I: InterruptMask> {
    mask: &'a mut I,
    saved: I::State,
}

impl<'a, I: InterruptMask> InterruptGuard<'a, I> {
    /// Masks interrupts until the guard is dropped.
    pub fn new(mask: &'a mut I) -> Self {
        let saved = mask.disable();
        Self { mask, saved }
    }
}

impl<I: InterruptMask> Drop for InterruptGuard<'_, I> {
    fn drop(&mut self) {
        self.mask.restore(self.saved);
    }
}
