//! Host CPU interrupt masking.

/// Masks and restores the host's interrupts.
///
/// `disable` returns whatever the host needs to put the previous enable state back (e.g. the
/// old value of the interrupt master enable register). It must be safe to call `disable` while
/// interrupts are already masked; `restore` then puts back the masked state.
pub trait InterruptMask {
    /// Saved interrupt-enable state.
    type State: Copy;

    /// Disables interrupts and returns the previous state.
    fn disable(&mut self) -> Self::State;

    /// Restores a state previously returned by [`InterruptMask::disable`].
    fn restore(&mut self, state: Self::State);
}

impl<T: InterruptMask + ?Sized> InterruptMask for &mut T {
    type State = T::State;

    #[inline]
    fn disable(&mut self) -> Self::State {
        T::disable(self)
    }

    #[inline]
    fn restore(&mut self, state: Self::State) {
        T::restore(self, state)
    }
}
