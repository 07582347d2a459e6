//! Monotonic frame tick

/// Tick counter owned by the frame loop.
///
/// Each call to [`FrameCounter::next`] hands out the current value and then
/// advances. A frame takes two ticks: one for translation, one for rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounter {
    tick: u64,
}

impl FrameCounter {
    /// Create a counter starting at tick 0
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    /// Return the current tick, then advance by one
    pub fn next(&mut self) -> u64 {
        let tick = self.tick;
        self.tick = self.tick.wrapping_add(1);
        tick
    }

    /// Take two ticks in a fixed order: (translation, rotation)
    pub fn next_pair(&mut self) -> (u64, u64) {
        let first = self.next();
        let second = self.next();
        (first, second)
    }

    /// Peek at the next tick without advancing
    #[inline]
    pub fn current(&self) -> u64 {
        self.tick
    }
}
