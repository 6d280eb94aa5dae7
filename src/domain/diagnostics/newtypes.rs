// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Buffer capacity bounds (50 to 5000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 50;
    /// Maximum buffer capacity.
    pub const MAX: usize = 5000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// How many diagnostic events the admin panel keeps in memory.
///
/// Values outside `50..=5000` are clamped, so a `BufferCapacity` is always
/// usable as-is.
///
/// ```ignore
/// assert_eq!(BufferCapacity::new(10).value(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn in_range_values_are_kept() {
        assert_eq!(BufferCapacity::new(50).value(), 50);
        assert_eq!(BufferCapacity::new(2048).value(), 2048);
    }

    #[test]
    fn default_is_within_bounds() {
        let value = BufferCapacity::default().value();
        assert_eq!(value, buffer_capacity_bounds::DEFAULT);
        assert!((buffer_capacity_bounds::MIN..=buffer_capacity_bounds::MAX).contains(&value));
    }
}
