//! Closed integer intervals for distance, level, and axis-offset tests.

use crate::error::SelectorError;

/// A closed integer interval, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: i32,
    max: i32,
}

impl IntRange {
    /// Create a range. Errors if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, SelectorError> {
        if min > max {
            return Err(SelectorError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Membership test, inclusive on both ends.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Whether `value` lies between `a` and `b` inclusive, in either order.
///
/// Used for axis offsets, where the offset may be negative and the interval
/// endpoints arrive unordered.
pub fn is_between_unordered(value: f32, a: f32, b: f32) -> bool {
    if a <= b {
        value >= a && value <= b
    } else {
        value >= b && value <= a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let range = IntRange::new(3, 9).unwrap();
        assert!(range.contains(3));
        assert!(range.contains(9));
        assert!(range.contains(6));
        assert!(!range.contains(2));
        assert!(!range.contains(10));
    }

    #[test]
    fn single_value_range() {
        let range = IntRange::new(5, 5).unwrap();
        assert!(range.contains(5));
        assert!(!range.contains(4));
        assert!(!range.contains(6));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            IntRange::new(7, 2),
            Err(SelectorError::InvalidRange { min: 7, max: 2 })
        );
    }

    #[test]
    fn negative_bounds() {
        let range = IntRange::new(-10, -3).unwrap();
        assert!(range.contains(-10));
        assert!(range.contains(-3));
        assert!(!range.contains(0));
    }

    #[test]
    fn between_unordered_both_directions() {
        assert!(is_between_unordered(5.0, 0.0, 10.0));
        assert!(is_between_unordered(5.0, 10.0, 0.0));
        assert!(is_between_unordered(0.0, 0.0, 10.0));
        assert!(is_between_unordered(10.0, 10.0, 0.0));
        assert!(!is_between_unordered(-0.5, 0.0, 10.0));
        assert!(!is_between_unordered(10.5, 10.0, 0.0));
    }
}
