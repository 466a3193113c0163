// SPDX-License-Identifier: MIT

//!
//! Value range
//!

/// A running minimum and maximum over a stream of values.
///
/// Before any value has been added [`ValueRange::lower`] and
/// [`ValueRange::upper`] return `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValueRange {
    bounds: Option<(f64, f64)>,
}

impl ValueRange {
    /// Create a new, empty, [`ValueRange`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a new value into the range
    pub fn extend(&mut self, value: f64) {
        self.bounds = match self.bounds {
            None => Some((value, value)),
            Some((lower, upper)) => Some((lower.min(value), upper.max(value))),
        };
    }

    /// Whether no value has been added yet
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// The smallest value seen
    pub fn lower(&self) -> Option<f64> {
        self.bounds.map(|(lower, _)| lower)
    }

    /// The largest value seen
    pub fn upper(&self) -> Option<f64> {
        self.bounds.map(|(_, upper)| upper)
    }

    /// The distance between the smallest and largest values (`0.0` if empty)
    pub fn diameter(&self) -> f64 {
        self.bounds.map_or(0.0, |(lower, upper)| upper - lower)
    }

    /// Where `value` lies in the range, from `0.0` (lower) to `1.0` (upper).
    /// Values outside the range are clamped.  If every value seen was the same
    /// the position is `1.0`.
    pub fn relative_position(&self, value: f64) -> Option<f64> {
        let (lower, upper) = self.bounds?;
        if upper <= lower {
            return Some(1.0);
        }
        Some(((value - lower) / (upper - lower)).clamp(0.0, 1.0))
    }
}

impl FromIterator<f64> for ValueRange {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut range = ValueRange::new();
        for value in iter {
            range.extend(value);
        }
        range
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let range = ValueRange::new();
        assert!(range.is_empty());
        assert_eq!(range.lower(), None);
        assert_eq!(range.upper(), None);
        assert_eq!(range.diameter(), 0.0);
        assert_eq!(range.relative_position(3.0), None);
    }

    #[test]
    fn extend() {
        let mut range = ValueRange::new();
        range.extend(3.0);
        assert_eq!((range.lower(), range.upper()), (Some(3.0), Some(3.0)));
        range.extend(1.0);
        range.extend(7.0);
        range.extend(5.0);
        assert_eq!((range.lower(), range.upper()), (Some(1.0), Some(7.0)));
        assert_eq!(range.diameter(), 6.0);
    }

    #[test]
    fn relative_position() {
        let range: ValueRange = [2.0, 4.0, 6.0].into_iter().collect();
        assert_eq!(range.relative_position(2.0), Some(0.0));
        assert_eq!(range.relative_position(4.0), Some(0.5));
        assert_eq!(range.relative_position(6.0), Some(1.0));
        assert_eq!(range.relative_position(100.0), Some(1.0));

        let single: ValueRange = [5.0].into_iter().collect();
        assert_eq!(single.relative_position(5.0), Some(1.0));
    }
}
