// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Round an f64 value to the nearest 0.001.  Keeps float noise (e.g.
/// `3.0000000000000004`) out of written documents.
pub(crate) fn round_f64_to_nearest_0_001(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid writing "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_f64_to_nearest_0_001() {
        assert_eq!(round_f64_to_nearest_0_001(3.0000000000000004), 3.0);
        assert_eq!(round_f64_to_nearest_0_001(0.12345), 0.123);
        assert_eq!(round_f64_to_nearest_0_001(-0.0001), 0.0);
        assert_eq!(round_f64_to_nearest_0_001(280.0), 280.0);
    }
}
