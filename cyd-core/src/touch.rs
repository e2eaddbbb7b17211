//! Raw digitizer samples and the press consensus filter
//!
//! A resistive film is noisy: a light or sliding contact produces readings
//! that wander, and a finger lifting mid-conversion produces one-off spikes.
//! The filter accepts a press only when three consecutive samples agree,
//! then averages them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::TouchConfig;

/// One pair of 12-bit readings, before calibration
///
/// `(0, 0)` is reserved for "no contact" and never a real position: the
/// usable range of the film stops well short of the rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawSample {
    pub x: u16,
    pub y: u16,
}

impl RawSample {
    /// The "no contact" sentinel
    pub const NONE: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Build a sample from two axis readings, rejecting rail-edge values
    ///
    /// If either reading falls outside `[min_raw, max_raw]` the whole
    /// sample becomes [`RawSample::NONE`].
    pub const fn from_readings(x: u16, y: u16, min_raw: u16, max_raw: u16) -> Self {
        if x < min_raw || y < min_raw || x > max_raw || y > max_raw {
            Self::NONE
        } else {
            Self { x, y }
        }
    }

    /// Whether this is the "no contact" sentinel
    pub const fn is_none(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Why a set of samples did not produce a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// The first sample saw no contact
    NoContact,
    /// A later sample saw no contact; a tap too short to trust
    Blip,
    /// Samples disagree by more than the jitter limit
    Unsteady,
}

/// Three-sample agreement check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsensusFilter {
    max_jitter: u16,
    symmetric: bool,
}

impl ConsensusFilter {
    /// Create a filter
    ///
    /// With `symmetric` false, the Y axis is only checked between the first
    /// and second samples; the third Y reading is averaged in unchecked.
    pub const fn new(max_jitter: u16, symmetric: bool) -> Self {
        Self {
            max_jitter,
            symmetric,
        }
    }

    pub const fn from_config(config: &TouchConfig) -> Self {
        Self::new(config.max_jitter, config.symmetric_check)
    }

    /// Decide whether three samples describe one steady press
    ///
    /// On success returns the per-axis average, truncated.
    pub fn evaluate(&self, s1: RawSample, s2: RawSample, s3: RawSample) -> Result<RawSample, Rejection> {
        if s1.is_none() {
            return Err(Rejection::NoContact);
        }
        if s2.is_none() || s3.is_none() {
            return Err(Rejection::Blip);
        }

        let limit = self.max_jitter;
        let unsteady = s1.x.abs_diff(s2.x) > limit
            || s1.x.abs_diff(s3.x) > limit
            || s1.y.abs_diff(s2.y) > limit
            || (self.symmetric && s1.y.abs_diff(s3.y) > limit);
        if unsteady {
            return Err(Rejection::Unsteady);
        }

        Ok(RawSample::new(
            mean3(s1.x, s2.x, s3.x),
            mean3(s1.y, s2.y, s3.y),
        ))
    }
}

impl Default for ConsensusFilter {
    fn default() -> Self {
        Self::from_config(&TouchConfig::default())
    }
}

fn mean3(a: u16, b: u16, c: u16) -> u16 {
    ((a as u32 + b as u32 + c as u32) / 3) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s(x: u16, y: u16) -> RawSample {
        RawSample::new(x, y)
    }

    #[test]
    fn test_from_readings_window() {
        assert_eq!(RawSample::from_readings(100, 4000, 100, 4000), s(100, 4000));
        assert!(RawSample::from_readings(99, 2000, 100, 4000).is_none());
        assert!(RawSample::from_readings(2000, 4001, 100, 4000).is_none());
        assert!(RawSample::from_readings(0, 0, 100, 4000).is_none());
    }

    #[test]
    fn test_first_sample_empty() {
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(RawSample::NONE, s(100, 100), s(100, 100)),
            Err(Rejection::NoContact)
        );
    }

    #[test]
    fn test_blip_rejected() {
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(s(100, 100), RawSample::NONE, s(105, 100)),
            Err(Rejection::Blip)
        );
        assert_eq!(
            filter.evaluate(s(100, 100), s(105, 100), RawSample::NONE),
            Err(Rejection::Blip)
        );
    }

    #[test]
    fn test_moving_x_rejected() {
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(s(100, 100), s(200, 100), s(100, 100)),
            Err(Rejection::Unsteady)
        );
        assert_eq!(
            filter.evaluate(s(100, 100), s(100, 100), s(151, 100)),
            Err(Rejection::Unsteady)
        );
    }

    #[test]
    fn test_moving_y_rejected() {
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(s(100, 100), s(100, 151), s(100, 100)),
            Err(Rejection::Unsteady)
        );
    }

    #[test]
    fn test_jitter_limit_is_inclusive() {
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(s(100, 100), s(150, 150), s(150, 100)),
            Ok(s(133, 116))
        );
    }

    #[test]
    fn test_truncated_average() {
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(s(100, 100), s(110, 100), s(105, 100)),
            Ok(s(105, 100))
        );
        // (100 + 101 + 101) / 3 = 100.67 -> 100
        assert_eq!(
            filter.evaluate(s(100, 100), s(101, 101), s(101, 101)),
            Ok(s(100, 100))
        );
    }

    #[test]
    fn test_y1_y3_not_compared_by_default() {
        // The stock filter never compares the first and third Y readings, so
        // a Y jump on the last sample is averaged in.
        let filter = ConsensusFilter::default();
        assert_eq!(
            filter.evaluate(s(1000, 1000), s(1000, 1000), s(1000, 1300)),
            Ok(s(1000, 1100))
        );
    }

    #[test]
    fn test_symmetric_check_compares_y1_y3() {
        let filter = ConsensusFilter::new(50, true);
        assert_eq!(
            filter.evaluate(s(1000, 1000), s(1000, 1000), s(1000, 1300)),
            Err(Rejection::Unsteady)
        );
    }

    proptest! {
        #[test]
        fn prop_accepted_average_lies_between_samples(
            x in 100u16..=4000,
            y in 100u16..=4000,
            dx2 in 0u16..=50,
            dx3 in 0u16..=50,
            dy2 in 0u16..=50,
            dy3 in 0u16..=50,
        ) {
            let s1 = s(x, y);
            let s2 = s(x.saturating_sub(dx2).max(1), y.saturating_sub(dy2).max(1));
            let s3 = s(x.saturating_sub(dx3).max(1), y.saturating_sub(dy3).max(1));

            let avg = ConsensusFilter::new(50, true).evaluate(s1, s2, s3).unwrap();
            prop_assert!(avg.x <= x && avg.x >= x - 50);
            prop_assert!(avg.y <= y && avg.y >= y - 50);
        }
    }
}
