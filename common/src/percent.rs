//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be greater than `0` and less than `100`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Creates a new [`Percent`] from a whole number of percentage points,
    /// saturating at `100`.
    #[must_use]
    pub fn from_points(points: u8) -> Self {
        Self(Decimal::from(points.min(100)))
    }

    /// Takes this [`Percent`] of the given `amount`.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn takes_share_of_amount() {
        let commission = Percent::from_points(20);

        assert_eq!(
            commission.of(Decimal::from(14000)),
            Decimal::from(2800),
        );
        assert_eq!(commission.of(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn validates_bounds() {
        assert!(Percent::new(Decimal::from(100)).is_some());
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::from(101)).is_none());
        assert!(Percent::new(Decimal::from(-1)).is_none());
        assert_eq!(Percent::from_points(200), Percent::from_points(100));
    }
}
