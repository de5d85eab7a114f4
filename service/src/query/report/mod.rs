//! Financial reporting [`Query`]s.
//!
//! [`Query`]: super::Query

pub mod income_statement;
pub mod vault;

use common::Date;

pub use self::{income_statement::IncomeStatement, vault::Vault};

/// Reporting window a financial figure is aggregated over.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Period {
    /// Whole recorded history.
    #[default]
    All,

    /// Seven days back from today, inclusive.
    LastWeek,

    /// One calendar month back from today, inclusive.
    ///
    /// Lands on the same day number of the previous month, clamped to its
    /// last day when the previous month is shorter.
    LastMonth,
}

impl Period {
    /// Returns the earliest [`Date`] still inside this [`Period`], if it's
    /// bounded at all.
    ///
    /// An unrepresentable cutoff (earlier than the calendar supports) makes
    /// the [`Period`] unbounded.
    #[must_use]
    pub fn cutoff(self, today: Date) -> Option<Date> {
        match self {
            Self::All => None,
            Self::LastWeek => today.minus_days(7),
            Self::LastMonth => today.minus_months(1),
        }
    }

    /// Indicates whether the provided [`Date`] falls into this [`Period`]
    /// as seen from `today`.
    #[must_use]
    pub fn includes(self, today: Date, on: Date) -> bool {
        self.cutoff(today).is_none_or(|cutoff| on >= cutoff)
    }
}

#[cfg(test)]
mod spec {
    use crate::fixture;

    use super::Period;

    #[test]
    fn all_is_unbounded() {
        let today = fixture::date("2025-06-15");

        assert_eq!(Period::All.cutoff(today), None);
        assert!(Period::All.includes(today, fixture::date("1970-01-01")));
    }

    #[test]
    fn last_week_cuts_seven_days_back() {
        let today = fixture::date("2025-06-15");

        assert_eq!(
            Period::LastWeek.cutoff(today),
            Some(fixture::date("2025-06-08")),
        );
        assert!(Period::LastWeek.includes(today, fixture::date("2025-06-08")));
        assert!(!Period::LastWeek.includes(today, fixture::date("2025-06-07")));
    }

    #[test]
    fn last_month_clamps_to_shorter_months() {
        assert_eq!(
            Period::LastMonth.cutoff(fixture::date("2025-03-31")),
            Some(fixture::date("2025-02-28")),
        );
        assert_eq!(
            Period::LastMonth.cutoff(fixture::date("2025-07-15")),
            Some(fixture::date("2025-06-15")),
        );
    }
}
