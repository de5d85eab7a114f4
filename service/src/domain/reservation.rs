//! [`Reservation`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, Date, DateRange, DateTimeOf, Money, Nights};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::{property, user};

/// Stay booked by a guest in a [`Property`].
///
/// [`Property`]: super::Property
#[derive(Clone, Debug, From)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: Id,

    /// ID of the [`User`] who booked this [`Reservation`].
    ///
    /// [`User`]: super::User
    pub guest_id: user::Id,

    /// ID of the booked [`Property`].
    ///
    /// [`Property`]: super::Property
    pub property_id: property::Id,

    /// Booked days: check-in up to (and not including) check-out.
    pub period: DateRange,

    /// Price of a single night at the moment of booking.
    ///
    /// Snapshotted so that later rate changes don't affect this
    /// [`Reservation`].
    pub nightly_rate: Money,

    /// Total charged for this [`Reservation`].
    pub total: Money,

    /// [`Status`] of this [`Reservation`].
    pub status: Status,

    /// [`DateTime`] when this [`Reservation`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,

    /// Free-form [`Notes`] attached to this [`Reservation`].
    pub notes: Option<Notes>,
}

impl Reservation {
    /// Number of nights this [`Reservation`] spans.
    #[must_use]
    pub fn nights(&self) -> Nights {
        self.period.nights()
    }

    /// Derives the lifecycle [`State`] of this [`Reservation`] as observed
    /// on the `today` day.
    ///
    /// The state is never stored: it's a pure function of the booked period
    /// and the persisted [`Status`], so it can never drift out of sync with
    /// the calendar.
    #[must_use]
    pub fn state(&self, today: Date) -> State {
        match self.status {
            Status::Cancelled => State::Cancelled,
            Status::Confirmed => {
                if today < self.period.start() {
                    State::Upcoming
                } else if self.period.contains(today) {
                    State::Active
                } else {
                    State::Completed
                }
            }
        }
    }
}

/// ID of a [`Reservation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(i64);

define_kind! {
    #[doc = "Persisted status of a [`Reservation`]."]
    enum Status {
        #[doc = "Stands as booked."]
        Confirmed = 1,

        #[doc = "Called off, the booked days are released."]
        Cancelled = 2,
    }
}

/// Lifecycle state of a [`Reservation`] derived from the calendar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// Check-in lies in the future.
    Upcoming,

    /// Guest is currently staying.
    Active,

    /// Check-out has passed.
    Completed,

    /// [`Reservation`] was cancelled.
    Cancelled,
}

/// Free-form notes attached to a [`Reservation`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Notes(String);

impl Notes {
    /// Creates a new [`Notes`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `notes` match the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }

    /// Creates a new [`Notes`] if the given `notes` are valid.
    #[must_use]
    pub fn new(notes: impl Into<String>) -> Option<Self> {
        let notes = notes.into();
        Self::check(&notes).then_some(Self(notes))
    }

    /// Checks whether the given `notes` are valid [`Notes`].
    fn check(notes: impl AsRef<str>) -> bool {
        let notes = notes.as_ref();
        !notes.is_empty() && notes.len() <= 1024
    }
}

impl FromStr for Notes {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Notes`")
    }
}

/// [`DateTime`] when a [`Reservation`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Reservation, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::{DateRange, Money};
    use rust_decimal::Decimal;

    use super::{Reservation, State, Status};

    fn reservation(status: Status) -> Reservation {
        Reservation {
            id: 1.into(),
            guest_id: 1.into(),
            property_id: 456.into(),
            period: DateRange::new(
                "2025-11-10".parse().unwrap(),
                "2025-11-15".parse().unwrap(),
            )
            .unwrap(),
            nightly_rate: Money::mxn(Decimal::from(2800)),
            total: Money::mxn(Decimal::from(14000)),
            status,
            created_at: common::DateTime::UNIX_EPOCH.coerce(),
            notes: None,
        }
    }

    #[test]
    fn derives_state_from_calendar() {
        let r = reservation(Status::Confirmed);

        assert_eq!(r.state("2025-11-09".parse().unwrap()), State::Upcoming);
        assert_eq!(r.state("2025-11-10".parse().unwrap()), State::Active);
        assert_eq!(r.state("2025-11-14".parse().unwrap()), State::Active);
        // Check-out day is no longer occupied.
        assert_eq!(r.state("2025-11-15".parse().unwrap()), State::Completed);
    }

    #[test]
    fn cancelled_wins_over_calendar() {
        let r = reservation(Status::Cancelled);

        assert_eq!(r.state("2025-11-09".parse().unwrap()), State::Cancelled);
        assert_eq!(r.state("2025-11-12".parse().unwrap()), State::Cancelled);
        assert_eq!(r.state("2025-12-01".parse().unwrap()), State::Cancelled);
    }
}
