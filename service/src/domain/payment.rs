//! [`Payment`] definitions.

use common::{define_kind, unit, DateOf, Money};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use super::reservation;

/// Money collected from a guest for a [`Reservation`].
///
/// [`Reservation`]: super::Reservation
#[derive(Clone, Debug, From)]
pub struct Payment {
    /// ID of this [`Payment`].
    pub id: Id,

    /// ID of the paid [`Reservation`].
    ///
    /// [`Reservation`]: super::Reservation
    pub reservation_id: reservation::Id,

    /// [`Date`] when this [`Payment`] was collected.
    ///
    /// [`Date`]: common::Date
    pub paid_on: CollectionDate,

    /// Full amount collected from the guest.
    pub gross: Money,

    /// Platform commission withheld from the [`gross`] amount.
    ///
    /// [`gross`]: Payment::gross
    pub commission: Money,

    /// Amount owed to the host: [`gross`] less [`commission`].
    ///
    /// [`gross`]: Payment::gross
    /// [`commission`]: Payment::commission
    pub net: Money,

    /// [`Method`] this [`Payment`] was collected with.
    pub method: Method,

    /// [`Status`] of this [`Payment`].
    pub status: Status,

    /// [`Date`] when the [`net`] amount was paid out to the host.
    ///
    /// [`net`]: Payment::net
    /// [`Date`]: common::Date
    pub disbursed_on: Option<DisbursementDate>,
}

impl Payment {
    /// Indicates whether this [`Payment`] counts towards commission revenue.
    ///
    /// Disbursing a [`Payment`] to the host doesn't undo the collected
    /// commission, so only refunds are excluded.
    #[must_use]
    pub fn counts_as_revenue(&self) -> bool {
        match self.status {
            Status::Paid => true,
            Status::Refunded => false,
        }
    }

    /// Indicates whether the [`net`] amount has been paid out to the host.
    ///
    /// [`net`]: Payment::net
    #[must_use]
    pub fn is_disbursed(&self) -> bool {
        self.disbursed_on.is_some()
    }
}

/// ID of a [`Payment`].
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
    #[doc = "Method a [`Payment`] was collected with."]
    enum Method {
        #[doc = "Credit or debit card."]
        Card = 1,

        #[doc = "Bank transfer."]
        Transfer = 2,

        #[doc = "Cash."]
        Cash = 3,
    }
}

define_kind! {
    #[doc = "Status of a [`Payment`]."]
    enum Status {
        #[doc = "Collected from the guest."]
        Paid = 1,

        #[doc = "Returned to the guest."]
        Refunded = 2,
    }
}

/// [`Date`] when a [`Payment`] was collected.
///
/// [`Date`]: common::Date
pub type CollectionDate = DateOf<(Payment, unit::Collection)>;

/// [`Date`] when a [`Payment`]'s net amount was paid out to the host.
///
/// [`Date`]: common::Date
pub type DisbursementDate = DateOf<(Payment, unit::Disbursement)>;
