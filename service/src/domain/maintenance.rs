//! [`MaintenanceOrder`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateOf, Money};
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::property;

/// Maintenance work ordered for a [`Property`].
///
/// The platform bills the property owner the [`total`] amount while paying
/// the provider the [`base_cost`], keeping the difference as its markup.
///
/// [`Property`]: super::Property
/// [`total`]: MaintenanceOrder::total
/// [`base_cost`]: MaintenanceOrder::base_cost
#[derive(Clone, Debug, From)]
pub struct MaintenanceOrder {
    /// ID of this [`MaintenanceOrder`].
    pub id: Id,

    /// ID of the serviced [`Property`].
    ///
    /// [`Property`]: super::Property
    pub property_id: property::Id,

    /// [`Kind`] of this [`MaintenanceOrder`].
    pub kind: Kind,

    /// [`Description`] of the ordered work.
    pub description: Description,

    /// [`Date`] the work is scheduled for.
    ///
    /// [`Date`]: common::Date
    pub scheduled_on: SchedulingDate,

    /// Cost charged by the provider performing the work.
    pub base_cost: Money,

    /// Total billed to the property owner.
    pub total: Money,

    /// [`Status`] of this [`MaintenanceOrder`].
    pub status: Status,
}

impl MaintenanceOrder {
    /// Margin the platform keeps on this [`MaintenanceOrder`]: the billed
    /// [`total`] less the provider's [`base_cost`].
    ///
    /// [`total`]: MaintenanceOrder::total
    /// [`base_cost`]: MaintenanceOrder::base_cost
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.total.amount - self.base_cost.amount
    }
}

/// ID of a [`MaintenanceOrder`].
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
    #[doc = "Kind of a [`MaintenanceOrder`]."]
    enum Kind {
        #[doc = "Repairs something broken."]
        Corrective = 1,

        #[doc = "Scheduled upkeep."]
        Preventive = 2,

        #[doc = "Cleaning between stays."]
        Cleaning = 3,
    }
}

define_kind! {
    #[doc = "Status of a [`MaintenanceOrder`]."]
    enum Status {
        #[doc = "Ordered, work not started."]
        Pending = 1,

        #[doc = "Work underway."]
        InProgress = 2,

        #[doc = "Work done and billed."]
        Completed = 3,
    }
}

/// Description of the work a [`MaintenanceOrder`] covers.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `text` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates a new [`Description`] if the given `text` is valid.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        Self::check(&text).then_some(Self(text))
    }

    /// Checks whether the given `text` is a valid [`Description`].
    fn check(text: impl AsRef<str>) -> bool {
        let text = text.as_ref();
        !text.is_empty() && text.len() <= 1024
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// [`Date`] a [`MaintenanceOrder`]'s work is scheduled for.
///
/// [`Date`]: common::Date
pub type SchedulingDate = DateOf<(MaintenanceOrder, unit::Scheduling)>;
