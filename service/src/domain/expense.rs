//! [`Expense`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateOf, Money, Percent};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::property;

/// Operating expense of the platform.
#[derive(Clone, Debug, From)]
pub struct Expense {
    /// ID of this [`Expense`].
    pub id: Id,

    /// [`Category`] of this [`Expense`].
    pub category: Category,

    /// ID of the [`Property`] this [`Expense`] is attributed to, if any.
    ///
    /// [`Property`]: super::Property
    pub property_id: Option<property::Id>,

    /// Name of the provider billing this [`Expense`].
    pub provider: Provider,

    /// [`Description`] of this [`Expense`].
    pub description: Description,

    /// [`Date`] when this [`Expense`] was incurred.
    ///
    /// [`Date`]: common::Date
    pub incurred_on: IncurrenceDate,

    /// Amount before tax.
    pub base: Money,

    /// Value-added tax on the [`base`] amount.
    ///
    /// [`base`]: Expense::base
    pub tax: Money,

    /// Total paid: [`base`] plus [`tax`].
    ///
    /// [`base`]: Expense::base
    /// [`tax`]: Expense::tax
    pub total: Money,

    /// [`Status`] of this [`Expense`].
    pub status: Status,
}

impl Expense {
    /// Mexican value-added tax (IVA) rate applied to expenses.
    #[must_use]
    pub fn iva() -> Percent {
        Percent::from_points(16)
    }
}

/// ID of an [`Expense`].
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
    #[doc = "Category of an [`Expense`] as booked."]
    enum Category {
        #[doc = "Marketing campaigns."]
        Marketing = 1,

        #[doc = "Paid advertising."]
        Advertising = 2,

        #[doc = "Staff salaries."]
        Staff = 3,

        #[doc = "Payroll and benefits."]
        Payroll = 4,

        #[doc = "Software subscriptions."]
        Software = 5,

        #[doc = "Hosting and infrastructure."]
        Infrastructure = 6,

        #[doc = "Legal counsel."]
        Legal = 7,

        #[doc = "Taxes and government fees."]
        Taxes = 8,

        #[doc = "Payment processing fees."]
        PaymentFees = 9,

        #[doc = "Day-to-day operations."]
        Operations = 10,

        #[doc = "Upkeep of listed properties."]
        PropertyUpkeep = 11,

        #[doc = "Anything else."]
        Other = 12,
    }
}

impl Category {
    /// Returns the reporting [`Bucket`] this [`Category`] rolls up into.
    #[must_use]
    pub fn bucket(self) -> Bucket {
        match self {
            Self::Marketing | Self::Advertising => Bucket::Marketing,
            Self::Staff | Self::Payroll => Bucket::Payroll,
            Self::Software | Self::Infrastructure => Bucket::Software,
            Self::Operations | Self::PropertyUpkeep => Bucket::Operational,
            Self::Legal | Self::Taxes | Self::PaymentFees => Bucket::Legal,
            Self::Other => Bucket::Other,
        }
    }
}

define_kind! {
    #[doc = "Reporting bucket [`Expense`] categories roll up into."]
    enum Bucket {
        #[doc = "Marketing and advertising."]
        Marketing = 1,

        #[doc = "Salaries and benefits."]
        Payroll = 2,

        #[doc = "Software and infrastructure."]
        Software = 3,

        #[doc = "Operations and property upkeep."]
        Operational = 4,

        #[doc = "Legal, taxes and processing fees."]
        Legal = 5,

        #[doc = "Everything else."]
        Other = 6,
    }
}

impl Bucket {
    /// All the [`Bucket`]s, in reporting order.
    pub const ALL: [Self; 6] = [
        Self::Marketing,
        Self::Payroll,
        Self::Software,
        Self::Operational,
        Self::Legal,
        Self::Other,
    ];
}

define_kind! {
    #[doc = "Status of an [`Expense`]."]
    enum Status {
        #[doc = "Settled with the provider."]
        Paid = 1,

        #[doc = "Awaiting settlement."]
        Pending = 2,
    }
}

/// Name of the provider billing an [`Expense`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Provider(String);

impl Provider {
    /// Creates a new [`Provider`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Provider`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Provider`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Provider {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Provider`")
    }
}

/// Description of an [`Expense`].
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

/// [`Date`] when an [`Expense`] was incurred.
///
/// [`Date`]: common::Date
pub type IncurrenceDate = DateOf<(Expense, unit::Incurrence)>;

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{Bucket, Category, Expense};

    #[test]
    fn rolls_categories_into_buckets() {
        for (category, bucket) in [
            (Category::Marketing, Bucket::Marketing),
            (Category::Advertising, Bucket::Marketing),
            (Category::Staff, Bucket::Payroll),
            (Category::Payroll, Bucket::Payroll),
            (Category::Software, Bucket::Software),
            (Category::Infrastructure, Bucket::Software),
            (Category::Operations, Bucket::Operational),
            (Category::PropertyUpkeep, Bucket::Operational),
            (Category::PaymentFees, Bucket::Legal),
            (Category::Legal, Bucket::Legal),
            (Category::Taxes, Bucket::Legal),
            (Category::Other, Bucket::Other),
        ] {
            assert_eq!(category.bucket(), bucket);
        }
    }

    #[test]
    fn applies_iva() {
        assert_eq!(
            Expense::iva().of(Decimal::from(1000)),
            Decimal::from(160),
        );
    }
}
