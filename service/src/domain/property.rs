//! [`Property`] definitions.

use std::str::FromStr;

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::user;

/// Rental property listed on the platform.
#[derive(Clone, Debug, From)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Name`] of this [`Property`].
    pub name: Name,

    /// [`Kind`] of this [`Property`].
    pub kind: Kind,

    /// [`Address`] of this [`Property`].
    pub address: Address,

    /// Maximum number of guests this [`Property`] accommodates.
    pub capacity: u16,

    /// Number of rooms in this [`Property`].
    pub num_rooms: u16,

    /// Number of bathrooms in this [`Property`].
    pub num_baths: u16,

    /// Floor area of this [`Property`] in square meters, if known.
    pub area_m2: Option<u32>,

    /// [`Amenities`] of this [`Property`].
    pub amenities: Amenities,

    /// Price of a single night stay in this [`Property`].
    pub nightly_rate: Money,

    /// ID of the [`User`] hosting this [`Property`].
    ///
    /// [`User`]: super::User
    pub host_id: user::Id,

    /// [`Status`] of this [`Property`].
    pub status: Status,
}

/// ID of a [`Property`].
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

/// Name of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "Standalone house."]
        House = 1,

        #[doc = "Apartment in a building."]
        Apartment = 2,

        #[doc = "Single-room studio."]
        Studio = 3,

        #[doc = "Open-plan loft."]
        Loft = 4,

        #[doc = "Top-floor penthouse."]
        Penthouse = 5,
    }
}

/// Postal address of a [`Property`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Address {
    /// Street line of this [`Address`].
    pub street: String,

    /// Zone (neighborhood) of this [`Address`].
    pub zone: String,

    /// City of this [`Address`].
    pub city: String,

    /// State of this [`Address`].
    pub state: String,

    /// Country of this [`Address`].
    pub country: String,
}

/// Amenities offered by a [`Property`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Amenities {
    /// Swimming pool.
    pub pool: bool,

    /// Parking spot.
    pub parking: bool,

    /// Wireless internet.
    pub wifi: bool,

    /// Air conditioning.
    pub air_conditioning: bool,

    /// Whether pets are allowed.
    pub pets_allowed: bool,
}

define_kind! {
    #[doc = "Status of a [`Property`]."]
    enum Status {
        #[doc = "Open for new reservations."]
        Available = 1,

        #[doc = "Hidden from booking, existing reservations stand."]
        Unlisted = 2,
    }
}
