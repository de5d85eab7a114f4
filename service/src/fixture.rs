//! Common fixtures for testing.

use common::{operations::Insert, Date, Money};
use rust_decimal::Decimal;

use crate::{
    domain::{property, user, Property, User},
    infra::{Database as _, Memory},
    Service,
};

/// Parses the given ISO 8601 `day`.
pub(crate) fn date(day: &str) -> Date {
    Date::from_iso8601(day).unwrap()
}

/// Builds a [`Money`] of the given whole `amount` of Mexican pesos.
pub(crate) fn mxn(amount: i64) -> Money {
    Money::mxn(Decimal::from(amount))
}

/// Builds a [`Service`] on top of an empty [`Memory`] store.
pub(crate) fn service() -> Service<Memory> {
    Service::new(crate::Config::default(), Memory::empty())
}

/// Builds a [`Service`] on top of a pre-populated [`Memory`] store.
pub(crate) fn seeded_service() -> Service<Memory> {
    Service::new(crate::Config::default(), Memory::seeded())
}

/// Builds a [`Service`] with a guest (ID 1), a host (ID 2) and a bookable
/// [`Property`] (ID 1) priced at 2800 MXN a night.
pub(crate) async fn service_with_property() -> Service<Memory> {
    let service = service();

    let guest = service
        .database()
        .execute(Insert(User {
            id: user::Id::default(),
            name: user::Name::new("Ana García").unwrap(),
            email: user::Email::new("ana.garcia@email.com").unwrap(),
            phone: user::Phone::new("555-123-4567"),
            role: user::Role::Guest,
            bank_account: None,
            registered_on: date("2025-01-10").coerce(),
        }))
        .await
        .unwrap();
    assert_eq!(guest.id, 1.into());

    let stored = service
        .database()
        .execute(Insert(host()))
        .await
        .unwrap();
    assert_eq!(stored.id, 2.into());

    let property = service
        .database()
        .execute(Insert(Property {
            id: property::Id::default(),
            name: property::Name::new("Casa Roma Norte").unwrap(),
            kind: property::Kind::House,
            address: property::Address {
                street: "Calle Colima 145".into(),
                zone: "Roma Norte".into(),
                city: "Ciudad de México".into(),
                state: "CDMX".into(),
                country: "México".into(),
            },
            capacity: 6,
            num_rooms: 3,
            num_baths: 2,
            area_m2: Some(120),
            amenities: property::Amenities {
                wifi: true,
                parking: true,
                ..property::Amenities::default()
            },
            nightly_rate: mxn(2800),
            host_id: stored.id,
            status: property::Status::Available,
        }))
        .await
        .unwrap();
    assert_eq!(property.id, 1.into());

    service
}

/// Builds an unstored [`User`] with the [`user::Role::Host`] role.
pub(crate) fn host() -> User {
    User {
        id: user::Id::default(),
        name: user::Name::new("Carlos Mendoza").unwrap(),
        email: user::Email::new("carlos.mendoza@email.com").unwrap(),
        phone: None,
        role: user::Role::Host,
        bank_account: Some(user::BankAccount {
            bank: user::Name::new("BBVA").unwrap(),
            clabe: user::Clabe::new("012180001234567897").unwrap(),
            holder: user::Name::new("Carlos Mendoza").unwrap(),
        }),
        registered_on: date("2025-01-05").coerce(),
    }
}
