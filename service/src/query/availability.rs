//! [`Query`] checking whether a [`Property`] is free for a stay.
//!
//! [`Property`]: crate::domain::Property

use common::{
    operations::{By, Select},
    Date, DateRange,
};
use derive_more::Display;
use tracerr::Traced;

use crate::{
    domain::{property, reservation, Reservation},
    infra::{database, Database},
    read::reservation::Booked,
    Service,
};

use super::Query;

/// [`Query`] checking whether a [`Property`] may host a stay over the
/// provided days.
///
/// Doesn't verify the [`Property`] itself exists: a [`Property`] with no
/// booked [`Reservation`]s is reported as available.
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Copy, Debug)]
pub struct Availability {
    /// ID of the [`Property`] to check.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: property::Id,

    /// Day the stay starts on.
    pub check_in: Date,

    /// Day the stay ends on, exclusive.
    pub check_out: Date,

    /// [`Reservation`] to ignore while checking.
    ///
    /// Allows rescheduling an existing [`Reservation`] without it blocking
    /// its own days.
    pub exclude: Option<reservation::Id>,
}

/// Result of an [`Availability`] check.
#[derive(Clone, Copy, Debug)]
pub enum Output {
    /// [`Property`] is free over all the requested days.
    ///
    /// [`Property`]: crate::domain::Property
    Available,

    /// [`Property`] cannot host the stay.
    ///
    /// [`Property`]: crate::domain::Property
    Unavailable(Reason),
}

impl Output {
    /// Indicates whether this [`Output`] is [`Output::Available`].
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Reason of a [`Property`] being unavailable.
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Copy, Debug, Display)]
pub enum Reason {
    /// Check-out day is not after the check-in day.
    #[display("check-out must be after check-in")]
    InvalidPeriod,

    /// Days collide with an existing booked [`Reservation`]'s ones.
    ///
    /// [`Reservation`]: crate::domain::Reservation
    #[display("days are booked already: {_0}")]
    Booked(DateRange),
}

impl<Db> Query<Availability> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Booked<Reservation>>, property::Id>>,
        Ok = Vec<Booked<Reservation>>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    async fn execute(&self, query: Availability) -> Result<Self::Ok, Self::Err> {
        let Availability {
            property_id,
            check_in,
            check_out,
            exclude,
        } = query;

        let Some(period) = DateRange::new(check_in, check_out) else {
            return Ok(Output::Unavailable(Reason::InvalidPeriod));
        };

        let booked = self
            .database()
            .execute(Select(By::<Vec<Booked<Reservation>>, _>::new(property_id)))
            .await?;
        let conflict = booked
            .into_iter()
            .filter(|Booked(r)| exclude != Some(r.id))
            .find(|Booked(r)| r.period.overlaps(&period));

        Ok(conflict.map_or(Output::Available, |Booked(r)| {
            Output::Unavailable(Reason::Booked(r.period))
        }))
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Channel, Command as _, CreateReservation},
        fixture,
        query::Query as _,
    };

    use super::{Availability, Output, Reason};

    #[tokio::test]
    async fn reversed_period_is_unavailable() {
        let service = fixture::service_with_property().await;

        let out = service
            .execute(Availability {
                property_id: 1.into(),
                check_in: fixture::date("2025-11-30"),
                check_out: fixture::date("2025-11-25"),
                exclude: None,
            })
            .await
            .unwrap();

        assert!(matches!(
            out,
            Output::Unavailable(Reason::InvalidPeriod),
        ));
    }

    #[tokio::test]
    async fn reports_colliding_reservation() {
        let service = fixture::service_with_property().await;
        let booked = service
            .execute(CreateReservation {
                guest_id: 1.into(),
                property_id: 1.into(),
                check_in: fixture::date("2025-11-25"),
                check_out: fixture::date("2025-11-30"),
                channel: Channel::BackOffice,
                notes: None,
            })
            .await
            .unwrap();

        let out = service
            .execute(Availability {
                property_id: 1.into(),
                check_in: fixture::date("2025-11-28"),
                check_out: fixture::date("2025-12-02"),
                exclude: None,
            })
            .await
            .unwrap();
        assert!(matches!(
            out,
            Output::Unavailable(Reason::Booked(p)) if p == booked.period,
        ));

        let back_to_back = service
            .execute(Availability {
                property_id: 1.into(),
                check_in: fixture::date("2025-11-30"),
                check_out: fixture::date("2025-12-02"),
                exclude: None,
            })
            .await
            .unwrap();
        assert!(back_to_back.is_available());
    }

    #[tokio::test]
    async fn excluded_reservation_frees_its_own_days() {
        let service = fixture::service_with_property().await;
        let booked = service
            .execute(CreateReservation {
                guest_id: 1.into(),
                property_id: 1.into(),
                check_in: fixture::date("2025-11-25"),
                check_out: fixture::date("2025-11-30"),
                channel: Channel::BackOffice,
                notes: None,
            })
            .await
            .unwrap();

        let out = service
            .execute(Availability {
                property_id: 1.into(),
                check_in: fixture::date("2025-11-26"),
                check_out: fixture::date("2025-12-01"),
                exclude: Some(booked.id),
            })
            .await
            .unwrap();

        assert!(out.is_available());
    }
}
