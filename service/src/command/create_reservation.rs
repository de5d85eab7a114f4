//! [`Command`] for booking a new [`Reservation`].

use common::{
    operations::{By, Insert, Select},
    Date, DateRange, DateTime, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, reservation, user, Property, Reservation, User},
    infra::{database, Database},
    read::reservation::Booked,
    Service,
};

use super::Command;

/// [`Command`] for booking a new [`Reservation`].
#[derive(Clone, Debug)]
pub struct CreateReservation {
    /// ID of the [`User`] booking the stay.
    pub guest_id: user::Id,

    /// ID of the [`Property`] to book.
    pub property_id: property::Id,

    /// First occupied day of the stay.
    pub check_in: Date,

    /// Day the guest leaves, not occupied.
    pub check_out: Date,

    /// [`Channel`] the booking arrives through.
    pub channel: Channel,

    /// Free-form notes attached to the booking.
    ///
    /// When absent, the [`Channel`]'s default is used.
    pub notes: Option<reservation::Notes>,
}

/// Channel a booking arrives through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
    /// Public website checkout.
    ///
    /// Adds the configured cleaning fee on top of the stay total.
    Web,

    /// Administrative back office.
    ///
    /// Charges the bare stay total.
    BackOffice,
}

impl Channel {
    /// Returns the notes a booking receives when none are provided.
    fn default_notes(self) -> Option<reservation::Notes> {
        match self {
            Self::Web => reservation::Notes::new("Reserva web"),
            Self::BackOffice => None,
        }
    }
}

impl<Db> Command<CreateReservation> for Service<Db>
where
    Db: Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<User>, user::Id>>,
            Ok = Option<User>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Booked<Reservation>>, property::Id>>,
            Ok = Vec<Booked<Reservation>>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<Reservation>,
            Ok = Reservation,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateReservation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateReservation {
            guest_id,
            property_id,
            check_in,
            check_out,
            channel,
            notes,
        } = cmd;

        let period = DateRange::new(check_in, check_out)
            .ok_or(E::InvalidPeriod {
                check_in,
                check_out,
            })
            .map_err(tracerr::wrap!())?;

        let property = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let guest = self
            .database()
            .execute(Select(By::<Option<User>, _>::new(guest_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::UserNotExists(guest_id))
            .map_err(tracerr::wrap!())?;
        if guest.role != user::Role::Guest {
            return Err(tracerr::new!(E::UserNotGuest(guest_id)));
        }

        let booked = self
            .database()
            .execute(Select(By::<Vec<Booked<Reservation>>, _>::new(
                property.id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(Booked(conflict)) =
            booked.iter().find(|Booked(r)| r.period.overlaps(&period))
        {
            return Err(tracerr::new!(E::PropertyUnavailable {
                property_id: property.id,
                booked: conflict.period,
            }));
        }

        let stay_total =
            property.nightly_rate.amount * Decimal::from(period.nights());
        let total = match channel {
            Channel::Web => stay_total + self.config().cleaning_fee.amount,
            Channel::BackOffice => stay_total,
        };

        let reservation = self
            .database()
            .execute(Insert(Reservation {
                id: reservation::Id::default(),
                guest_id: guest.id,
                property_id: property.id,
                period,
                nightly_rate: property.nightly_rate,
                total: Money {
                    amount: total,
                    currency: property.nightly_rate.currency,
                },
                status: reservation::Status::Confirmed,
                created_at: DateTime::now().coerce(),
                notes: notes.or_else(|| channel.default_notes()),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            id = %reservation.id,
            property_id = %reservation.property_id,
            period = %reservation.period,
            "booked reservation",
        );

        Ok(reservation)
    }
}

/// Error of [`CreateReservation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Check-out doesn't lie strictly after check-in.
    #[display("invalid period: `{check_in}..{check_out}`")]
    InvalidPeriod {
        /// Requested check-in day.
        check_in: Date,

        /// Requested check-out day.
        check_out: Date,
    },

    /// [`Property`] with the provided ID doesn't exist.
    #[display("`Property(id: {_0})` doesn't exist")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`User`] with the provided ID doesn't exist.
    #[display("`User(id: {_0})` doesn't exist")]
    UserNotExists(#[error(not(source))] user::Id),

    /// [`User`] with the provided ID cannot book stays.
    #[display("`User(id: {_0})` is not a guest")]
    UserNotGuest(#[error(not(source))] user::Id),

    /// [`Property`] is already booked over the requested days.
    #[display(
        "`Property(id: {property_id})` is already booked over `{booked}`"
    )]
    PropertyUnavailable {
        /// ID of the booked [`Property`].
        property_id: property::Id,

        /// Conflicting period of the existing [`Reservation`].
        booked: DateRange,
    },
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        command::{CancelReservation, Command as _},
        domain::{reservation, Reservation},
        fixture,
        infra::Database as _,
    };

    use super::{Channel, CreateReservation, ExecutionError as E};

    fn booking(channel: Channel) -> CreateReservation {
        CreateReservation {
            guest_id: 1.into(),
            property_id: 1.into(),
            check_in: fixture::date("2025-11-25"),
            check_out: fixture::date("2025-11-30"),
            channel,
            notes: None,
        }
    }

    #[tokio::test]
    async fn charges_bare_stay_total_in_back_office() {
        let service = fixture::service_with_property().await;

        let reservation = service
            .execute(booking(Channel::BackOffice))
            .await
            .unwrap();

        assert_eq!(reservation.nights(), 5);
        assert_eq!(reservation.total, fixture::mxn(14000));
        assert_eq!(reservation.status, reservation::Status::Confirmed);
        assert!(reservation.notes.is_none());
    }

    #[tokio::test]
    async fn adds_cleaning_fee_on_web_channel() {
        let service = fixture::service_with_property().await;

        let reservation =
            service.execute(booking(Channel::Web)).await.unwrap();

        assert_eq!(reservation.total, fixture::mxn(14500));
        assert_eq!(
            reservation.notes.as_ref().map(AsRef::as_ref),
            Some("Reserva web"),
        );
    }

    #[tokio::test]
    async fn rejects_overlapping_period() {
        let service = fixture::service_with_property().await;
        drop(service.execute(booking(Channel::BackOffice)).await.unwrap());

        let mut second = booking(Channel::BackOffice);
        second.check_in = fixture::date("2025-11-28");
        second.check_out = fixture::date("2025-12-02");
        let err = service.execute(second).await.unwrap_err();

        assert!(matches!(err.as_ref(), E::PropertyUnavailable { .. }));
    }

    #[tokio::test]
    async fn allows_back_to_back_stays() {
        let service = fixture::service_with_property().await;
        drop(service.execute(booking(Channel::BackOffice)).await.unwrap());

        let mut next = booking(Channel::BackOffice);
        next.check_in = fixture::date("2025-11-30");
        next.check_out = fixture::date("2025-12-05");

        assert!(service.execute(next).await.is_ok());
    }

    #[tokio::test]
    async fn cancelled_reservation_releases_days() {
        let service = fixture::service_with_property().await;
        let first =
            service.execute(booking(Channel::BackOffice)).await.unwrap();
        drop(
            service
                .execute(CancelReservation { id: first.id })
                .await
                .unwrap(),
        );

        assert!(service
            .execute(booking(Channel::BackOffice))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn rejects_reversed_period() {
        let service = fixture::service_with_property().await;

        let mut reversed = booking(Channel::BackOffice);
        reversed.check_in = fixture::date("2025-11-30");
        reversed.check_out = fixture::date("2025-11-25");
        let err = service.execute(reversed).await.unwrap_err();

        assert!(matches!(err.as_ref(), E::InvalidPeriod { .. }));
    }

    #[tokio::test]
    async fn unknown_property_leaves_store_untouched() {
        let service = fixture::service_with_property().await;

        let mut unknown = booking(Channel::BackOffice);
        unknown.property_id = 999.into();
        let err = service.execute(unknown).await.unwrap_err();

        assert!(matches!(err.as_ref(), E::PropertyNotExists(_)));
        let all = service
            .database()
            .execute(Select(By::<Vec<Reservation>, _>::new(())))
            .await
            .unwrap();
        assert!(all.is_empty());
    }
}
