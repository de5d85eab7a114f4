//! [`Command`] for cancelling a [`Reservation`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{reservation, Reservation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling a [`Reservation`], releasing its booked days.
#[derive(Clone, Copy, Debug)]
pub struct CancelReservation {
    /// ID of the [`Reservation`] to cancel.
    pub id: reservation::Id,
}

impl<Db> Command<CancelReservation> for Service<Db>
where
    Db: Database<
            Select<By<Option<Reservation>, reservation::Id>>,
            Ok = Option<Reservation>,
            Err = Traced<database::Error>,
        > + Database<
            Update<Reservation>,
            Ok = Option<Reservation>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Reservation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CancelReservation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelReservation { id } = cmd;

        let mut reservation = self
            .database()
            .execute(Select(By::<Option<Reservation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReservationNotExists(id))
            .map_err(tracerr::wrap!())?;
        if reservation.status == reservation::Status::Cancelled {
            return Err(tracerr::new!(E::AlreadyCancelled(id)));
        }

        reservation.status = reservation::Status::Cancelled;
        let reservation = self
            .database()
            .execute(Update(reservation))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReservationNotExists(id))
            .map_err(tracerr::wrap!())?;

        log::info!(id = %reservation.id, "cancelled reservation");

        Ok(reservation)
    }
}

/// Error of [`CancelReservation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Reservation`] with the provided ID doesn't exist.
    #[display("`Reservation(id: {_0})` doesn't exist")]
    ReservationNotExists(#[error(not(source))] reservation::Id),

    /// [`Reservation`] is already cancelled.
    #[display("`Reservation(id: {_0})` is already cancelled")]
    AlreadyCancelled(#[error(not(source))] reservation::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Channel, Command as _, CreateReservation},
        domain::reservation,
        fixture,
    };

    use super::{CancelReservation, ExecutionError as E};

    #[tokio::test]
    async fn cancels_once() {
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

        let cancelled = service
            .execute(CancelReservation { id: booked.id })
            .await
            .unwrap();
        assert_eq!(cancelled.status, reservation::Status::Cancelled);

        let err = service
            .execute(CancelReservation { id: booked.id })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), E::AlreadyCancelled(_)));
    }

    #[tokio::test]
    async fn unknown_reservation_is_an_error() {
        let service = fixture::service_with_property().await;

        let err = service
            .execute(CancelReservation { id: 42.into() })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), E::ReservationNotExists(_)));
    }
}
