//! [`Command`] for recording a collected [`Payment`].

use common::{
    operations::{By, Insert, Select},
    Date, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{payment, reservation, Payment, Reservation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for recording the money collected from a guest for a
/// [`Reservation`].
///
/// The platform commission is withheld at the configured rate, the rest is
/// owed to the host until disbursed.
#[derive(Clone, Copy, Debug)]
pub struct RecordPayment {
    /// ID of the paid [`Reservation`].
    pub reservation_id: reservation::Id,

    /// [`Method`] the money was collected with.
    ///
    /// [`Method`]: payment::Method
    pub method: payment::Method,

    /// Day the money was collected on, today when omitted.
    pub paid_on: Option<Date>,
}

impl<Db> Command<RecordPayment> for Service<Db>
where
    Db: Database<
            Select<By<Option<Reservation>, reservation::Id>>,
            Ok = Option<Reservation>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<Payment>,
            Ok = Payment,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Payment;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: RecordPayment) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RecordPayment {
            reservation_id,
            method,
            paid_on,
        } = cmd;

        let reservation = self
            .database()
            .execute(Select(By::<Option<Reservation>, _>::new(reservation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReservationNotExists(reservation_id))
            .map_err(tracerr::wrap!())?;
        if reservation.status == reservation::Status::Cancelled {
            return Err(tracerr::new!(E::ReservationCancelled(reservation_id)));
        }

        let gross = reservation.total;
        let commission = Money {
            amount: self.config().commission.of(gross.amount),
            currency: gross.currency,
        };
        let net = Money {
            amount: gross.amount - commission.amount,
            currency: gross.currency,
        };

        let payment = self
            .database()
            .execute(Insert(Payment {
                id: payment::Id::default(),
                reservation_id: reservation.id,
                paid_on: paid_on.unwrap_or_else(Date::today).coerce(),
                gross,
                commission,
                net,
                method,
                status: payment::Status::Paid,
                disbursed_on: None,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            id = %payment.id,
            reservation_id = %payment.reservation_id,
            gross = %payment.gross,
            commission = %payment.commission,
            "recorded payment",
        );

        Ok(payment)
    }
}

/// Error of [`RecordPayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Reservation`] with the provided ID doesn't exist.
    #[display("`Reservation(id: {_0})` doesn't exist")]
    ReservationNotExists(#[error(not(source))] reservation::Id),

    /// [`Reservation`] with the provided ID is cancelled.
    #[display("`Reservation(id: {_0})` is cancelled")]
    ReservationCancelled(#[error(not(source))] reservation::Id),
}
