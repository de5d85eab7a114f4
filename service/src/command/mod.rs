//! [`Command`] definition.

pub mod cancel_reservation;
pub mod create_reservation;
pub mod delete_property;
pub mod disburse_payments;
pub mod record_payment;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    cancel_reservation::CancelReservation,
    create_reservation::{Channel, CreateReservation},
    delete_property::DeleteProperty, disburse_payments::DisbursePayments,
    record_payment::RecordPayment,
};
