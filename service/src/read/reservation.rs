//! [`Reservation`] read model definitions.

#[cfg(doc)]
use crate::domain::{reservation, Reservation};

/// Wrapper around a [`Reservation`] indicating that it still occupies its
/// booked days, i.e. its status is not [`Cancelled`].
///
/// [`Cancelled`]: reservation::Status::Cancelled
#[derive(Clone, Copy, Debug)]
pub struct Booked<T>(pub T);
