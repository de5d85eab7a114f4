//! [`Payment`] read model definitions.

#[cfg(doc)]
use crate::domain::Payment;

/// Wrapper around a [`Payment`] indicating that it was collected but its net
/// amount hasn't been paid out to the host yet.
#[derive(Clone, Copy, Debug)]
pub struct Undisbursed<T>(pub T);
