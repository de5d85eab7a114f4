//! Read entities definitions.

pub mod payment;
pub mod reservation;
