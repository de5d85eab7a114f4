//! [`Query`] definition.

pub mod availability;
pub mod quote;
pub mod report;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    availability::Availability,
    quote::Quote,
    report::{IncomeStatement, Period, Vault},
};
