//! Typed [`Database`] operations of a [`Memory`] store.
//!
//! [`Database`]: crate::infra::Database
//! [`Memory`]: super::Memory

mod expense;
mod maintenance;
mod payment;
mod property;
mod reservation;
mod reset;
mod user;
