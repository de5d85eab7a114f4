//! Domain definitions.

pub mod expense;
pub mod maintenance;
pub mod payment;
pub mod property;
pub mod reservation;
pub mod user;

pub use self::{
    expense::Expense, maintenance::MaintenanceOrder, payment::Payment,
    property::Property, reservation::Reservation, user::User,
};
