//! [`Payment`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{payment, Payment},
    infra::{
        database::{self, Memory},
        Database,
    },
    read::payment::Undisbursed,
};

impl Database<Insert<Payment>> for Memory {
    type Ok = Payment;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(payment): Insert<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.payments.insert(payment))
    }
}

impl Database<Update<Payment>> for Memory {
    type Ok = Option<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(payment): Update<Payment>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.payments.update(payment))
    }
}

impl Database<Select<By<Vec<Payment>, ()>>> for Memory {
    type Ok = Vec<Payment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Payment>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.payments.all())
    }
}

impl Database<Select<By<Vec<Undisbursed<Payment>>, ()>>> for Memory {
    type Ok = Vec<Undisbursed<Payment>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Undisbursed<Payment>>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state
            .payments
            .select(|p| {
                p.status == payment::Status::Paid && !p.is_disbursed()
            })
            .into_iter()
            .map(Undisbursed)
            .collect())
    }
}
