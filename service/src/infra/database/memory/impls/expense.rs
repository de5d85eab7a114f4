//! [`Expense`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{property, Expense},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Insert<Expense>> for Memory {
    type Ok = Expense;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(expense): Insert<Expense>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.expenses.insert(expense))
    }
}

impl Database<Select<By<Vec<Expense>, ()>>> for Memory {
    type Ok = Vec<Expense>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Expense>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.expenses.all())
    }
}

impl Database<Select<By<Vec<Expense>, property::Id>>> for Memory {
    type Ok = Vec<Expense>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Expense>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let property_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state
            .expenses
            .select(|e| e.property_id == Some(property_id)))
    }
}
