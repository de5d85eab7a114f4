//! [`MaintenanceOrder`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{property, MaintenanceOrder},
    infra::{
        database::{self, Memory},
        Database,
    },
};

impl Database<Insert<MaintenanceOrder>> for Memory {
    type Ok = MaintenanceOrder;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(order): Insert<MaintenanceOrder>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.maintenance.insert(order))
    }
}

impl Database<Select<By<Vec<MaintenanceOrder>, ()>>> for Memory {
    type Ok = Vec<MaintenanceOrder>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<MaintenanceOrder>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.maintenance.all())
    }
}

impl Database<Select<By<Vec<MaintenanceOrder>, property::Id>>> for Memory {
    type Ok = Vec<MaintenanceOrder>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<MaintenanceOrder>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let property_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.maintenance.select(|m| m.property_id == property_id))
    }
}
