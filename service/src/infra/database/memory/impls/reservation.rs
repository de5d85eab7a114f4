//! [`Reservation`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::{By, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{property, reservation, Reservation},
    infra::{
        database::{self, Memory},
        Database,
    },
    read::reservation::Booked,
};

impl Database<Insert<Reservation>> for Memory {
    type Ok = Reservation;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(reservation): Insert<Reservation>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.reservations.insert(reservation))
    }
}

impl Database<Update<Reservation>> for Memory {
    type Ok = Option<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(reservation): Update<Reservation>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.reservations.update(reservation))
    }
}

impl Database<Select<By<Option<Reservation>, reservation::Id>>> for Memory {
    type Ok = Option<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Reservation>, reservation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.reservations.get(by.into_inner()))
    }
}

impl Database<Select<By<Vec<Reservation>, ()>>> for Memory {
    type Ok = Vec<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Reservation>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.reservations.all())
    }
}

impl Database<Select<By<Vec<Reservation>, property::Id>>> for Memory {
    type Ok = Vec<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Reservation>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let property_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state.reservations.select(|r| r.property_id == property_id))
    }
}

impl Database<Select<By<Vec<Booked<Reservation>>, property::Id>>> for Memory {
    type Ok = Vec<Booked<Reservation>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booked<Reservation>>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let property_id = by.into_inner();
        let state = self
            .read()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        Ok(state
            .reservations
            .select(|r| {
                r.property_id == property_id
                    && r.status != reservation::Status::Cancelled
            })
            .into_iter()
            .map(Booked)
            .collect())
    }
}
