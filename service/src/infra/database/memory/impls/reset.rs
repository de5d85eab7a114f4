//! [`Reset`]-related [`Database`] implementations.
//!
//! [`Database`]: crate::infra::Database

use common::operations::Reset;
use tracerr::Traced;

use crate::infra::{
    database::{self, memory::seed, Memory},
    Database,
};

impl Database<Reset> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Reset) -> Result<Self::Ok, Self::Err> {
        let mut state = self
            .write()
            .map_err(tracerr::from_and_wrap!(=> database::Error))?;

        *state = seed::state();
        Ok(())
    }
}
