//! [`Command`] for deleting a [`Property`].

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Expense, MaintenanceOrder, Property, Reservation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Property`] from the catalog.
///
/// A [`Property`] referenced by any [`Reservation`], [`MaintenanceOrder`] or
/// [`Expense`] cannot be deleted: dropping it would orphan financial
/// history.
#[derive(Clone, Copy, Debug)]
pub struct DeleteProperty {
    /// ID of the [`Property`] to delete.
    pub id: property::Id,
}

impl<Db> Command<DeleteProperty> for Service<Db>
where
    Db: Database<
            Select<By<Option<Property>, property::Id>>,
            Ok = Option<Property>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Reservation>, property::Id>>,
            Ok = Vec<Reservation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<MaintenanceOrder>, property::Id>>,
            Ok = Vec<MaintenanceOrder>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Expense>, property::Id>>,
            Ok = Vec<Expense>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Property, property::Id>>,
            Ok = bool,
            Err = Traced<database::Error>,
        >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteProperty { id } = cmd;

        self.database()
            .execute(Select(By::<Option<Property>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let reservations = self
            .database()
            .execute(Select(By::<Vec<Reservation>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !reservations.is_empty() {
            return Err(tracerr::new!(E::PropertyInUse(id)));
        }
        let orders = self
            .database()
            .execute(Select(By::<Vec<MaintenanceOrder>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !orders.is_empty() {
            return Err(tracerr::new!(E::PropertyInUse(id)));
        }
        let expenses = self
            .database()
            .execute(Select(By::<Vec<Expense>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !expenses.is_empty() {
            return Err(tracerr::new!(E::PropertyInUse(id)));
        }

        if !self
            .database()
            .execute(Delete(By::<Property, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
        {
            return Err(tracerr::new!(E::PropertyNotExists(id)));
        }

        log::info!(%id, "deleted property");

        Ok(())
    }
}

/// Error of [`DeleteProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] with the provided ID doesn't exist.
    #[display("`Property(id: {_0})` doesn't exist")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`Property`] is referenced by existing records.
    #[display("`Property(id: {_0})` is referenced by existing records")]
    PropertyInUse(#[error(not(source))] property::Id),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select};

    use crate::{
        command::{Channel, Command as _, CreateReservation},
        domain::Property,
        fixture,
        infra::Database as _,
    };

    use super::{DeleteProperty, ExecutionError as E};

    #[tokio::test]
    async fn deletes_unreferenced_property() {
        let service = fixture::service_with_property().await;

        service.execute(DeleteProperty { id: 1.into() }).await.unwrap();

        let gone = service
            .database()
            .execute(Select(By::<Option<Property>, _>::new(
                crate::domain::property::Id::from(1),
            )))
            .await
            .unwrap();
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn refuses_property_with_history() {
        let service = fixture::service_with_property().await;
        drop(
            service
                .execute(CreateReservation {
                    guest_id: 1.into(),
                    property_id: 1.into(),
                    check_in: fixture::date("2025-11-25"),
                    check_out: fixture::date("2025-11-30"),
                    channel: Channel::BackOffice,
                    notes: None,
                })
                .await
                .unwrap(),
        );

        let err = service
            .execute(DeleteProperty { id: 1.into() })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), E::PropertyInUse(_)));
    }

    #[tokio::test]
    async fn unknown_property_is_an_error() {
        let service = fixture::service();
        drop(
            service
                .database()
                .execute(Insert(fixture::host()))
                .await
                .unwrap(),
        );

        let err = service
            .execute(DeleteProperty { id: 404.into() })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), E::PropertyNotExists(_)));
    }
}
