//! In-memory [`Database`] implementation.
//!
//! [`Database`]: crate::infra::Database

mod impls;
mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use derive_more::{Display, Error as StdError};

use crate::domain::{
    Expense, MaintenanceOrder, Payment, Property, Reservation, User,
};

/// In-memory record store.
///
/// Cloning is cheap and every clone shares the same underlying [`State`].
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<RwLock<State>>);

impl Memory {
    /// Creates a new empty [`Memory`] store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new [`Memory`] store pre-populated with the demo dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self(Arc::new(RwLock::new(seed::state())))
    }

    /// Acquires a shared lock on the [`State`] of this [`Memory`] store.
    fn read(&self) -> Result<RwLockReadGuard<'_, State>, Error> {
        self.0.read().map_err(|_| Error::Poisoned)
    }

    /// Acquires an exclusive lock on the [`State`] of this [`Memory`] store.
    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, Error> {
        self.0.write().map_err(|_| Error::Poisoned)
    }
}

/// Error of a [`Memory`] store operation.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Another holder of the lock panicked, leaving the [`State`] suspect.
    #[display("store lock poisoned")]
    Poisoned,
}

/// Full contents of a [`Memory`] store.
#[derive(Debug, Default)]
struct State {
    /// [`User`] records.
    users: Table<User>,

    /// [`Property`] records.
    properties: Table<Property>,

    /// [`Reservation`] records.
    reservations: Table<Reservation>,

    /// [`Payment`] records.
    payments: Table<Payment>,

    /// [`MaintenanceOrder`] records.
    maintenance: Table<MaintenanceOrder>,

    /// [`Expense`] records.
    expenses: Table<Expense>,
}

/// Single table of a [`State`].
#[derive(Debug)]
struct Table<T> {
    /// Stored records, in insertion order.
    rows: Vec<T>,

    /// Identifier the next inserted record receives.
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// Record storable in a [`Table`].
trait Record: Clone {
    /// Type of the record's identifier.
    type Id: Copy + From<i64> + PartialEq;

    /// Returns the identifier of this record.
    fn id(&self) -> Self::Id;

    /// Rewrites the identifier of this record.
    fn set_id(&mut self, id: Self::Id);
}

impl<T: Record> Table<T> {
    /// Inserts the given record, assigning it a fresh identifier, and
    /// returns the stored copy.
    fn insert(&mut self, mut row: T) -> T {
        row.set_id(self.next_id.into());
        self.next_id += 1;
        self.rows.push(row.clone());
        row
    }

    /// Returns a copy of the record with the given identifier, if any.
    fn get(&self, id: T::Id) -> Option<T> {
        self.rows.iter().find(|r| r.id() == id).cloned()
    }

    /// Replaces the stored record having the same identifier as the given
    /// one wholesale, returning the new version, or [`None`] if absent.
    fn update(&mut self, row: T) -> Option<T> {
        self.rows.iter_mut().find(|r| r.id() == row.id()).map(|r| {
            *r = row.clone();
            row
        })
    }

    /// Removes the record with the given identifier, indicating whether it
    /// was present.
    fn remove(&mut self, id: T::Id) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id() != id);
        self.rows.len() < before
    }

    /// Returns copies of all the stored records.
    fn all(&self) -> Vec<T> {
        self.rows.clone()
    }

    /// Returns copies of all the stored records matching the given
    /// predicate.
    fn select(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|r| pred(r)).cloned().collect()
    }
}

/// Populates a [`Table`] with the given pre-identified rows, continuing
/// identifiers from the largest one present.
fn table_of<T: Record>(rows: Vec<T>, next_id: i64) -> Table<T> {
    Table { rows, next_id }
}

impl Record for User {
    type Id = crate::domain::user::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Record for Property {
    type Id = crate::domain::property::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Record for Reservation {
    type Id = crate::domain::reservation::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Record for Payment {
    type Id = crate::domain::payment::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Record for MaintenanceOrder {
    type Id = crate::domain::maintenance::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

impl Record for Expense {
    type Id = crate::domain::expense::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Delete, Reset, Select},
        DateRange, Money,
    };
    use rust_decimal::Decimal;

    use crate::{
        domain::{reservation, Property, Reservation},
        infra::Database as _,
    };

    use super::{Memory, Table};

    fn reservation() -> Reservation {
        Reservation {
            id: 0.into(),
            guest_id: 1.into(),
            property_id: 456.into(),
            period: DateRange::new(
                "2025-11-10".parse().unwrap(),
                "2025-11-15".parse().unwrap(),
            )
            .unwrap(),
            nightly_rate: Money::mxn(Decimal::from(2800)),
            total: Money::mxn(Decimal::from(14000)),
            status: reservation::Status::Confirmed,
            created_at: common::DateTime::UNIX_EPOCH.coerce(),
            notes: None,
        }
    }

    #[test]
    fn assigns_sequential_ids() {
        let mut table = Table::default();

        let first = table.insert(reservation());
        let second = table.insert(reservation());

        assert_eq!(first.id, 1.into());
        assert_eq!(second.id, 2.into());
        assert!(table.get(first.id).is_some());
        assert!(table.get(99.into()).is_none());
    }

    #[test]
    fn updates_whole_record() {
        let mut table = Table::default();
        let mut stored = table.insert(reservation());

        stored.status = reservation::Status::Cancelled;
        let updated = table.update(stored.clone()).unwrap();

        assert_eq!(updated.status, reservation::Status::Cancelled);
        assert_eq!(
            table.get(stored.id).unwrap().status,
            reservation::Status::Cancelled,
        );
    }

    #[test]
    fn update_of_absent_record_is_none() {
        let mut table = Table::default();
        let mut missing = reservation();
        missing.id = 7.into();

        assert!(table.update(missing).is_none());
        assert!(table.all().is_empty());
    }

    #[test]
    fn selected_rows_are_detached_copies() {
        let mut table = Table::default();
        let stored = table.insert(reservation());

        let mut copy = table.get(stored.id).unwrap();
        copy.status = reservation::Status::Cancelled;

        assert_eq!(
            table.get(stored.id).unwrap().status,
            reservation::Status::Confirmed,
        );
    }

    #[test]
    fn removes_by_id() {
        let mut table = Table::default();
        let stored = table.insert(reservation());

        assert!(table.remove(stored.id));
        assert!(!table.remove(stored.id));
        assert!(table.all().is_empty());
    }

    #[tokio::test]
    async fn reset_restores_seed_dataset() {
        let store = Memory::seeded();

        let listed = store
            .execute(Select(By::<Vec<Property>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(listed.len(), 10);

        assert!(store
            .execute(Delete(By::<Property, _>::new(465.into())))
            .await
            .unwrap());
        let left = store
            .execute(Select(By::<Vec<Property>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(left.len(), 9);

        store.execute(Reset).await.unwrap();
        let restored = store
            .execute(Select(By::<Vec<Property>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(restored.len(), 10);
    }
}
