//! [`Command`] for paying out collected money to hosts.

use common::{
    operations::{By, Select, Update},
    Date, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Payment,
    infra::{database, Database},
    read::payment::Undisbursed,
    Service,
};

use super::Command;

/// [`Command`] for paying out every collected-but-undisbursed [`Payment`]'s
/// net amount to its host.
///
/// Payouts are marked one by one without a surrounding transaction: a
/// failure mid-way leaves the already marked ones disbursed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisbursePayments;

/// Result of a [`DisbursePayments`] execution.
#[derive(Clone, Copy, Debug)]
pub struct Output {
    /// Number of [`Payment`]s paid out.
    pub count: usize,

    /// Sum of the paid out net amounts.
    pub total: Money,
}

impl<Db> Command<DisbursePayments> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Undisbursed<Payment>>, ()>>,
            Ok = Vec<Undisbursed<Payment>>,
            Err = Traced<database::Error>,
        > + Database<
            Update<Payment>,
            Ok = Option<Payment>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: DisbursePayments,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let pending = self
            .database()
            .execute(Select(By::<Vec<Undisbursed<Payment>>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let today = Date::today();
        let mut count = 0;
        let mut total = Decimal::ZERO;
        for Undisbursed(mut payment) in pending {
            payment.disbursed_on = Some(today.coerce());
            total += payment.net.amount;
            count += 1;
            drop(
                self.database()
                    .execute(Update(payment))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?,
            );
        }

        log::info!(count, %total, "disbursed pending payments");

        Ok(Output {
            count,
            total: Money::mxn(total),
        })
    }
}

/// Error of [`DisbursePayments`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        command::Command as _,
        domain::Payment,
        fixture,
        infra::Database as _,
        read::payment::Undisbursed,
    };

    use super::DisbursePayments;

    #[tokio::test]
    async fn marks_every_pending_payment() {
        let service = fixture::seeded_service();

        let first = service.execute(DisbursePayments).await.unwrap();
        // 22400 + 7200 + 11200 + 30000 + 15600 net 80% each.
        assert_eq!(first.count, 5);
        assert_eq!(first.total, fixture::mxn(69120));

        let left = service
            .database()
            .execute(Select(By::<Vec<Undisbursed<Payment>>, _>::new(())))
            .await
            .unwrap();
        assert!(left.is_empty());

        let second = service.execute(DisbursePayments).await.unwrap();
        assert_eq!(second.count, 0);
        assert_eq!(second.total, fixture::mxn(0));
    }
}
