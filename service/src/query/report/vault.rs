//! [`Query`] reconciling the money held on behalf of hosts.
//!
//! [`Query`]: crate::query::Query

use common::{
    operations::{By, Select},
    Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::Payment,
    infra::{database, Database},
    query::Query,
    Service,
};

/// [`Query`] reconciling every peso ever collected from guests against
/// what was kept, paid out and is still owed to hosts.
///
/// Always covers the whole recorded history: a balance computed over a
/// window would not reconcile.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vault;

/// Reconciled money flow through the platform.
#[derive(Clone, Copy, Debug)]
pub struct Output {
    /// Everything ever collected from guests.
    pub gross_collected: Money,

    /// Commissions kept by the platform.
    pub commission_retained: Money,

    /// Net amounts already paid out to hosts.
    pub disbursed: Money,

    /// Net amounts collected but not paid out yet.
    pub owed: Money,

    /// Money currently held: [`Output::gross_collected`] minus
    /// [`Output::commission_retained`] minus [`Output::disbursed`].
    ///
    /// Always equals [`Output::owed`].
    pub balance: Money,
}

impl<Db> Query<Vault> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Payment>, ()>>,
        Ok = Vec<Payment>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: Vault) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let payments = self
            .database()
            .execute(Select(By::<Vec<Payment>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut gross = Decimal::ZERO;
        let mut commission = Decimal::ZERO;
        let mut disbursed = Decimal::ZERO;
        let mut owed = Decimal::ZERO;
        for p in payments.iter().filter(|p| p.counts_as_revenue()) {
            gross += p.gross.amount;
            commission += p.commission.amount;
            if p.is_disbursed() {
                disbursed += p.net.amount;
            } else {
                owed += p.net.amount;
            }
        }

        Ok(Output {
            gross_collected: Money::mxn(gross),
            commission_retained: Money::mxn(commission),
            disbursed: Money::mxn(disbursed),
            owed: Money::mxn(owed),
            balance: Money::mxn(gross - commission - disbursed),
        })
    }
}

/// Error of [`Vault`] [`Query`] execution.
///
/// [`Query`]: crate::query::Query
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{Command as _, DisbursePayments},
        fixture,
        query::Query as _,
    };

    use super::Vault;

    #[tokio::test]
    async fn reconciles_seeded_history() {
        let service = fixture::seeded_service();

        let out = service.execute(Vault).await.unwrap();

        assert_eq!(out.gross_collected, fixture::mxn(197000));
        assert_eq!(out.commission_retained, fixture::mxn(39400));
        assert_eq!(out.disbursed, fixture::mxn(88480));
        assert_eq!(out.owed, fixture::mxn(69120));
        assert_eq!(out.balance, out.owed);
    }

    #[tokio::test]
    async fn payouts_drain_the_balance() {
        let service = fixture::seeded_service();

        drop(service.execute(DisbursePayments).await.unwrap());
        let out = service.execute(Vault).await.unwrap();

        assert_eq!(out.gross_collected, fixture::mxn(197000));
        assert_eq!(out.disbursed, fixture::mxn(157600));
        assert_eq!(out.owed, fixture::mxn(0));
        assert_eq!(out.balance, fixture::mxn(0));
    }
}
