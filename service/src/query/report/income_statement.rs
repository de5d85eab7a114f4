//! [`Query`] building the profit and loss statement.
//!
//! [`Query`]: crate::query::Query

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    Date, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{expense, maintenance, Expense, MaintenanceOrder, Payment},
    infra::{database, Database},
    query::Query,
    Service,
};

use super::Period;

/// [`Query`] aggregating the platform's own profit and loss over a
/// [`Period`].
///
/// Revenue is the platform's cut only: commissions withheld from collected
/// [`Payment`]s plus the markup earned on completed [`MaintenanceOrder`]s.
/// Money collected on behalf of hosts is not revenue.
#[derive(Clone, Copy, Debug, Default)]
pub struct IncomeStatement {
    /// [`Period`] to aggregate over.
    pub period: Period,
}

/// Aggregated profit and loss figures.
#[derive(Clone, Debug)]
pub struct Output {
    /// Commissions withheld from collected [`Payment`]s.
    pub commission_revenue: Money,

    /// Markup earned on completed [`MaintenanceOrder`]s.
    pub maintenance_profit: Money,

    /// [`Output::commission_revenue`] plus
    /// [`Output::maintenance_profit`].
    pub total_revenue: Money,

    /// Paid [`Expense`]s (tax included), rolled up per [`Bucket`].
    ///
    /// Every [`Bucket`] is present, zero when nothing was spent on it.
    ///
    /// [`Bucket`]: expense::Bucket
    pub expenses: HashMap<expense::Bucket, Money>,

    /// Sum over all the [`Output::expenses`] buckets.
    pub total_expenses: Money,

    /// [`Output::total_revenue`] minus [`Output::total_expenses`].
    pub net_profit: Money,

    /// [`Output::net_profit`] share of [`Output::total_revenue`], in
    /// percent.
    ///
    /// Zero when there is no revenue.
    pub margin: Decimal,
}

impl<Db> Query<IncomeStatement> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Payment>, ()>>,
            Ok = Vec<Payment>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<MaintenanceOrder>, ()>>,
            Ok = Vec<MaintenanceOrder>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Expense>, ()>>,
            Ok = Vec<Expense>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        query: IncomeStatement,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let IncomeStatement { period } = query;
        let today = Date::today();

        let payments = self
            .database()
            .execute(Select(By::<Vec<Payment>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let commission_revenue = payments
            .iter()
            .filter(|p| {
                p.counts_as_revenue()
                    && period.includes(today, p.paid_on.coerce())
            })
            .map(|p| p.commission.amount)
            .sum::<Decimal>();

        let orders = self
            .database()
            .execute(Select(By::<Vec<MaintenanceOrder>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let maintenance_profit = orders
            .iter()
            .filter(|o| {
                o.status == maintenance::Status::Completed
                    && period.includes(today, o.scheduled_on.coerce())
            })
            .map(MaintenanceOrder::profit)
            .sum::<Decimal>();

        let expenses = self
            .database()
            .execute(Select(By::<Vec<Expense>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let mut buckets: HashMap<_, _> = expense::Bucket::ALL
            .into_iter()
            .map(|b| (b, Decimal::ZERO))
            .collect();
        for e in expenses.iter().filter(|e| {
            e.status == expense::Status::Paid
                && period.includes(today, e.incurred_on.coerce())
        }) {
            *buckets.entry(e.category.bucket()).or_default() += e.total.amount;
        }
        let total_expenses = buckets.values().copied().sum::<Decimal>();

        let total_revenue = commission_revenue + maintenance_profit;
        let net_profit = total_revenue - total_expenses;
        let margin = if total_revenue > Decimal::ZERO {
            net_profit / total_revenue * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        Ok(Output {
            commission_revenue: Money::mxn(commission_revenue),
            maintenance_profit: Money::mxn(maintenance_profit),
            total_revenue: Money::mxn(total_revenue),
            expenses: buckets
                .into_iter()
                .map(|(b, amount)| (b, Money::mxn(amount)))
                .collect(),
            total_expenses: Money::mxn(total_expenses),
            net_profit: Money::mxn(net_profit),
            margin,
        })
    }
}

/// Error of [`IncomeStatement`] [`Query`] execution.
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
    use common::{operations::Insert, Date};
    use rust_decimal::Decimal;

    use crate::{
        domain::{expense::Bucket, payment, Payment},
        fixture,
        infra::Database as _,
        query::Query as _,
    };

    use super::{IncomeStatement, Period};

    fn collected(paid_on: Date, commission: i64) -> Payment {
        Payment {
            id: 0.into(),
            reservation_id: 1.into(),
            paid_on: paid_on.coerce(),
            gross: fixture::mxn(commission * 5),
            commission: fixture::mxn(commission),
            net: fixture::mxn(commission * 4),
            method: payment::Method::Card,
            status: payment::Status::Paid,
            disbursed_on: None,
        }
    }

    #[tokio::test]
    async fn aggregates_whole_history() {
        let service = fixture::seeded_service();

        let out = service
            .execute(IncomeStatement {
                period: Period::All,
            })
            .await
            .unwrap();

        assert_eq!(out.commission_revenue, fixture::mxn(39400));
        assert_eq!(out.maintenance_profit, fixture::mxn(2650));
        assert_eq!(out.total_revenue, fixture::mxn(42050));

        assert_eq!(out.expenses[&Bucket::Marketing], fixture::mxn(4640));
        assert_eq!(out.expenses[&Bucket::Payroll], fixture::mxn(3000));
        assert_eq!(out.expenses[&Bucket::Software], fixture::mxn(1798));
        assert_eq!(out.expenses[&Bucket::Operational], fixture::mxn(1486));
        assert_eq!(out.expenses[&Bucket::Legal], fixture::mxn(1842));
        assert_eq!(out.expenses[&Bucket::Other], fixture::mxn(3712));
        assert_eq!(out.total_expenses, fixture::mxn(16478));

        assert_eq!(out.net_profit, fixture::mxn(25572));
        assert_eq!(out.margin.round_dp(2), Decimal::new(6081, 2));
    }

    #[tokio::test]
    async fn bounded_periods_drop_older_collections() {
        let service = fixture::service();
        let today = Date::today();

        for p in [
            collected(today, 400),
            collected(today.minus_days(10).unwrap(), 600),
            collected(today.minus_days(45).unwrap(), 5000),
        ] {
            drop(service.database().execute(Insert(p)).await.unwrap());
        }

        let weekly = service
            .execute(IncomeStatement {
                period: Period::LastWeek,
            })
            .await
            .unwrap();
        assert_eq!(weekly.commission_revenue, fixture::mxn(400));

        let monthly = service
            .execute(IncomeStatement {
                period: Period::LastMonth,
            })
            .await
            .unwrap();
        assert_eq!(monthly.commission_revenue, fixture::mxn(1000));

        let whole = service
            .execute(IncomeStatement {
                period: Period::All,
            })
            .await
            .unwrap();
        assert_eq!(whole.commission_revenue, fixture::mxn(6000));
    }

    #[tokio::test]
    async fn empty_store_has_zero_margin() {
        let service = fixture::service();

        let out = service
            .execute(IncomeStatement {
                period: Period::All,
            })
            .await
            .unwrap();

        assert_eq!(out.total_revenue, fixture::mxn(0));
        assert_eq!(out.margin, Decimal::ZERO);
        assert_eq!(out.expenses.len(), 6);
        assert_eq!(out.expenses[&Bucket::Marketing], fixture::mxn(0));
    }
}
