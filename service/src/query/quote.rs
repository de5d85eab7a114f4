//! [`Query`] pricing a prospective stay.

use common::{
    operations::{By, Select},
    Date, DateRange, Money, Nights,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{database, Database},
    Service,
};

use super::Query;

/// [`Query`] pricing a stay at a [`Property`] before it's booked.
///
/// The quoted [`Output::total_due`] always includes the cleaning fee, the
/// way a guest-facing checkout would charge it. Bookings made through the
/// back office charge [`Output::stay_total`] only.
#[derive(Clone, Copy, Debug)]
pub struct Quote {
    /// ID of the [`Property`] to price.
    pub property_id: property::Id,

    /// Day the stay starts on.
    pub check_in: Date,

    /// Day the stay ends on, exclusive.
    pub check_out: Date,
}

/// Priced breakdown of a stay.
#[derive(Clone, Copy, Debug)]
pub struct Output {
    /// Number of nights of the stay.
    pub nights: Nights,

    /// Price of a single night.
    pub nightly_rate: Money,

    /// [`Output::nightly_rate`] multiplied by [`Output::nights`].
    pub stay_total: Money,

    /// Flat fee for cleaning after the stay.
    pub cleaning_fee: Money,

    /// [`Output::stay_total`] plus [`Output::cleaning_fee`].
    pub total_due: Money,
}

impl<Db> Query<Quote> for Service<Db>
where
    Db: Database<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: Quote) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Quote {
            property_id,
            check_in,
            check_out,
        } = query;

        let period = DateRange::new(check_in, check_out)
            .ok_or(E::InvalidPeriod {
                check_in,
                check_out,
            })
            .map_err(tracerr::wrap!())?;
        let property = self
            .database()
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        let nights = period.nights();
        let nightly_rate = property.nightly_rate;
        let stay_total = Money {
            amount: nightly_rate.amount * Decimal::from(nights),
            currency: nightly_rate.currency,
        };
        let cleaning_fee = self.config().cleaning_fee;

        Ok(Output {
            nights,
            nightly_rate,
            stay_total,
            cleaning_fee,
            total_due: Money {
                amount: stay_total.amount + cleaning_fee.amount,
                currency: stay_total.currency,
            },
        })
    }
}

/// Error of [`Quote`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Property`] with the provided ID doesn't exist.
    #[display("`Property(id: {_0})` doesn't exist")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// Check-out day is not after the check-in day.
    #[display("check-out `{check_out}` must be after check-in `{check_in}`")]
    InvalidPeriod {
        /// Day the stay was requested to start on.
        check_in: Date,

        /// Day the stay was requested to end on.
        check_out: Date,
    },
}

#[cfg(test)]
mod spec {
    use crate::{fixture, query::Query as _};

    use super::{ExecutionError as E, Quote};

    #[tokio::test]
    async fn breaks_down_stay_price() {
        let service = fixture::service_with_property().await;

        let quote = service
            .execute(Quote {
                property_id: 1.into(),
                check_in: fixture::date("2025-11-25"),
                check_out: fixture::date("2025-11-30"),
            })
            .await
            .unwrap();

        assert_eq!(quote.nights, 5);
        assert_eq!(quote.nightly_rate, fixture::mxn(2800));
        assert_eq!(quote.stay_total, fixture::mxn(14000));
        assert_eq!(quote.cleaning_fee, fixture::mxn(500));
        assert_eq!(quote.total_due, fixture::mxn(14500));
    }

    #[tokio::test]
    async fn rejects_reversed_period() {
        let service = fixture::service_with_property().await;

        let err = service
            .execute(Quote {
                property_id: 1.into(),
                check_in: fixture::date("2025-11-30"),
                check_out: fixture::date("2025-11-25"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), E::InvalidPeriod { .. }));
    }
}
