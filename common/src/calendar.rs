//! Calendar day and date range utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData, str::FromStr};

use derive_more::{Debug, Display, Error};
use time::macros::format_description;

/// Number of nights spanned by a stay.
pub type Nights = u32;

/// Untyped calendar day.
pub type Date = DateOf;

/// Calendar day without a time-of-day component.
///
/// Booking arithmetic works on whole days, so values of this type are
/// normalized by construction: two dates referring to the same day compare
/// equal regardless of the wall clock that produced them.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the calendar day.
    inner: time::Date,

    /// Type parameter describing the kind of calendar day.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Returns the current calendar day in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] from the provided year, month and day numbers.
    ///
    /// [`None`] is returned if the combination doesn't name an existing
    /// calendar day.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        Some(Self {
            inner: time::Date::from_calendar_date(year, month, day).ok()?,
            _of: PhantomData,
        })
    }

    /// Creates a new [`Date`] from the provided `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string doesn't name an existing calendar day.
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
            .map_err(ParseError)
    }

    /// Counts the nights a guest staying from this [`Date`] up to (and not
    /// including) the `checkout` one would occupy.
    ///
    /// Same-day checkout counts as zero nights. [`None`] is returned when
    /// `checkout` lies before this [`Date`]: a reversed pair of dates is a
    /// caller error, never a stay of "absolute difference" length.
    #[must_use]
    pub fn nights_until(self, checkout: Self) -> Option<Nights> {
        Nights::try_from((checkout.inner - self.inner).whole_days()).ok()
    }

    /// Returns the [`Date`] lying the given number of days after this one.
    ///
    /// [`None`] is returned on calendar overflow.
    #[must_use]
    pub fn plus_days(self, days: u16) -> Option<Self> {
        Some(Self {
            inner: self
                .inner
                .checked_add(time::Duration::days(i64::from(days)))?,
            _of: PhantomData,
        })
    }

    /// Returns the [`Date`] lying the given number of days before this one.
    ///
    /// [`None`] is returned on calendar underflow.
    #[must_use]
    pub fn minus_days(self, days: u16) -> Option<Self> {
        Some(Self {
            inner: self
                .inner
                .checked_sub(time::Duration::days(i64::from(days)))?,
            _of: PhantomData,
        })
    }

    /// Returns the [`Date`] lying the given number of calendar months before
    /// this one, keeping the day number and clamping it to the target
    /// month's length (e.g. March 31 minus one month is the last day of
    /// February).
    ///
    /// [`None`] is returned on calendar underflow.
    #[must_use]
    pub fn minus_months(self, months: u32) -> Option<Self> {
        let zero_based = i64::from(self.inner.year()) * 12
            + i64::from(u8::from(self.inner.month()))
            - 1
            - i64::from(months);
        let year = i32::try_from(zero_based.div_euclid(12)).ok()?;
        let month =
            time::Month::try_from(u8::try_from(zero_based.rem_euclid(12) + 1).ok()?)
                .ok()?;
        let day = self
            .inner
            .day()
            .min(time::util::days_in_year_month(year, month));
        Some(Self {
            inner: time::Date::from_calendar_date(year, month, day).ok()?,
            _of: PhantomData,
        })
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }

    pub(crate) fn from_inner(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("cannot parse `Date`: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso8601(s)
    }
}

/// Half-open range of calendar days: the `start` day is occupied, the `end`
/// day is not.
///
/// The half-open representation is what makes back-to-back stays legal: a
/// guest checking out on some day never conflicts with another checking in
/// on that same day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateRange {
    /// First occupied day of this [`DateRange`].
    start: Date,

    /// First day following this [`DateRange`].
    end: Date,
}

impl DateRange {
    /// Creates a new [`DateRange`] if `start` lies strictly before `end`.
    ///
    /// Empty and reversed ranges are rejected.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Creates a new [`DateRange`] without checking the day order.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `start` lies strictly before `end`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns the first occupied day of this [`DateRange`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the first day following this [`DateRange`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of nights this [`DateRange`] spans (always at
    /// least one).
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn nights(&self) -> Nights {
        self.start.nights_until(self.end).expect("`start < end`")
    }

    /// Indicates whether this [`DateRange`] intersects the `other` one.
    ///
    /// Ranges sharing only a boundary day do not intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Indicates whether the given `day` is occupied by this [`DateRange`].
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { start, end } = self;
        write!(f, "{start}..{end}")
    }
}

#[cfg(test)]
mod spec {
    use super::{Date, DateRange};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn counts_nights() {
        let d = date("2025-11-25");

        assert_eq!(d.nights_until(d), Some(0));
        assert_eq!(d.nights_until(date("2025-11-26")), Some(1));
        assert_eq!(d.nights_until(date("2025-11-30")), Some(5));
        assert_eq!(d.nights_until(date("2025-12-25")), Some(30));
    }

    #[test]
    fn rejects_reversed_nights() {
        assert_eq!(date("2025-11-25").nights_until(date("2025-11-24")), None);
        assert_eq!(date("2025-11-25").nights_until(date("2024-11-25")), None);
    }

    #[test]
    fn range_requires_order() {
        let d = date("2025-11-25");

        assert!(DateRange::new(d, d).is_none());
        assert!(DateRange::new(date("2025-11-26"), d).is_none());
        assert_eq!(range("2025-11-25", "2025-11-30").nights(), 5);
    }

    #[test]
    fn detects_overlap() {
        let booked = range("2025-11-25", "2025-11-30");

        // Identical, containing, contained and partially intersecting.
        assert!(booked.overlaps(&range("2025-11-25", "2025-11-30")));
        assert!(booked.overlaps(&range("2025-11-24", "2025-12-01")));
        assert!(booked.overlaps(&range("2025-11-26", "2025-11-28")));
        assert!(booked.overlaps(&range("2025-11-28", "2025-12-02")));
        assert!(booked.overlaps(&range("2025-11-20", "2025-11-26")));
    }

    #[test]
    fn allows_back_to_back() {
        let booked = range("2025-11-25", "2025-11-30");

        assert!(!booked.overlaps(&range("2025-11-30", "2025-12-05")));
        assert!(!booked.overlaps(&range("2025-11-20", "2025-11-25")));
    }

    #[test]
    fn contains_occupied_days_only() {
        let booked = range("2025-11-25", "2025-11-30");

        assert!(booked.contains(date("2025-11-25")));
        assert!(booked.contains(date("2025-11-29")));
        assert!(!booked.contains(date("2025-11-30")));
        assert!(!booked.contains(date("2025-11-24")));
    }

    #[test]
    fn steps_months_back_with_clamping() {
        assert_eq!(
            date("2025-03-31").minus_months(1),
            Some(date("2025-02-28")),
        );
        assert_eq!(
            date("2024-03-31").minus_months(1),
            Some(date("2024-02-29")),
        );
        assert_eq!(
            date("2025-01-15").minus_months(1),
            Some(date("2024-12-15")),
        );
        assert_eq!(
            date("2025-11-29").minus_months(1),
            Some(date("2025-10-29")),
        );
    }

    #[test]
    fn parses_and_displays_iso8601() {
        assert_eq!(date("2025-02-14").to_string(), "2025-02-14");
        assert!(Date::from_iso8601("14/02/2025").is_err());
        assert!(Date::from_iso8601("2025-02-30").is_err());
    }
}
