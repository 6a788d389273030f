//! Month-granular calendar arithmetic for the projection loop.
//!
//! The projection walks one calendar month at a time and compares dates by
//! (year, month) only. jiff `Span` arithmetic is correct but heavier than we
//! need for that, so the helpers here work directly on month ordinals
//! (`year * 12 + month - 1`) and clamp the day-of-month by hand.
//!
//! All helpers saturate at the edges of jiff's supported year range instead
//! of panicking, so absurd life expectancies still produce a finite series.

use jiff::civil::Date;

const MIN_YEAR: i32 = -9999;
const MAX_YEAR: i32 = 9999;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Fast inline days-in-month calculation without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Months since year 0 for the (year, month) of `d`.
///
/// Two dates in the same calendar month have the same ordinal, which makes
/// this the comparison key wherever day-of-month must be ignored.
#[inline]
pub fn month_ordinal(d: Date) -> i32 {
    i32::from(d.year()) * 12 + i32::from(d.month()) - 1
}

/// Build a date from a month ordinal and a desired day, clamping the day to
/// the month length and the year to jiff's range.
fn from_ordinal(ordinal: i32, day: i8) -> Date {
    let year = ordinal.div_euclid(12).clamp(MIN_YEAR, MAX_YEAR) as i16;
    let month = (ordinal.rem_euclid(12) + 1) as i8;
    let day = day.min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}

/// First day of the month containing `d`.
#[inline]
pub fn first_of_month(d: Date) -> Date {
    jiff::civil::date(d.year(), d.month(), 1)
}

/// Add `n` calendar months to `d`.
///
/// The day-of-month is clamped to the length of the target month, so
/// Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year).
#[inline]
pub fn add_months(d: Date, n: i32) -> Date {
    from_ordinal(month_ordinal(d).saturating_add(n), d.day())
}

/// Add `n` calendar years to `d`. Feb 29 lands on Feb 28 in non-leap years.
#[inline]
pub fn add_years(d: Date, n: i32) -> Date {
    add_months(d, n.saturating_mul(12))
}

/// Number of whole calendar months from `from` to `to`.
///
/// A trailing partial month is not counted: 2025-01-15 to 2025-03-14 is one
/// month, to 2025-03-15 is two. Negative when `to` precedes `from`.
pub fn months_between(from: Date, to: Date) -> i32 {
    let mut months = month_ordinal(to) - month_ordinal(from);
    if months > 0 && to.day() < from.day() {
        months -= 1;
    } else if months < 0 && to.day() > from.day() {
        months += 1;
    }
    months
}

/// Age in whole years on `on` for someone born on `birth`.
pub fn age_at(birth: Date, on: Date) -> i32 {
    let mut age = i32::from(on.year()) - i32::from(birth.year());
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
