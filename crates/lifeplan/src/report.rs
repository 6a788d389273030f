//! Plain-text rendering of projection output

use std::fmt::Write;

use lifeplan_core::metrics::ProjectionSummary;
use lifeplan_core::model::{MonthlyProjectionPoint, ProjectionResult, YearlyProjectionPoint};
use lifeplan_core::sweep::{SweepParameter, SweepPoint};

/// Group the integer part of a non-negative amount with thousands separators
fn group_thousands(whole: i64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format an amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as i64;
    let formatted = format!("{}.{:02}", group_thousands(total_cents / 100), total_cents % 100);
    if value < 0.0 && total_cents != 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Format an amount in compact form (e.g., 2.1M, 450K, 50)
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs_value)
    }
}

const HEADER_COLUMNS: [&str; 6] = [
    "Net worth",
    "Real",
    "Income",
    "Expenses",
    "Contrib",
    "Returns",
];

fn write_header(out: &mut String, first: &str) {
    let _ = write!(out, "{first:<10} {:>4}", "Age");
    for column in HEADER_COLUMNS {
        let _ = write!(out, " {column:>16}");
    }
    out.push('\n');
}

fn write_amounts(out: &mut String, values: [f64; 6]) {
    for value in values {
        let _ = write!(out, " {:>16}", format_amount(value));
    }
    out.push('\n');
}

fn write_insolvency(out: &mut String, result: &ProjectionResult) {
    match result.insolvency_point() {
        Some(point) => {
            let _ = writeln!(
                out,
                "Net worth first reaches zero in {} (age {}).",
                point.date, point.age
            );
        }
        None => out.push_str("Net worth stays positive for the whole projection.\n"),
    }
}

/// Render the yearly series as a table
pub fn render_yearly(result: &ProjectionResult) -> String {
    let mut out = String::new();
    write_header(&mut out, "Year");
    for row in &result.yearly {
        render_yearly_row(&mut out, row);
    }
    write_insolvency(&mut out, result);
    out
}

fn render_yearly_row(out: &mut String, row: &YearlyProjectionPoint) {
    let _ = write!(out, "{:<10} {:>4}", row.year, row.age);
    write_amounts(
        out,
        [
            row.net_worth,
            row.real_net_worth,
            row.income,
            row.expenses,
            row.contribution,
            row.returns,
        ],
    );
}

/// Render the monthly series as a table
pub fn render_monthly(result: &ProjectionResult) -> String {
    let mut out = String::new();
    write_header(&mut out, "Month");
    for point in &result.monthly {
        render_monthly_row(&mut out, point);
    }
    write_insolvency(&mut out, result);
    out
}

fn render_monthly_row(out: &mut String, point: &MonthlyProjectionPoint) {
    let month = format!("{:04}-{:02}", point.date.year(), point.date.month());
    let _ = write!(out, "{:<10} {:>4}", month, point.age);
    write_amounts(
        out,
        [
            point.net_worth,
            point.real_net_worth,
            point.income,
            point.expenses,
            point.contribution,
            point.returns,
        ],
    );
}

fn optional_date(date: Option<jiff::civil::Date>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Render headline metrics for one projection
pub fn render_summary(name: &str, summary: &ProjectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scenario: {name}");
    let _ = writeln!(out, "  Months simulated:      {}", summary.months);
    let _ = writeln!(
        out,
        "  Final net worth:       {}",
        format_amount(summary.final_net_worth)
    );
    let _ = writeln!(
        out,
        "  Final real net worth:  {}",
        format_amount(summary.final_real_net_worth)
    );
    let _ = writeln!(
        out,
        "  Peak net worth:        {} ({})",
        format_amount(summary.peak_net_worth),
        optional_date(summary.peak_date)
    );
    match summary.net_worth_at_retirement {
        Some(value) => {
            let _ = writeln!(
                out,
                "  At retirement:         {} ({})",
                format_amount(value),
                optional_date(summary.retirement_date)
            );
        }
        None => out.push_str("  At retirement:         -\n"),
    }
    let _ = writeln!(
        out,
        "  Max drawdown:          {}",
        format_amount(summary.max_drawdown)
    );
    let _ = writeln!(
        out,
        "  Total contributions:   {}",
        format_amount(summary.total_contributions)
    );
    let _ = writeln!(
        out,
        "  Total returns:         {}",
        format_amount(summary.total_returns)
    );
    match (summary.insolvency_date, summary.insolvency_age) {
        (Some(date), Some(age)) => {
            let _ = writeln!(out, "  Insolvent from:        {date} (age {age})");
        }
        _ => out.push_str("  Insolvent from:        never\n"),
    }
    out
}

/// Render one line per sweep value
pub fn render_sweep(parameter: SweepParameter, points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>20} {:>12} {:>12} {:>12} {:>12}",
        parameter.label(),
        "Final",
        "Final real",
        "Peak",
        "Insolvent"
    );
    for point in points {
        let _ = writeln!(
            out,
            "{:>20} {:>12} {:>12} {:>12} {:>12}",
            format!("{:.2}", point.value),
            format_compact(point.summary.final_net_worth),
            format_compact(point.summary.final_real_net_worth),
            format_compact(point.summary.peak_net_worth),
            optional_date(point.summary.insolvency_date)
        );
    }
    out
}
