//! Subcommand execution
//!
//! Every command renders into a `String`; `main` decides where it goes.

use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use jiff::civil::Date;
use lifeplan_core::metrics::ProjectionSummary;
use lifeplan_core::sweep::{SweepParameter, sweep};
use lifeplan_core::{ProjectionInput, project};

use crate::cli::{Args, Command, RunArgs};
use crate::data::{
    DataConfig, DataDirectory, ScenarioData, load_scenario_file, parse_date, to_projection_input,
};
use crate::report;

/// A scenario ready to project
struct Loaded {
    name: String,
    input: ProjectionInput,
    as_of: Date,
}

/// Execute the parsed command against the data directory at `data_dir`
pub fn run(args: &Args, data_dir: &Path) -> color_eyre::Result<String> {
    let dir = DataDirectory::new(data_dir.to_path_buf());

    match &args.command {
        Command::Project { run, monthly } => {
            let loaded = load(&dir, run)?;
            let result = project(&loaded.input, loaded.as_of);
            tracing::info!(
                scenario = %loaded.name,
                as_of = %loaded.as_of,
                months = result.monthly.len(),
                insolvent_at = ?result.first_month_with_zero_or_negative_net_worth,
                "Projection complete"
            );

            if run.json {
                Ok(serde_json::to_string_pretty(&result)?)
            } else if *monthly {
                Ok(report::render_monthly(&result))
            } else {
                Ok(report::render_yearly(&result))
            }
        }
        Command::Summary { run } => {
            let loaded = load(&dir, run)?;
            let result = project(&loaded.input, loaded.as_of);
            let summary = ProjectionSummary::from_result(&result, &loaded.input.settings);
            tracing::info!(scenario = %loaded.name, solvent = summary.is_solvent(), "Summary computed");

            if run.json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(report::render_summary(&loaded.name, &summary))
            }
        }
        Command::Sweep {
            run,
            parameter,
            values,
        } => {
            let loaded = load(&dir, run)?;
            let parameter = SweepParameter::from(*parameter);
            let points = sweep(&loaded.input, loaded.as_of, parameter, values)
                .wrap_err_with(|| format!("Sweep over {} failed", parameter.label()))?;
            tracing::info!(
                scenario = %loaded.name,
                parameter = parameter.label(),
                points = points.len(),
                "Sweep complete"
            );

            if run.json {
                Ok(serde_json::to_string_pretty(&points)?)
            } else {
                Ok(report::render_sweep(parameter, &points))
            }
        }
        Command::List => {
            let names = dir.list_scenarios()?;
            if names.is_empty() {
                return Ok(format!(
                    "No scenarios in {}\n",
                    dir.root().join("scenarios").display()
                ));
            }
            let default = dir.load_config()?.default_scenario;
            Ok(names
                .iter()
                .map(|name| {
                    if default.as_deref() == Some(name.as_str()) {
                        format!("{name} (default)\n")
                    } else {
                        format!("{name}\n")
                    }
                })
                .collect())
        }
    }
}

fn load(dir: &DataDirectory, run: &RunArgs) -> color_eyre::Result<Loaded> {
    let config = dir.load_config()?;
    let (name, data) = resolve_scenario(dir, &config, run.scenario.as_deref())?;
    let input = to_projection_input(&data)
        .wrap_err_with(|| format!("Scenario '{name}' is invalid"))?;
    let as_of = resolve_as_of(run.as_of.as_deref(), &config)?;
    tracing::debug!(
        scenario = %name,
        events = input.events.len(),
        micro_plans = input.micro_plans.len(),
        "Scenario loaded"
    );
    Ok(Loaded { name, input, as_of })
}

/// Find the scenario to run.
///
/// An argument naming an existing file (or ending in `.yaml`/`.yml`) is read
/// as a path; anything else is a scenario name in the data directory. Without
/// an argument the configured default scenario is used.
fn resolve_scenario(
    dir: &DataDirectory,
    config: &DataConfig,
    scenario: Option<&str>,
) -> color_eyre::Result<(String, ScenarioData)> {
    let requested = scenario
        .or(config.default_scenario.as_deref())
        .ok_or_else(|| {
            eyre!("No scenario given and no default_scenario set in config.yaml")
        })?;

    let path = Path::new(requested);
    let looks_like_file = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");

    let data = if path.is_file() || looks_like_file {
        load_scenario_file(path)?
    } else {
        dir.load_scenario(requested)?
    };

    let name = data.name.clone().unwrap_or_else(|| requested.to_string());
    Ok((name, data))
}

/// `--as-of`, then `default_as_of` from config, then today's date
fn resolve_as_of(as_of: Option<&str>, config: &DataConfig) -> color_eyre::Result<Date> {
    if let Some(value) = as_of {
        return Ok(parse_date("--as-of", value)?);
    }
    if let Some(value) = config.default_as_of.as_deref() {
        return Ok(parse_date("default_as_of", value)?);
    }
    Ok(jiff::Zoned::now().date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const BASELINE: &str = r#"
profile:
  birth_date: "1995-01-01"
  life_expectancy_years: 31
settings:
  base_net_worth: 1000
  base_monthly_income: 8000
  base_monthly_expenses: 5000
  monthly_contribution: 1500
  retirement_age: 65
"#;

    const BROKE: &str = r#"
profile:
  birth_date: "1995-01-01"
  life_expectancy_years: 31
settings:
  base_net_worth: 1000
  base_monthly_income: 1000
  base_monthly_expenses: 3000
events:
  - type: purchase
    title: Roof
    date: "2025-02-01"
    amount: 5000
    frequency: once
"#;

    fn data_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = DataDirectory::new(temp.path().to_path_buf());
        dir.init().unwrap();
        fs::write(temp.path().join("scenarios").join("baseline.yaml"), BASELINE).unwrap();
        fs::write(temp.path().join("scenarios").join("broke.yaml"), BROKE).unwrap();
        temp
    }

    fn run_cli(temp: &TempDir, argv: &[&str]) -> color_eyre::Result<String> {
        let args = Args::try_parse_from(std::iter::once("lifeplan").chain(argv.iter().copied()))
            .unwrap();
        run(&args, temp.path())
    }

    #[test]
    fn test_project_yearly_table() {
        let temp = data_dir();
        let out = run_cli(&temp, &["project", "baseline", "--as-of", "2025-01-01"]).unwrap();
        // 2025-01 through 2026-01 inclusive
        assert!(out.contains("2025"));
        assert!(out.contains("2026"));
        assert!(out.contains("stays positive"));
    }

    #[test]
    fn test_project_json_is_projection_result() {
        let temp = data_dir();
        let out = run_cli(
            &temp,
            &["project", "baseline", "--as-of", "2025-01-01", "--json"],
        )
        .unwrap();
        let result: lifeplan_core::model::ProjectionResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result.monthly.len(), 13);
        assert_eq!(result.monthly[0].net_worth, 2_500.0);
        assert_eq!(result.first_month_with_zero_or_negative_net_worth, None);
    }

    #[test]
    fn test_summary_reports_insolvency() {
        let temp = data_dir();
        let out = run_cli(&temp, &["summary", "broke", "--as-of", "2025-01-01"]).unwrap();
        assert!(out.contains("Scenario: broke"));
        assert!(out.contains("Insolvent from:        2025-02-01"));
    }

    #[test]
    fn test_default_scenario_and_as_of_from_config() {
        let temp = data_dir();
        fs::write(
            temp.path().join("config.yaml"),
            "default_scenario: baseline\ndefault_as_of: \"2025-06-01\"\n",
        )
        .unwrap();

        let out = run_cli(&temp, &["project", "--json"]).unwrap();
        let result: lifeplan_core::model::ProjectionResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result.monthly[0].date, jiff::civil::date(2025, 6, 1));
    }

    #[test]
    fn test_missing_scenario_is_an_error() {
        let temp = data_dir();
        assert!(run_cli(&temp, &["project", "--as-of", "2025-01-01"]).is_err());
        assert!(run_cli(&temp, &["project", "nope", "--as-of", "2025-01-01"]).is_err());
    }

    #[test]
    fn test_bad_as_of_is_an_error() {
        let temp = data_dir();
        let err = run_cli(&temp, &["project", "baseline", "--as-of", "June"]).unwrap_err();
        assert!(err.to_string().contains("--as-of"));
    }

    #[test]
    fn test_scenario_by_path() {
        let temp = data_dir();
        let path = temp.path().join("elsewhere.yaml");
        fs::write(&path, BASELINE).unwrap();
        let out = run_cli(
            &temp,
            &["summary", path.to_str().unwrap(), "--as-of", "2025-01-01"],
        )
        .unwrap();
        assert!(out.contains("Scenario: elsewhere"));
    }

    #[test]
    fn test_sweep_one_row_per_value() {
        let temp = data_dir();
        let out = run_cli(
            &temp,
            &[
                "sweep",
                "baseline",
                "--as-of",
                "2025-01-01",
                "--parameter",
                "contribution",
                "--values",
                "0,500,1000",
            ],
        )
        .unwrap();
        // header + three rows
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("Monthly Contribution"));
    }

    #[test]
    fn test_list_marks_default() {
        let temp = data_dir();
        fs::write(temp.path().join("config.yaml"), "default_scenario: broke\n").unwrap();
        let out = run_cli(&temp, &["list"]).unwrap();
        assert_eq!(out, "baseline\nbroke (default)\n");
    }
}
