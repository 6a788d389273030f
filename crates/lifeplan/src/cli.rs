use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use lifeplan_core::sweep::SweepParameter;

#[derive(Parser, Debug)]
#[command(name = "lifeplan")]
#[command(about = "Month-by-month net worth projection over a lifetime")]
pub struct Args {
    /// Path to the data directory (default: ~/.lifeplan/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the yearly (or monthly) projection table
    Project {
        #[command(flatten)]
        run: RunArgs,

        /// Print every simulated month instead of yearly rows
        #[arg(long)]
        monthly: bool,
    },
    /// Print headline metrics for a scenario
    Summary {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Re-run a scenario for several values of one parameter
    Sweep {
        #[command(flatten)]
        run: RunArgs,

        #[arg(short, long, value_enum)]
        parameter: ParameterArg,

        /// Comma-separated values, e.g. 4,5,6,7
        #[arg(long, value_delimiter = ',', required = true, num_args = 1..)]
        values: Vec<f64>,
    },
    /// List scenarios in the data directory
    List,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunArgs {
    /// Scenario YAML file, or the name of a scenario in the data directory
    pub scenario: Option<String>,

    /// Projection start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterArg {
    RetirementAge,
    ExpectedReturn,
    Inflation,
    Contribution,
    RetirementIncome,
}

impl From<ParameterArg> for SweepParameter {
    fn from(arg: ParameterArg) -> Self {
        match arg {
            ParameterArg::RetirementAge => SweepParameter::RetirementAge,
            ParameterArg::ExpectedReturn => SweepParameter::ExpectedReturn,
            ParameterArg::Inflation => SweepParameter::InflationRate,
            ParameterArg::Contribution => SweepParameter::MonthlyContribution,
            ParameterArg::RetirementIncome => SweepParameter::RetirementIncome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_with_globals() {
        let args = Args::try_parse_from([
            "lifeplan",
            "project",
            "baseline",
            "--as-of",
            "2025-01-01",
            "--monthly",
            "--data-dir",
            "/tmp/lp",
        ])
        .unwrap();

        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/lp")));
        assert_eq!(args.log_level, "info");
        match args.command {
            Command::Project { run, monthly } => {
                assert_eq!(run.scenario.as_deref(), Some("baseline"));
                assert_eq!(run.as_of.as_deref(), Some("2025-01-01"));
                assert!(monthly);
                assert!(!run.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sweep_values() {
        let args = Args::try_parse_from([
            "lifeplan",
            "sweep",
            "plan.yaml",
            "--parameter",
            "expected-return",
            "--values",
            "4,5.5,7",
        ])
        .unwrap();

        match args.command {
            Command::Sweep {
                parameter, values, ..
            } => {
                assert_eq!(
                    SweepParameter::from(parameter),
                    SweepParameter::ExpectedReturn
                );
                assert_eq!(values, vec![4.0, 5.5, 7.0]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_sweep_requires_values() {
        assert!(
            Args::try_parse_from(["lifeplan", "sweep", "--parameter", "inflation"]).is_err()
        );
    }

    #[test]
    fn test_scenario_is_optional() {
        let args = Args::try_parse_from(["lifeplan", "summary", "--json"]).unwrap();
        match args.command {
            Command::Summary { run } => {
                assert!(run.scenario.is_none());
                assert!(run.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
