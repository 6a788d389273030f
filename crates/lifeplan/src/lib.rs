//! Command-line front end for the lifeplan projection engine.
//!
//! Loads YAML scenarios from a data directory (or an explicit path), runs
//! them through [`lifeplan_core`] and renders tables or JSON.

pub mod cli;
pub mod commands;
pub mod data;
mod logging;
pub mod report;

pub use logging::init_logging;
