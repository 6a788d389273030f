use clap::Parser;
use lifeplan::cli::Args;
use lifeplan::data::DataDirectory;
use lifeplan::{commands, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let output = commands::run(&args, &data_dir).inspect_err(|err| {
        tracing::error!("Command failed: {err:#}");
    })?;
    print!("{output}");

    Ok(())
}
