use apicheck_cli::cli_args::Args;
use apicheck_cli::error::Result;
use clap::Parser;
use log::info;
use std::process::ExitCode;

fn execute() -> Result<()> {
    let args = Args::parse();
    let options = args.resolve()?;
    info!(
        "Options validated for schema `{}` with {} worker(s)",
        options.schema.as_str(),
        options.workers
    );

    print!("{}", options.to_yaml()?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
