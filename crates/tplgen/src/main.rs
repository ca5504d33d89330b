mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tplgen_core::TplgenError;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let verbose = cli.verbose;
    let result = commands::generate::run(cli.into_options(command_line()), verbose);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

/// The invocation as typed, embedded in the generated header
fn command_line() -> String {
    std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TplgenError>()
        .map(TplgenError::exit_code)
        .unwrap_or(1)
}
