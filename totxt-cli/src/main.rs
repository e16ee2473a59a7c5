#![forbid(unsafe_code)]

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;
use totxt::ConvertOptions;

mod cli;

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .init();

    let args = cli::TotxtCli::parse();

    if let Some(completion_generator) = args.completions {
        cli::TotxtCli::print_completions(completion_generator);
        return ExitCode::SUCCESS;
    }

    let options = ConvertOptions {
        directory: args.directory,
    };

    totxt::run(options)
}
