use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct TotxtCli {
    #[clap(
        default_value = ".",
        help = "The directory whose .js and .html files (any case) shall be converted into .txt files. \
                Only direct entries are considered, subdirectories are never descended into and a directory named like 'foo.js' is skipped. \
                Beware: an already existing .txt file with the same base name gets overwritten without a warning."
    )]
    pub(crate) directory: PathBuf,

    #[clap(
        long,
        value_enum,
        value_name = "SHELL",
        help = "Print the completion script for the given shell and exit."
    )]
    pub(crate) completions: Option<Shell>,
}

impl TotxtCli {
    pub(crate) fn print_completions(completion_generator: Shell) {
        let mut command = TotxtCli::command();
        let binary_name = command.get_name().to_string();

        clap_complete::generate(completion_generator, &mut command, binary_name, &mut std::io::stdout());
    }
}
