//! Command-line layer: argument parsing, command dispatch and report printing.

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{build::build, check::check, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Build(cmd) => build(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Init => init(),
    }
}
