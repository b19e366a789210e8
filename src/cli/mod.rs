//! Command-line interface layer.
//!
//! Everything here only parses arguments, wires config to the library and
//! prints results; the checks themselves live in `build_step` and `validator`.

pub mod args;
mod commands;
pub mod exit_status;
mod report;

use anyhow::Result;

pub use args::{Arguments, CheckArgs, Command, InitArgs};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(check_args)) => commands::check::check(check_args),
        Some(Command::Init(init_args)) => commands::init::init(init_args),
        None => Ok(ExitStatus::Success),
    }
}
