use anyhow::Result;

use super::{
    args::Command,
    commands::{generate::generate, init::init},
    exit_status::ExitStatus,
};

pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Generate(cmd) => generate(cmd),
        Command::Init => init(),
    }
}
