use clap::Parser;

mod cli;
use cli::Cli;

mod cmd;
use cmd::Command;

mod utils;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eyre::Result<()> {
    let Cli { command, verbosity } = Cli::parse();
    verbosity.setup();

    log::debug!("Running {command:?}");
    command.handle()
}
