use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::CodecArgs;

pub mod helpers;

pub mod io;
pub use io::*;

mod processor;
pub use processor::*;

pub const HYPHEN: &str = "-";

/// Converts between BEVE binary documents and JSON.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: BeveCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by the tool.
#[derive(Debug, Subcommand)]
pub enum BeveCommand {
    De(de::De),
    Ser(ser::Ser),
}

impl Command for BeveCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::De(de) => de.handle(),
            Self::Ser(ser) => ser.handle(),
        }
    }
}
