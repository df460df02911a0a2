use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
    process,
};

use clap::CommandFactory;

use crate::cli::Cli;

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the running
/// command's help if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    io::BufReader::new(stdin.lock())
}

/// Writes binary data to the respective output source.
///
/// Binary output is refused when stdout is a terminal.
pub fn write_to_output_source(out: Option<PathBuf>, data: &[u8]) -> eyre::Result<()> {
    if let Some(out) = out {
        let mut writer = BufWriter::new(fs::File::create(&out)?);
        writer.write_all(data)?;
        writer.flush()?;
    } else {
        let mut stdout = io::stdout().lock();
        if stdout.is_terminal() {
            return Err(eyre::eyre!(
                "refusing to write binary output to a terminal; redirect it or use -o"
            ));
        }

        stdout.write_all(data)?;
        stdout.flush()?;
    }

    Ok(())
}
