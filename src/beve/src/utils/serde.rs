use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
};

use serde::Serialize;

/// Exports a decoded document as JSON to a file or stdout.
///
/// Objects keep their key order, numbers are written with their
/// decoded width, and matrices become nested arrays of rows.
///
/// A terminal gets indented output for reading; files and pipes get
/// compact output for further processing.
pub fn serialize_to_output_source<T: Serialize>(
    out: Option<PathBuf>,
    value: &T,
) -> eyre::Result<()> {
    match out {
        Some(path) => {
            let mut writer = BufWriter::new(fs::File::create(&path)?);
            serde_json::to_writer(&mut writer, value)?;
            writer.flush()?;

            log::debug!("Wrote JSON to '{}'", path.display());
        }

        None => {
            let mut stdout = io::stdout().lock();
            if stdout.is_terminal() {
                serde_json::to_writer_pretty(&mut stdout, value)?;
                writeln!(stdout)?;
            } else {
                serde_json::to_writer(&mut stdout, value)?;
            }
        }
    }

    Ok(())
}
