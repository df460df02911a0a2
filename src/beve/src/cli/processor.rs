use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use eyre::Context;
use rayon::prelude::*;

use super::{InputSource, OutputSource};
use crate::utils;

/// Reads the whole document from stdin.
fn read_stdin() -> eyre::Result<Vec<u8>> {
    let mut stdin = utils::stdin_reader();
    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;

    Ok(buf)
}

/// Reads the whole document from a file.
fn read_file(path: &Path) -> eyre::Result<Vec<u8>> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;

    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
    let mut buf = Vec::with_capacity(size);
    io::BufReader::new(file).read_to_end(&mut buf)?;

    Ok(buf)
}

/// Processes inputs with rayon parallelism for batch operations.
///
/// Every worker thread gets its own state from `init`, which is then
/// passed to `read` along with the raw document bytes.
pub fn process_par<T, S, R, W>(
    input: InputSource,
    output: OutputSource,
    init: impl Fn() -> S + Sync + Send,
    read: R,
    write: W,
) -> eyre::Result<()>
where
    T: Send,
    S: Send,
    R: Fn(&mut S, Vec<u8>) -> eyre::Result<T> + Sync,
    W: Fn(Option<PathBuf>, T, OutputSource) -> eyre::Result<()> + Sync,
{
    match (input, output) {
        (InputSource::Stdin, out) => {
            let value = read(&mut init(), read_stdin()?)?;
            write(None, value, out)
        }

        (InputSource::File(path), out) => {
            let value = read(&mut init(), read_file(&path)?)
                .with_context(|| format!("failed to convert '{}'", path.display()))?;
            write(Some(path), value, out)
        }

        (InputSource::Files(paths), OutputSource::Dir(dir, suffix)) => {
            fs::create_dir_all(&dir)?;
            log::debug!("Converting {} files into '{}'", paths.len(), dir.display());

            paths
                .into_par_iter()
                .try_for_each_init(init, |state, path| {
                    let value = read(state, read_file(&path)?)
                        .with_context(|| format!("failed to convert '{}'", path.display()))?;
                    write(Some(path), value, OutputSource::Dir(dir.clone(), suffix))
                })
        }

        (InputSource::Files(..), _) => Err(eyre::eyre!(
            "multiple inputs need an output directory; specify one with -o"
        )),
    }
}
