use std::path::PathBuf;

use super::OutputSource;
use crate::utils;

/// Resolves the path a converted document is written to.
///
/// Returns [`None`] when the document goes to stdout.
fn output_path(inpath: Option<PathBuf>, out: OutputSource) -> eyre::Result<Option<PathBuf>> {
    match (out, inpath) {
        (OutputSource::Stdout, _) => Ok(None),
        (OutputSource::File(path), _) => Ok(Some(path)),
        (OutputSource::Dir(mut out, suffix), Some(path)) => {
            // Create a file named after the input in the output directory.
            let infile = path.with_extension(suffix);
            let name = infile
                .file_name()
                .ok_or_else(|| eyre::eyre!("input path '{}' has no file name", path.display()))?;
            out.push(name);

            Ok(Some(out))
        }

        (OutputSource::Dir(..), None) => Err(eyre::eyre!(
            "output path for stdin input is directory; specify a file path instead"
        )),
    }
}

/// Helper for [`super::process_par`] which writes any serializable
/// `T` value as JSON to an output source.
pub fn write_as_json<T: serde::Serialize>(
    inpath: Option<PathBuf>,
    value: T,
    out: OutputSource,
) -> eyre::Result<()> {
    let path = output_path(inpath, out)?;
    utils::serialize_to_output_source(path, &value)
}

/// Helper for [`super::process_par`] which writes raw encoded bytes
/// to an output source.
pub fn write_as_bytes(inpath: Option<PathBuf>, value: Vec<u8>, out: OutputSource) -> eyre::Result<()> {
    let path = output_path(inpath, out)?;
    utils::write_to_output_source(path, &value)
}
