use std::path::PathBuf;

use clap::Args;
use glob::glob;

use crate::cli::HYPHEN;

/// Where a command reads its documents from.
#[derive(Clone, Debug)]
pub enum InputSource {
    /// A single document from stdin.
    Stdin,
    /// A single document from a file.
    File(PathBuf),
    /// Every file matched by a glob pattern.
    Files(Vec<PathBuf>),
}

/// Where a command writes its converted documents to.
#[derive(Clone, Debug)]
pub enum OutputSource {
    /// A single document to stdout.
    Stdout,
    /// A single document to a file.
    File(PathBuf),
    /// One file per input in the directory, named after the input
    /// with the extension replaced by the suffix.
    Dir(PathBuf, &'static str),
}

/// Input and output arguments shared by the conversion commands.
#[derive(Debug, Args)]
pub struct InputsOutputs {
    /// The documents to convert.
    ///
    /// "-" reads a single document from stdin. Anything else is
    /// a path, which may be a UNIX glob pattern to select many
    /// files at once.
    ///
    /// When more than one file matches, the output option must
    /// name a directory.
    pub input: String,

    /// Where to write the converted documents.
    ///
    /// Defaults to "-" for stdout. Otherwise this is a single file
    /// for a single input, or a directory that receives one file
    /// per input.
    #[clap(short, default_value = HYPHEN)]
    pub output: PathBuf,
}

impl InputsOutputs {
    /// Evaluates the supplied arguments into input and output sources.
    ///
    /// `suffix` is the file extension of outputs written to a
    /// directory.
    pub fn evaluate(self, suffix: &'static str) -> eyre::Result<(InputSource, OutputSource)> {
        let inputs = self.input_source()?;
        let outputs = self.output_source(suffix, &inputs);

        Ok((inputs, outputs))
    }

    fn input_source(&self) -> eyre::Result<InputSource> {
        if self.input == HYPHEN {
            return Ok(InputSource::Stdin);
        }

        // A plain path is a valid glob pattern too.
        let mut paths: Vec<PathBuf> = glob(&self.input)?.collect::<Result<_, _>>()?;

        match paths.len() {
            0 => Err(eyre::eyre!("failed to find files matching '{}'", self.input)),
            1 => Ok(InputSource::File(paths.remove(0))),
            _ => Ok(InputSource::Files(paths)),
        }
    }

    fn output_source(self, suffix: &'static str, input: &InputSource) -> OutputSource {
        if self.output.as_os_str() == HYPHEN {
            return OutputSource::Stdout;
        }

        match input {
            InputSource::Files(..) => OutputSource::Dir(self.output, suffix),
            _ if self.output.is_dir() => OutputSource::Dir(self.output, suffix),
            InputSource::Stdin | InputSource::File(..) => OutputSource::File(self.output),
        }
    }
}
