use beve_codec::codec::CodecFlags;
use clap::Args;

use super::Command;
use crate::cli::{CodecArgs, InputsOutputs, helpers, process_par};

/// Deserializes BEVE documents to JSON.
#[derive(Debug, Args)]
pub struct De {
    #[clap(flatten)]
    args: InputsOutputs,

    #[clap(flatten)]
    codec: CodecArgs,
}

impl Command for De {
    fn handle(self) -> eyre::Result<()> {
        let serializer = self.codec.serializer(CodecFlags::empty())?;
        let (inputs, outputs) = self.args.evaluate("json")?;

        process_par(
            inputs,
            outputs,
            || serializer.clone(),
            |de, buf| de.deserialize(&buf).map_err(Into::into),
            helpers::write_as_json,
        )
    }
}
