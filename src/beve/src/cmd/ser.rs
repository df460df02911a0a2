use beve_codec::{
    Value,
    codec::CodecFlags,
    value::{List, Object},
};
use clap::Args;

use super::Command;
use crate::cli::{CodecArgs, InputsOutputs, helpers, process_par};

/// Serializes JSON documents to BEVE.
///
/// Integers become 64-bit signed or unsigned numbers, all other
/// numbers become 64-bit floats. Unless flags are given, arrays of
/// a single number type or of strings are packed into typed arrays.
#[derive(Debug, Args)]
pub struct Ser {
    #[clap(flatten)]
    args: InputsOutputs,

    #[clap(flatten)]
    codec: CodecArgs,
}

impl Command for Ser {
    fn handle(self) -> eyre::Result<()> {
        let serializer = self.codec.serializer(CodecFlags::PACK_ARRAYS)?;
        let (inputs, outputs) = self.args.evaluate("beve")?;

        process_par(
            inputs,
            outputs,
            || serializer.clone(),
            |ser, buf| {
                let json: serde_json::Value = serde_json::from_slice(&buf)?;
                ser.serialize(&from_json(json)).map_err(Into::into)
            },
            helpers::write_as_bytes,
        )
    }
}

/// Converts a parsed JSON document into a BEVE [`Value`].
fn from_json(json: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match json {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Bool(v),

        Json::Number(n) => {
            if let Some(v) = n.as_u64() {
                Value::from(v)
            } else if let Some(v) = n.as_i64() {
                Value::from(v)
            } else {
                // Finite JSON numbers always fit a f64, possibly rounded.
                Value::from(n.as_f64().unwrap_or(f64::NAN))
            }
        }

        Json::String(v) => Value::String(v),

        Json::Array(values) => Value::Array(values.into_iter().map(from_json).collect::<List>()),

        Json::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect::<Object>(),
        ),
    }
}
