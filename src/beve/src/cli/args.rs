use beve_codec::codec::{CodecFlags, CodecOptions, DEFAULT_RECURSION_LIMIT, Serializer};
use clap::{ArgAction, Args};

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity.
    ///
    /// `-v` is Debug, `-vv` is Trace.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) {
        let level = self.log_level();

        // Only fails when a logger was already installed.
        let _ = simple_logger::init_with_level(level);
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Codec configuration shared by all conversion commands.
#[derive(Clone, Copy, Debug, Args)]
pub struct CodecArgs {
    /// Codec configuration flags to use.
    ///
    /// A bit set given in decimal: 1 packs homogenous arrays into
    /// typed arrays, 2 drops variant tags and keeps their values,
    /// 4 ignores data after the root value.
    ///
    /// Every command picks a sensible default when omitted.
    #[clap(short, long)]
    pub flags: Option<u32>,

    /// The maximum nesting depth of values.
    #[clap(short, long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    pub recursion_limit: u16,
}

impl CodecArgs {
    /// Builds a validated serializer from the arguments, falling back
    /// to `default_flags` when no flags were given.
    pub fn serializer(self, default_flags: CodecFlags) -> eyre::Result<Serializer> {
        let flags = match self.flags {
            Some(bits) => CodecFlags::from_bits(bits)
                .ok_or_else(|| eyre::eyre!("unknown codec flags in {bits:#x}"))?,
            None => default_flags,
        };

        let options = CodecOptions {
            flags,
            recursion_limit: self.recursion_limit,
        };

        Serializer::new(options).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let args = CodecArgs {
            flags: Some(0x2),
            recursion_limit: 64,
        };

        let ser = args.serializer(CodecFlags::PACK_ARRAYS).unwrap();
        assert_eq!(ser.parts.options.flags, CodecFlags::STRIP_VARIANT_TAGS);
        assert_eq!(ser.parts.options.recursion_limit, 64);
    }

    #[test]
    fn bad_arguments() {
        let unknown = CodecArgs {
            flags: Some(0x80),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        };
        assert!(unknown.serializer(CodecFlags::empty()).is_err());

        let zero = CodecArgs {
            flags: None,
            recursion_limit: 0,
        };
        assert!(zero.serializer(CodecFlags::empty()).is_err());
    }
}
