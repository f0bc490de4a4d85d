//! Command-line arguments for the `gradebook` binary.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const USAGE: &str = "gradebook [--config <path.json>]";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// JSON configuration file, if given.
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::Usage(USAGE.to_string()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => parsed.help = true,
                _ => return Err(ConfigError::Usage(USAGE.to_string())),
            }
        }

        Ok(parsed)
    }
}
