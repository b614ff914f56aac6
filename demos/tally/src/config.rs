//! Command line configuration of `tally`.

use std::path::PathBuf;

use anyerror::AnyError;
use clap::Parser;

use crate::errors::ConfigError;

/// Print the committed index and the election outcome of a cluster snapshot.
#[derive(Clone, Debug, Parser)]
#[clap(name = "tally")]
pub struct Config {
    /// Path to a JSON file with `voters`, `acked` and `votes`
    #[clap(long)]
    pub snapshot: PathBuf,

    /// Log filter directives, used when `RUST_LOG` is not set
    #[clap(long, default_value = "info")]
    pub log_level: String,

    /// If set, also write logs to an hourly rotated file in this dir
    #[clap(long)]
    pub log_dir: Option<String>,

    /// Whether to print the acked index table of every voter.
    ///
    /// - being absent: true
    /// - `--describe`: true
    /// - `--describe=true`: true
    /// - `--describe=false`: false
    // clap 4 requires `num_args = 0..=1`, or it complains about missing arg
    // error https://github.com/clap-rs/clap/discussions/4374
    #[clap(long,
           default_value_t = true,
           action = clap::ArgAction::Set,
           num_args = 0..=1,
           default_missing_value = "true"
    )]
    pub describe: bool,
}

impl Config {
    /// Build a `Config` instance from a series of command line arguments.
    ///
    /// The first element in `args` must be the application name.
    pub fn build(args: &[&str]) -> Result<Config, ConfigError> {
        let config = <Self as Parser>::try_parse_from(args).map_err(|e| {
            ConfigError::ParseError {
                source: AnyError::from(&e),
                args: args.iter().map(|x| x.to_string()).collect(),
            }
        })?;
        config.validate()
    }

    /// Validate the state of this config.
    pub fn validate(self) -> Result<Config, ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        if self.snapshot.as_os_str().is_empty() {
            return Err(ConfigError::EmptySnapshotPath);
        }

        Ok(self)
    }
}
