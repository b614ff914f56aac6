//! `tally` loads a cluster snapshot and prints what a majority quorum decides
//! about it: the committed index and the election outcome.

mod config;
mod errors;
mod logging;
mod report;
mod snapshot;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod report_test;

use clap::Parser;

use crate::config::Config;
use crate::logging::init_logging;
use crate::report::Report;
use crate::snapshot::Snapshot;

fn main() -> anyhow::Result<()> {
    let config = Config::parse().validate()?;

    let _guard =
        init_logging("tally", &config.log_level, config.log_dir.as_deref())?;

    tracing::info!("config: {:?}", config);

    let snapshot = Snapshot::load(&config.snapshot)?;
    let report = Report::new(&snapshot, config.describe);

    print!("{}", report);
    Ok(())
}
