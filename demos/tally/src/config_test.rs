use std::path::PathBuf;

use crate::config::Config;
use crate::errors::ConfigError;

#[test]
fn test_config_defaults() -> anyhow::Result<()> {
    let cfg = Config::build(&["tally", "--snapshot=cluster.json"])?;

    assert_eq!(PathBuf::from("cluster.json"), cfg.snapshot);
    assert_eq!("info", cfg.log_level);
    assert_eq!(None, cfg.log_dir);
    assert_eq!(true, cfg.describe);

    Ok(())
}

#[test]
fn test_config_snapshot_is_required() {
    let res = Config::build(&["tally"]);

    match res.unwrap_err() {
        ConfigError::ParseError { source, args } => {
            assert!(source.to_string().contains("--snapshot"), "{}", source);
            assert_eq!(vec!["tally"], args);
        }
        e => panic!("unexpected error: {}", e),
    }
}

#[test]
fn test_build() -> anyhow::Result<()> {
    let config = Config::build(&[
        "tally",
        "--snapshot=/tmp/cluster.json",
        "--log-level=debug",
        "--log-dir=/tmp/logs",
    ])?;

    assert_eq!(PathBuf::from("/tmp/cluster.json"), config.snapshot);
    assert_eq!("debug", config.log_level);
    assert_eq!(Some("/tmp/logs".to_string()), config.log_dir);

    Ok(())
}

#[test]
fn test_config_describe() -> anyhow::Result<()> {
    let build = |flag: &str| Config::build(&["tally", "--snapshot=s.json", flag]);

    assert_eq!(false, build("--describe=false")?.describe);
    assert_eq!(true, build("--describe=true")?.describe);
    assert_eq!(true, build("--describe")?.describe);

    let config = Config::build(&["tally", "--snapshot=s.json"])?;
    assert_eq!(true, config.describe);

    Ok(())
}

#[test]
fn test_invalid_config_produces_expected_error() -> anyhow::Result<()> {
    let res = Config::build(&["tally", "--snapshot=s.json", "--log-level= "]);
    assert_eq!(ConfigError::EmptyLogLevel, res.unwrap_err());

    let config = Config::build(&["tally", "--snapshot=s.json"])?;
    let config = Config {
        snapshot: PathBuf::new(),
        ..config
    };
    assert_eq!(
        ConfigError::EmptySnapshotPath,
        config.validate().unwrap_err()
    );

    Ok(())
}

#[test]
fn test_build_rejects_unknown_arg() {
    let res = Config::build(&["tally", "--snapshot=s.json", "--no-such-flag"]);

    match res.unwrap_err() {
        ConfigError::ParseError { args, .. } => {
            assert_eq!(
                vec!["tally", "--snapshot=s.json", "--no-such-flag"],
                args
            );
        }
        e => panic!("unexpected error: {}", e),
    }
}
