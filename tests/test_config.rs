//! Integration tests for config files and command line overrides.

mod common;

use anyhow::Result;
use clap::Parser;
use common::TestEnv;
use std::time::Duration;
use voicebros::cli::Cli;
use voicebros::styles::Rgb;
use voicebros::Config;

#[test]
fn first_run_writes_default_config() -> Result<()> {
    let env = TestEnv::new().build()?;
    let path = env.config_path();
    assert!(!path.exists());

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config, Config::default());
    // The written file loads back to the same values
    assert_eq!(Config::load_or_create(&path)?, config);
    Ok(())
}

#[test]
fn partial_config_keeps_defaults() -> Result<()> {
    let env = TestEnv::new().build()?;
    let path = env.config_path();
    std::fs::write(
        &path,
        r#"
[window]
fps = 30

[palette]
accent = [0, 255, 0]

[messages]
credits_holder = "Test Studio"
"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.window.fps, 30);
    assert_eq!(config.window.width, 1000);
    assert_eq!(config.palette.accent, Rgb(0, 255, 0));
    assert_eq!(config.palette.primary, Rgb(230, 57, 70));
    assert_eq!(config.messages.credits_line(2030), "© 2030 Test Studio");
    assert_eq!(config.messages.duration(), Duration::from_millis(2000));
    Ok(())
}

#[test]
fn broken_config_is_an_error() -> Result<()> {
    let env = TestEnv::new().build()?;
    let path = env.config_path();
    std::fs::write(&path, "[window\nfps = ")?;

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn cli_overrides_stored_config() -> Result<()> {
    let env = TestEnv::new().build()?;
    let path = env.config_path();
    Config::default().save(&path)?;

    let cli = Cli::try_parse_from([
        "voicebros",
        "--config",
        path.to_str().unwrap(),
        "--fps",
        "0",
        "--assets",
        "/opt/voicebros",
    ])?;
    let config = cli.apply(Config::load_or_create(&cli.config_path())?);

    assert_eq!(config.window.fps, 1);
    assert_eq!(config.assets.dir, std::path::PathBuf::from("/opt/voicebros"));
    Ok(())
}
