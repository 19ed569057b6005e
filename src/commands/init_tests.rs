use std::fs;

use super::*;
use crate::config::Config;
use tempfile::TempDir;

#[test]
fn init_writes_parseable_template() {
    let dir = TempDir::new().unwrap();
    let args = InitArgs {
        output: dir.path().join(".style-gate.toml"),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = fs::read_to_string(&args.output).unwrap();
    let config: Config = toml::from_str(&content).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".style-gate.toml");
    fs::write(&output, "# mine").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(output).unwrap(), "# mine");
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".style-gate.toml");
    fs::write(&output, "# mine").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();

    assert!(fs::read_to_string(output).unwrap().contains("[scan]"));
}
