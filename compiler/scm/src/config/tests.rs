#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_defaults() {
    assert_eq!(parse_args(&[]).unwrap(), Command::Repl(ReplConfig::default()));
    let config = ReplConfig::default();
    assert_eq!(config.prompt, "› ");
    assert!(!config.quiet);
}

#[test]
fn test_prompt_and_quiet() {
    let Command::Repl(config) = parse_args(&args(&["--prompt=> ", "-q"])).unwrap() else {
        panic!("expected repl command");
    };
    assert_eq!(config.prompt, "> ");
    assert!(config.quiet);
}

#[test]
fn test_help() {
    assert_eq!(parse_args(&args(&["--quiet", "--help"])).unwrap(), Command::Help);
}

#[test]
fn test_unknown_flag() {
    let err = parse_args(&args(&["--verbose"])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownFlag("--verbose".to_string()));
    assert_eq!(err.to_string(), "unknown option: --verbose");
}

#[test]
fn test_positional_rejected() {
    let err = parse_args(&args(&["file.scm"])).unwrap_err();
    assert_eq!(err, ConfigError::UnexpectedArgument("file.scm".to_string()));
}
