use std::path::PathBuf;
use clap::Parser;
use gotree::{
    cli::{args::Args, Command},
    config::{CliArgs, CliConfig, ConfigSource},
    models::config::OutputFormat,
};

#[test]
fn test_cli_args_defaults() {
    let args = Args::parse_from(["gotree"]);
    assert_eq!(args.path, None);
    assert!(args.exclude.is_empty());
    assert_eq!(args.depth, None);
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);
    assert!(!args.init);
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from([
        "gotree",
        "/test/path",
        "--exclude",
        "vendor",
        "--exclude",
        "testdata",
        "--depth",
        "5",
        "--output",
        "text",
        "--output-file",
        "tree.txt",
        "--quiet",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/test/path")));
    assert_eq!(args.exclude, vec!["vendor".to_string(), "testdata".to_string()]);
    assert_eq!(args.depth, Some(5));
    assert_eq!(args.output_file, Some(PathBuf::from("tree.txt")));
    assert!(args.quiet);

    let settings = CliConfig::from_args(&args).load().unwrap();
    assert_eq!(settings.output_format, Some(OutputFormat::Text));
    assert_eq!(settings.max_depth, Some(5));
}

#[test]
fn test_cli_config_option() {
    let args = Args::parse_from(["gotree", "--config", "custom.toml"]);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(CliArgs::from(&args).config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    assert!(Args::try_parse_from(["gotree", "--max-depth", "3"]).is_err());
    assert!(Args::try_parse_from(["gotree", "--depth", "many"]).is_err());
}

#[test]
fn test_init_flag_selects_init_command() {
    let args = Args::parse_from(["gotree", "--init", "somewhere"]);
    assert!(matches!(Command::from_args(args), Command::Init));
}
