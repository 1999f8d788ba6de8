use clap::{CommandFactory, Parser};
use simplefs::tooling::cli::Cli;

#[test]
fn parse_valid_flag_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["simplefs"],
        vec!["simplefs", "--input", "commands.txt"],
        vec!["simplefs", "-i", "commands.txt"],
        vec!["simplefs", "--config", "simplefs.toml"],
        vec!["simplefs", "--max-nodes", "10", "--max-depth", "4"],
        vec!["simplefs", "--max-name-length", "32"],
        vec![
            "simplefs",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-output",
            "file",
            "--log-file",
            "/tmp/simplefs.log",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_non_numeric_limits() {
    assert!(Cli::try_parse_from(["simplefs", "--max-nodes", "many"]).is_err());
    assert!(Cli::try_parse_from(["simplefs", "--max-depth", "-1"]).is_err());
}

#[test]
fn parse_rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["simplefs", "create"]).is_err());
}

#[test]
fn help_mentions_every_flag() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for flag in [
        "--input",
        "--config",
        "--max-nodes",
        "--max-name-length",
        "--max-depth",
        "--log-level",
        "--log-format",
        "--log-output",
        "--log-file",
    ] {
        assert!(output.contains(flag), "help output is missing {flag}");
    }
}
