use clap::{CommandFactory, Parser};
use hopdir::tooling::cli::{Cli, Commands, ShellKind};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["hopdir", "parent", "--cwd", "/a/b"],
        vec!["hopdir", "parent", "--cwd", "/a/b", "--deepest", "", "--notify"],
        vec!["hopdir", "child", "--cwd", "/a", "--deepest", "/a/b"],
        vec!["hopdir", "pre-command", "--cwd", "/a", "--pending", ""],
        vec![
            "hopdir",
            "pre-execute",
            "--cwd",
            "/a",
            "--pending",
            "/a/b",
            "--auto-history",
        ],
        vec!["hopdir", "init", "zsh"],
        vec!["hopdir", "init", "zsh", "--no-bindings"],
        vec!["hopdir", "config", "--format", "json"],
        vec!["hopdir", "--log-level", "debug", "parent", "--cwd", "/"],
        vec!["hopdir", "parent", "--cwd", "/", "--config", "/tmp/hopdir.toml"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_fills_defaults() {
    let cli = Cli::try_parse_from(["hopdir", "child", "--cwd", "/a"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Child {
            cwd: "/a".to_string(),
            deepest: String::new(),
            notify: false,
        }
    );

    let cli = Cli::try_parse_from(["hopdir", "init", "zsh"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Init {
            shell: ShellKind::Zsh,
            no_bindings: false,
        }
    );
}

#[test]
fn parse_rejects_missing_cwd_and_unknown_shell() {
    assert!(Cli::try_parse_from(["hopdir", "parent"]).is_err());
    assert!(Cli::try_parse_from(["hopdir", "pre-execute", "--pending", "/a"]).is_err());
    assert!(Cli::try_parse_from(["hopdir", "init", "fish"]).is_err());
}

#[test]
fn logging_flags_become_overrides() {
    let cli = Cli::try_parse_from([
        "hopdir",
        "parent",
        "--cwd",
        "/a",
        "--log-level",
        "trace",
        "--log-output",
        "stderr",
    ])
    .unwrap();
    let overrides = cli.logging_overrides();
    assert_eq!(overrides.level.as_deref(), Some("trace"));
    assert_eq!(overrides.output.as_deref(), Some("stderr"));
    assert_eq!(overrides.format, None);
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
