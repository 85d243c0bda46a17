use hopdir::config::{HistoryConfig, HopdirConfig, NotifyMode};
use hopdir::tooling::cli::{CliContext, Commands, ShellKind};
use hopdir::HopError;

use crate::integration::support::{context, FakeShell, Tree};

#[test]
fn climb_twice_then_retrace() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b/c/d"));

    shell.parent();
    assert_eq!(shell.cwd, tree.path("a/b/c"));
    assert_eq!(shell.deepest, tree.path("a/b/c/d"));

    shell.parent();
    assert_eq!(shell.cwd, tree.path("a/b"));
    assert_eq!(shell.deepest, tree.path("a/b/c/d"));

    shell.child();
    assert_eq!(shell.cwd, tree.path("a/b/c"));
    shell.child();
    assert_eq!(shell.cwd, tree.path("a/b/c/d"));
    assert_eq!(shell.bells, 0);

    shell.child();
    assert_eq!(shell.cwd, tree.path("a/b/c/d"));
    assert_eq!(shell.bells, 1);
}

#[test]
fn manual_navigation_resets_memory() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b/c/d"));
    shell.parent();

    shell.cwd = tree.path("x/y");
    shell.parent();
    assert_eq!(shell.cwd, tree.path("x"));
    assert_eq!(shell.deepest, tree.path("x/y"));
}

#[test]
fn child_without_memory_stamps_current_directory() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a"));
    let out = shell.child();
    assert_eq!(shell.cwd, tree.path("a"));
    assert_eq!(shell.deepest, tree.path("a"));
    assert_eq!(shell.bells, 1);
    assert!(!out.contains("builtin cd"));
}

#[test]
fn parent_from_root_only_rings() {
    let mut shell = FakeShell::at("/".to_string());
    let out = shell.parent();
    assert_eq!(shell.cwd, "/");
    assert_eq!(shell.deepest, "");
    assert_eq!(shell.bells, 1);
    assert!(out.contains("zle beep"));
}

#[test]
fn bell_follows_shell_option_unless_configured() {
    let quiet = context()
        .execute(&Commands::Parent {
            cwd: "/".to_string(),
            deepest: String::new(),
            notify: false,
        })
        .unwrap();
    assert!(!quiet.contains("zle beep"));

    let config = HopdirConfig {
        notify: NotifyMode::Always,
        ..HopdirConfig::default()
    };
    let loud = CliContext::with_config(config)
        .execute(&Commands::Parent {
            cwd: "/".to_string(),
            deepest: String::new(),
            notify: false,
        })
        .unwrap();
    assert!(loud.contains("zle beep"));
}

#[test]
fn removed_directory_leaves_state_untouched() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b/c"));
    shell.parent();
    shell.parent();
    assert_eq!(shell.cwd, tree.path("a"));

    std::fs::remove_dir_all(tree.root.join("a/b")).unwrap();
    let out = shell.child();
    assert!(!out.contains("builtin cd"));
    assert_eq!(shell.cwd, tree.path("a"));
    assert_eq!(shell.deepest, tree.path("a/b/c"));
    assert_eq!(shell.bells, 1);
}

#[test]
fn history_records_only_net_displacement() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b/c/d"));

    shell.pre_command();
    assert_eq!(shell.pending, tree.path("a/b/c/d"));
    shell.parent();
    shell.pre_command();
    shell.parent();
    shell.pre_command();
    assert_eq!(shell.pending, tree.path("a/b/c/d"));
    assert!(shell.dir_stack.is_empty());

    shell.pre_execute();
    assert_eq!(shell.dir_stack, vec![tree.path("a/b/c/d")]);
    assert_eq!(shell.cwd, tree.path("a/b"));
    assert_eq!(shell.pending, "");

    // A cycle without navigation adds nothing.
    shell.pre_command();
    shell.pre_execute();
    assert_eq!(shell.dir_stack.len(), 1);
}

#[test]
fn hops_stay_off_the_stack_with_auto_pushd() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b/c/d"));
    assert!(shell.auto_pushd);

    shell.pre_command();
    shell.parent();
    shell.parent();
    shell.parent();
    shell.child();
    assert_eq!(shell.cwd, tree.path("a/b"));
    assert!(shell.dir_stack.is_empty());

    shell.pre_execute();
    assert_eq!(shell.dir_stack, vec![tree.path("a/b/c/d")]);
    assert_eq!(shell.cwd, tree.path("a/b"));
}

#[test]
fn removed_snapshot_does_not_block_later_cycles() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b/c/d"));

    shell.pre_command();
    shell.cwd = tree.path("x/y");
    std::fs::remove_dir_all(tree.root.join("a/b/c/d")).unwrap();
    let out = shell.pre_execute();
    assert!(!out.contains("pushd"));
    assert_eq!(shell.pending, "");
    assert!(shell.dir_stack.is_empty());

    shell.pre_command();
    assert_eq!(shell.pending, tree.path("x/y"));
    shell.parent();
    shell.pre_execute();
    assert_eq!(shell.dir_stack, vec![tree.path("x/y")]);
    assert_eq!(shell.cwd, tree.path("x"));
}

#[test]
fn history_untouched_without_auto_pushd() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b"));
    shell.auto_pushd = false;

    shell.pre_command();
    shell.parent();
    let out = shell.pre_execute();
    assert!(!out.contains("pushd"));
    assert!(shell.dir_stack.is_empty());
    assert_eq!(shell.pending, "");
}

#[test]
fn history_recording_can_be_disabled_in_config() {
    let tree = Tree::new();
    let mut shell = FakeShell::at(tree.path("a/b"));
    shell.context = CliContext::with_config(HopdirConfig {
        history: HistoryConfig { record: false },
        ..HopdirConfig::default()
    });

    shell.pre_command();
    shell.parent();
    shell.pre_execute();
    assert!(shell.dir_stack.is_empty());
}

#[test]
fn relative_cwd_is_rejected() {
    let result = context().execute(&Commands::Parent {
        cwd: "a/b".to_string(),
        deepest: String::new(),
        notify: false,
    });
    assert!(matches!(result, Err(HopError::InvalidPath { .. })));
}

#[test]
fn init_script_uses_binary_and_bindings() {
    let script = context()
        .execute(&Commands::Init {
            shell: ShellKind::Zsh,
            no_bindings: false,
        })
        .unwrap();
    assert!(script.contains("out=\"$(hopdir pre-execute"));
    assert!(script.contains("bindkey"));

    let bare = context()
        .execute(&Commands::Init {
            shell: ShellKind::Zsh,
            no_bindings: true,
        })
        .unwrap();
    assert!(!bare.contains("bindkey"));
}

#[test]
fn config_command_renders_json_and_toml() {
    let json = context()
        .execute(&Commands::Config {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["notify"], "shell");
    assert_eq!(parsed["history"]["record"], true);

    let text = context()
        .execute(&Commands::Config {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(text.contains("notify = \"shell\""));

    assert!(context()
        .execute(&Commands::Config {
            format: "yaml".to_string(),
        })
        .is_err());
}
