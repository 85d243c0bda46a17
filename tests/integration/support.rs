use hopdir::config::HopdirConfig;
use hopdir::tooling::cli::{CliContext, Commands, ShellKind};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree `<root>/a/b/c/d` standing in for the filesystem.
pub struct Tree {
    _temp: TempDir,
    pub root: PathBuf,
}

impl Tree {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        std::fs::create_dir_all(root.join("a/b/c/d")).unwrap();
        std::fs::create_dir_all(root.join("x/y")).unwrap();
        Self { _temp: temp, root }
    }

    /// Absolute path string of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> String {
        path_string(&self.root.join(rel))
    }
}

pub fn path_string(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

pub fn context() -> CliContext {
    CliContext::with_config(HopdirConfig::default()).with_binary("hopdir")
}

/// Minimal stand-in for zsh: holds cwd, the directory stack and the two state
/// variables, and applies the commands hopdir prints.
///
/// Like zsh with `auto_pushd`, a `cd` pushes the old directory unless the
/// calling function of the integration script turns the option off locally.
pub struct FakeShell {
    pub context: CliContext,
    pub cwd: String,
    pub deepest: String,
    pub pending: String,
    pub dir_stack: Vec<String>,
    pub bells: usize,
    pub auto_pushd: bool,
    step_guarded: bool,
    pre_execute_guarded: bool,
}

/// Whether the body of `name` in the init script disables `auto_pushd`.
fn disables_auto_pushd(script: &str, name: &str) -> bool {
    let header = format!("{}() {{", name);
    script
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| *line != "}")
        .any(|line| line.trim() == "setopt local_options no_auto_pushd")
}

impl FakeShell {
    pub fn at(cwd: String) -> Self {
        let context = context();
        let init = context
            .execute(&Commands::Init {
                shell: ShellKind::Zsh,
                no_bindings: true,
            })
            .unwrap();
        Self {
            context,
            cwd,
            deepest: String::new(),
            pending: String::new(),
            dir_stack: Vec::new(),
            bells: 0,
            auto_pushd: true,
            step_guarded: disables_auto_pushd(&init, "_hopdir_step"),
            pre_execute_guarded: disables_auto_pushd(&init, "_hopdir_pre_execute"),
        }
    }

    pub fn parent(&mut self) -> String {
        let out = self
            .context
            .execute(&Commands::Parent {
                cwd: self.cwd.clone(),
                deepest: self.deepest.clone(),
                notify: true,
            })
            .unwrap();
        self.apply(&out, self.step_guarded);
        out
    }

    pub fn child(&mut self) -> String {
        let out = self
            .context
            .execute(&Commands::Child {
                cwd: self.cwd.clone(),
                deepest: self.deepest.clone(),
                notify: true,
            })
            .unwrap();
        self.apply(&out, self.step_guarded);
        out
    }

    pub fn pre_command(&mut self) -> String {
        let out = self
            .context
            .execute(&Commands::PreCommand {
                cwd: self.cwd.clone(),
                pending: self.pending.clone(),
            })
            .unwrap();
        self.apply(&out, false);
        out
    }

    pub fn pre_execute(&mut self) -> String {
        let out = self
            .context
            .execute(&Commands::PreExecute {
                cwd: self.cwd.clone(),
                pending: self.pending.clone(),
                auto_history: self.auto_pushd,
            })
            .unwrap();
        self.apply(&out, self.pre_execute_guarded);
        out
    }

    fn apply(&mut self, script: &str, guarded: bool) {
        let pushes_on_cd = self.auto_pushd && !guarded;
        for line in script.lines() {
            for command in line.split(" && ") {
                let words = shlex::split(command).unwrap();
                let words: Vec<&str> = words.iter().map(String::as_str).collect();
                match words.as_slice() {
                    ["builtin", "cd", "-q", "--", dir] => {
                        if pushes_on_cd && self.cwd != *dir {
                            self.dir_stack.push(self.cwd.clone());
                        }
                        self.cwd = dir.to_string();
                    }
                    ["builtin", "pushd", "-q", "--", dir] => {
                        self.dir_stack.push(self.cwd.clone());
                        self.cwd = dir.to_string();
                    }
                    ["typeset", "-g", assignment] => self.assign(assignment),
                    ["zle", "beep"] => self.bells += 1,
                    ["zle", "reset-prompt"] => {}
                    other => panic!("unexpected shell command: {:?}", other),
                }
            }
        }
    }

    fn assign(&mut self, assignment: &str) {
        let (name, value) = assignment.split_once('=').unwrap();
        match name {
            "_hopdir_deepest" => self.deepest = value.to_string(),
            "_hopdir_pending" => self.pending = value.to_string(),
            other => panic!("unexpected variable: {}", other),
        }
    }
}
