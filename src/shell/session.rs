//! Session capabilities backed by the calling zsh.

use super::script::ShellScript;
use crate::error::HopError;
use crate::path::SessionPath;
use crate::session::Session;
use std::io;

/// A `Session` that validates moves against the filesystem and records the
/// resulting shell commands instead of performing them.
#[derive(Debug, Clone)]
pub struct ShellSession {
    current: SessionPath,
    auto_history: bool,
    script: ShellScript,
}

impl ShellSession {
    pub fn new(current: SessionPath, auto_history: bool) -> Self {
        Self {
            current,
            auto_history,
            script: ShellScript::new(),
        }
    }

    pub fn script(&self) -> &ShellScript {
        &self.script
    }

    pub fn into_script(self) -> ShellScript {
        self.script
    }
}

fn ensure_directory(path: &SessionPath) -> Result<(), HopError> {
    let path = path.to_path_buf();
    let metadata = std::fs::metadata(&path).map_err(|source| HopError::ChangeDirectory {
        path: path.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(HopError::ChangeDirectory {
            path,
            source: io::Error::new(io::ErrorKind::Other, "not a directory"),
        });
    }
    Ok(())
}

impl Session for ShellSession {
    fn current_path(&self) -> SessionPath {
        self.current.clone()
    }

    fn change_directory(&mut self, path: &SessionPath) -> Result<(), HopError> {
        ensure_directory(path)?;
        self.script.change_directory(path)?;
        self.current = path.clone();
        Ok(())
    }

    fn notify_unavailable(&mut self) {
        self.script.beep();
    }

    fn refresh_display(&mut self) {
        self.script.reset_prompt();
    }

    fn auto_history_enabled(&self) -> bool {
        self.auto_history
    }

    fn history_push_retroactive(
        &mut self,
        saved: &SessionPath,
        target: &SessionPath,
    ) -> Result<(), HopError> {
        ensure_directory(saved)?;
        self.script.push_history(saved, target)?;
        self.current = target.clone();
        Ok(())
    }
}
