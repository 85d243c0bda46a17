//! Shell command buffer with safe quoting.

use crate::error::HopError;
use crate::path::SessionPath;

/// Quote a string as a single shell word.
pub fn quote(raw: &str) -> Result<String, HopError> {
    shlex::try_quote(raw)
        .map(|quoted| quoted.into_owned())
        .map_err(|_| HopError::ShellQuote(raw.to_string()))
}

/// zsh commands accumulated during one invocation, printed for `eval`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellScript {
    lines: Vec<String>,
}

impl ShellScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Change directory without running chpwd hooks or recording history.
    pub fn change_directory(&mut self, path: &SessionPath) -> Result<(), HopError> {
        let line = format!("builtin cd -q -- {}", quote(&path.to_string())?);
        self.lines.push(line);
        Ok(())
    }

    /// Jump to `saved` quietly, then push `target` so `saved` lands on the
    /// directory stack as the prior entry.
    pub fn push_history(
        &mut self,
        saved: &SessionPath,
        target: &SessionPath,
    ) -> Result<(), HopError> {
        let line = format!(
            "builtin cd -q -- {} && builtin pushd -q -- {}",
            quote(&saved.to_string())?,
            quote(&target.to_string())?
        );
        self.lines.push(line);
        Ok(())
    }

    /// Set a global shell variable; `None` clears it to the empty string.
    pub fn assign(&mut self, name: &str, value: Option<&SessionPath>) -> Result<(), HopError> {
        let value = match value {
            Some(path) => quote(&path.to_string())?,
            None => "''".to_string(),
        };
        self.lines.push(format!("typeset -g {}={}", name, value));
        Ok(())
    }

    pub fn beep(&mut self) {
        self.lines.push("zle beep".to_string());
    }

    pub fn reset_prompt(&mut self) {
        self.lines.push("zle reset-prompt".to_string());
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
