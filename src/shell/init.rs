//! zsh integration script rendered by `hopdir init zsh`.

use super::script::quote;
use super::{DEEPEST_VAR, PENDING_VAR};
use crate::config::KeyBindings;
use crate::error::HopError;

/// Renders the glue that registers the two widgets and two hooks.
#[derive(Debug, Clone)]
pub struct ZshInit {
    binary: String,
    keys: KeyBindings,
}

impl ZshInit {
    pub fn new(binary: impl Into<String>, keys: KeyBindings) -> Self {
        Self {
            binary: binary.into(),
            keys,
        }
    }

    pub fn render(&self) -> Result<String, HopError> {
        let bin = quote(&self.binary)?;
        let mut out = String::new();

        out.push_str("# hopdir shell integration; load with: eval \"$(hopdir init zsh)\"\n");
        out.push_str(&format!("typeset -g {}=''\n", DEEPEST_VAR));
        out.push_str(&format!("typeset -g {}=''\n\n", PENDING_VAR));

        out.push_str(&format!(
            r#"_hopdir_step() {{
  local -a flags
  [[ -o beep ]] && flags+=(--notify)
  setopt local_options no_auto_pushd
  local out
  out="$({bin} "$1" --cwd "$PWD" --deepest "${deepest}" "${{flags[@]}}")" || return
  eval "$out"
}}
hopdir-parent() {{ _hopdir_step parent }}
hopdir-child() {{ _hopdir_step child }}

_hopdir_pre_command() {{
  local out
  out="$({bin} pre-command --cwd "$PWD" --pending "${pending}")" || return
  eval "$out"
}}

_hopdir_pre_execute() {{
  local -a flags
  [[ -o auto_pushd ]] && flags+=(--auto-history)
  setopt local_options no_auto_pushd
  local out
  out="$({bin} pre-execute --cwd "$PWD" --pending "${pending}" "${{flags[@]}}")" || return
  eval "$out"
}}

zle -N hopdir-parent
zle -N hopdir-child
zle -N _hopdir_pre_command
autoload -Uz add-zsh-hook add-zle-hook-widget
add-zle-hook-widget line-init _hopdir_pre_command
add-zsh-hook preexec _hopdir_pre_execute
"#,
            bin = bin,
            deepest = DEEPEST_VAR,
            pending = PENDING_VAR,
        ));

        if self.keys.enabled {
            out.push_str(&format!(
                "bindkey {} hopdir-parent\n",
                quote(&self.keys.parent)?
            ));
            out.push_str(&format!(
                "bindkey {} hopdir-child\n",
                quote(&self.keys.child)?
            ));
        }

        Ok(out)
    }
}
