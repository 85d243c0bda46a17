//! CLI Tooling
//!
//! Command-line interface for hopdir. Each navigation command receives the
//! session state from the shell, runs one action or hook, and returns shell
//! code that applies the result and stores the updated state.

use crate::config::{ConfigLoader, HopdirConfig};
use crate::controller::{ControllerOptions, SessionController, StepOutcome};
use crate::error::HopError;
use crate::history::HistoryRecorder;
use crate::logging::LoggingOverrides;
use crate::navigation::NavigationState;
use crate::path::SessionPath;
use crate::shell::{ShellSession, ZshInit, DEEPEST_VAR, PENDING_VAR};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

/// Hopdir CLI - climb and retrace directories without polluting the directory stack
#[derive(Parser)]
#[command(name = "hopdir")]
#[command(about = "Climb and retrace directory hierarchies from an interactive shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn logging_overrides(&self) -> LoggingOverrides {
        LoggingOverrides {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Climb one directory level, remembering where the climb started
    Parent {
        /// Current working directory
        #[arg(long)]
        cwd: String,
        /// Remembered deepest path (empty when unset)
        #[arg(long, default_value = "")]
        deepest: String,
        /// Ring the bell when the step has no effect
        #[arg(long)]
        notify: bool,
    },
    /// Descend one directory level back toward the remembered deepest path
    Child {
        /// Current working directory
        #[arg(long)]
        cwd: String,
        /// Remembered deepest path (empty when unset)
        #[arg(long, default_value = "")]
        deepest: String,
        /// Ring the bell when the step has no effect
        #[arg(long)]
        notify: bool,
    },
    /// Hook run when the line editor starts: snapshot the current directory
    PreCommand {
        /// Current working directory
        #[arg(long)]
        cwd: String,
        /// Pending snapshot (empty when none)
        #[arg(long, default_value = "")]
        pending: String,
    },
    /// Hook run before a command executes: record the net directory change
    PreExecute {
        /// Current working directory
        #[arg(long)]
        cwd: String,
        /// Pending snapshot (empty when none)
        #[arg(long, default_value = "")]
        pending: String,
        /// The shell records directory changes on its own (auto_pushd)
        #[arg(long)]
        auto_history: bool,
    },
    /// Print the shell integration script
    Init {
        /// Target shell
        #[arg(value_enum)]
        shell: ShellKind,
        /// Do not bind keys, only define widgets and hooks
        #[arg(long)]
        no_bindings: bool,
    },
    /// Show the effective configuration
    Config {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Shells with an integration script.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Zsh,
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: HopdirConfig,
    binary: String,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, HopError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load()?
        };
        Ok(Self::with_config(config))
    }

    /// Create a context from an already loaded configuration
    pub fn with_config(config: HopdirConfig) -> Self {
        let binary = std::env::current_exe()
            .ok()
            .and_then(|p| p.to_str().map(str::to_string))
            .unwrap_or_else(|| "hopdir".to_string());
        Self { config, binary }
    }

    /// Override the binary path written into the integration script
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn config(&self) -> &HopdirConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, HopError> {
        match command {
            Commands::Parent {
                cwd,
                deepest,
                notify,
            } => self.handle_step(cwd, deepest, *notify, Direction::Parent),
            Commands::Child {
                cwd,
                deepest,
                notify,
            } => self.handle_step(cwd, deepest, *notify, Direction::Child),
            Commands::PreCommand { cwd, pending } => self.handle_pre_command(cwd, pending),
            Commands::PreExecute {
                cwd,
                pending,
                auto_history,
            } => self.handle_pre_execute(cwd, pending, *auto_history),
            Commands::Init { shell, no_bindings } => self.handle_init(*shell, *no_bindings),
            Commands::Config { format } => self.handle_config(format),
        }
    }

    fn handle_step(
        &self,
        cwd: &str,
        deepest: &str,
        notify: bool,
        direction: Direction,
    ) -> Result<String, HopError> {
        let current = SessionPath::parse(cwd)?;
        let deepest = SessionPath::parse_optional(Some(deepest))?;
        let options = ControllerOptions {
            notify_on_failure: self.config.notify.resolve(notify),
        };

        let mut controller = SessionController::from_parts(
            ShellSession::new(current, false),
            NavigationState::with_deepest(deepest),
            HistoryRecorder::new(),
            options,
        );
        let outcome = match direction {
            Direction::Parent => controller.parent_step(),
            Direction::Child => controller.child_step(),
        };
        if let StepOutcome::Unavailable(notice) = outcome {
            info!(?direction, %notice, "Step had no effect");
        }

        let (session, navigation, _) = controller.into_parts();
        let mut script = session.into_script();
        script.assign(DEEPEST_VAR, navigation.deepest())?;
        Ok(script.render())
    }

    fn handle_pre_command(&self, cwd: &str, pending: &str) -> Result<String, HopError> {
        let current = SessionPath::parse(cwd)?;
        let pending = SessionPath::parse_optional(Some(pending))?;

        let mut controller = SessionController::from_parts(
            ShellSession::new(current, false),
            NavigationState::new(),
            HistoryRecorder::with_pending(pending),
            ControllerOptions::default(),
        );
        controller.pre_command();

        let (session, _, recorder) = controller.into_parts();
        let mut script = session.into_script();
        script.assign(PENDING_VAR, recorder.pending())?;
        Ok(script.render())
    }

    fn handle_pre_execute(
        &self,
        cwd: &str,
        pending: &str,
        auto_history: bool,
    ) -> Result<String, HopError> {
        let current = SessionPath::parse(cwd)?;
        let pending = SessionPath::parse_optional(Some(pending))?;
        let auto_history = self.config.history.auto_history(auto_history);

        let mut controller = SessionController::from_parts(
            ShellSession::new(current, auto_history),
            NavigationState::new(),
            HistoryRecorder::with_pending(pending),
            ControllerOptions::default(),
        );
        let replay = controller.pre_execute();
        debug!(?replay, "Pre-execute replay");

        let (session, _, recorder) = controller.into_parts();
        let mut script = session.into_script();
        script.assign(PENDING_VAR, recorder.pending())?;
        Ok(script.render())
    }

    fn handle_init(&self, shell: ShellKind, no_bindings: bool) -> Result<String, HopError> {
        let mut keys = self.config.keys.clone();
        if no_bindings {
            keys.enabled = false;
        }
        match shell {
            ShellKind::Zsh => ZshInit::new(self.binary.clone(), keys).render(),
        }
    }

    fn handle_config(&self, format: &str) -> Result<String, HopError> {
        match format {
            "text" => toml::to_string_pretty(&self.config)
                .map_err(|e| HopError::Render(e.to_string())),
            "json" => serde_json::to_string_pretty(&self.config)
                .map_err(|e| HopError::Render(e.to_string())),
            other => Err(HopError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Parent,
    Child,
}
