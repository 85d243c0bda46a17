//! Hopdir: climb and retrace directory hierarchies
//!
//! One action climbs to the parent directory, a second retraces the exact
//! descent. Intermediate hops stay out of the shell's directory stack; the
//! net change of each command cycle is recorded once, before the next
//! command runs.

pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod logging;
pub mod navigation;
pub mod path;
pub mod session;
pub mod shell;
pub mod tooling;

pub use controller::{ControllerOptions, SessionController, StepOutcome};
pub use error::HopError;
pub use history::{HistoryRecorder, Replay};
pub use navigation::{NavigationState, Notice};
pub use path::SessionPath;
pub use session::Session;
