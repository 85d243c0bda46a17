//! Shell Bridge
//!
//! hopdir runs as a short-lived process per key press or hook. The shell
//! keeps the session state in two variables, passes them in on every call,
//! and evaluates the commands printed on stdout.

pub mod init;
pub mod script;
pub mod session;

pub use init::ZshInit;
pub use script::{quote, ShellScript};
pub use session::ShellSession;

/// Shell variable holding the remembered deepest path.
pub const DEEPEST_VAR: &str = "_hopdir_deepest";

/// Shell variable holding the pending pre-command snapshot.
pub const PENDING_VAR: &str = "_hopdir_pending";
