//! Host session capabilities
//!
//! The services hopdir consumes from the interactive session. The core never
//! owns the working directory or the history stack; it asks the session.

use crate::error::HopError;
use crate::path::SessionPath;

/// Capability interface supplied by the host session.
pub trait Session {
    /// Current working location.
    fn current_path(&self) -> SessionPath;

    /// Move the working location. Fails if the directory no longer exists.
    fn change_directory(&mut self, path: &SessionPath) -> Result<(), HopError>;

    /// Audible or visual "nothing happened" signal.
    fn notify_unavailable(&mut self);

    /// Ask the host to redraw its prompt.
    fn refresh_display(&mut self);

    /// Whether the host records directory changes in its history stack.
    fn auto_history_enabled(&self) -> bool;

    /// Reposition to `saved` without recording, then move to `target` so that
    /// `saved` is recorded as the prior history entry.
    fn history_push_retroactive(
        &mut self,
        saved: &SessionPath,
        target: &SessionPath,
    ) -> Result<(), HopError>;
}
