//! Deferred History Recording
//!
//! Snapshots the working location when the line editor starts and, right
//! before the submitted command runs, records the net displacement of the
//! cycle as a single history entry. Intermediate climbs and descents never
//! reach the history stack.

use crate::error::HopError;
use crate::path::SessionPath;
use crate::session::Session;
use tracing::{debug, info, warn};

/// What the pre-execute hook did with the pending snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replay {
    /// No snapshot was captured this cycle.
    Idle,
    /// Location did not change since the snapshot.
    Unmoved,
    /// The host does not record history; snapshot dropped.
    Disabled,
    /// `saved` was recorded as the entry preceding `target`.
    Pushed {
        saved: SessionPath,
        target: SessionPath,
    },
    /// The saved location no longer exists; snapshot dropped so the next
    /// cycle captures a fresh one.
    Stale { saved: SessionPath },
    /// The host refused the push for another reason; the snapshot is kept.
    Failed,
}

/// Two-phase recorder: `Idle` or `Pending(saved)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRecorder {
    pending: Option<SessionPath>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a snapshot handed back by the host session.
    pub fn with_pending(pending: Option<SessionPath>) -> Self {
        Self { pending }
    }

    pub fn pending(&self) -> Option<&SessionPath> {
        self.pending.as_ref()
    }

    /// Capture `current` unless a snapshot is already pending.
    ///
    /// Returns true when a new snapshot was taken.
    pub fn pre_command(&mut self, current: &SessionPath) -> bool {
        if self.pending.is_some() {
            return false;
        }
        debug!(saved = %current, "Captured pre-command location");
        self.pending = Some(current.clone());
        true
    }

    /// Replay the cycle's net displacement into the session history.
    pub fn pre_execute<S: Session + ?Sized>(&mut self, session: &mut S) -> Replay {
        let Some(saved) = self.pending.clone() else {
            return Replay::Idle;
        };

        let target = session.current_path();
        if saved == target {
            self.pending = None;
            return Replay::Unmoved;
        }
        if !session.auto_history_enabled() {
            self.pending = None;
            return Replay::Disabled;
        }

        match session.history_push_retroactive(&saved, &target) {
            Ok(()) => {
                info!(saved = %saved, target = %target, "Recorded directory history entry");
                self.pending = None;
                Replay::Pushed { saved, target }
            }
            Err(HopError::ChangeDirectory { path, source }) if path == saved.to_path_buf() => {
                warn!(saved = %saved, error = %source, "Saved location is gone; dropping snapshot");
                self.pending = None;
                Replay::Stale { saved }
            }
            Err(e) => {
                warn!(saved = %saved, target = %target, error = %e, "History push failed");
                Replay::Failed
            }
        }
    }
}
