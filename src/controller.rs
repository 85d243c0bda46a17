//! Session Controller
//!
//! Owns the navigation memory and the history recorder for one interactive
//! session and runs the two actions and two lifecycle hooks against the
//! host's capabilities. Every action is planned first, then the move is
//! attempted, and state is committed only after the move succeeded.

use crate::history::{HistoryRecorder, Replay};
use crate::navigation::{NavigationState, Notice, Step};
use crate::path::SessionPath;
use crate::session::Session;
use tracing::{info, warn};

/// Controller options resolved from configuration and the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Ring the bell when an action has no effect.
    pub notify_on_failure: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            notify_on_failure: true,
        }
    }
}

/// Result of a parent or child step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: SessionPath, to: SessionPath },
    Unavailable(Notice),
}

pub struct SessionController<S: Session> {
    session: S,
    navigation: NavigationState,
    recorder: HistoryRecorder,
    options: ControllerOptions,
}

impl<S: Session> SessionController<S> {
    /// Controller with fresh, empty state.
    pub fn new(session: S, options: ControllerOptions) -> Self {
        Self::from_parts(session, NavigationState::new(), HistoryRecorder::new(), options)
    }

    pub fn from_parts(
        session: S,
        navigation: NavigationState,
        recorder: HistoryRecorder,
        options: ControllerOptions,
    ) -> Self {
        Self {
            session,
            navigation,
            recorder,
            options,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn recorder(&self) -> &HistoryRecorder {
        &self.recorder
    }

    pub fn into_parts(self) -> (S, NavigationState, HistoryRecorder) {
        (self.session, self.navigation, self.recorder)
    }

    /// Climb one level.
    pub fn parent_step(&mut self) -> StepOutcome {
        let current = self.session.current_path();
        let step = self.navigation.plan_parent(&current);
        self.run(current, step)
    }

    /// Descend one level toward the remembered deepest path.
    pub fn child_step(&mut self) -> StepOutcome {
        let current = self.session.current_path();
        let step = self.navigation.plan_child(&current);
        self.run(current, step)
    }

    /// Line editor is about to start.
    pub fn pre_command(&mut self) {
        let current = self.session.current_path();
        self.recorder.pre_command(&current);
    }

    /// Submitted command line is about to run.
    pub fn pre_execute(&mut self) -> Replay {
        self.recorder.pre_execute(&mut self.session)
    }

    fn run(&mut self, current: SessionPath, step: Step) -> StepOutcome {
        match step {
            Step::Move { target, deepest } => {
                if let Err(e) = self.session.change_directory(&target) {
                    warn!(from = %current, to = %target, error = %e, "Directory change refused");
                    return self.refuse(Notice::Unreachable);
                }
                self.navigation.commit(deepest);
                self.session.refresh_display();
                info!(from = %current, to = %target, "Moved");
                StepOutcome::Moved {
                    from: current,
                    to: target,
                }
            }
            Step::Refuse { notice, deepest } => {
                self.navigation.commit(deepest);
                self.refuse(notice)
            }
        }
    }

    fn refuse(&mut self, notice: Notice) -> StepOutcome {
        if self.options.notify_on_failure {
            self.session.notify_unavailable();
        }
        StepOutcome::Unavailable(notice)
    }
}
