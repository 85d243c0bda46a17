//! Navigation State
//!
//! Remembers the deepest path reached by climbing so a later descent can
//! retrace it. Steps are planned here and committed by the controller only
//! after the host session accepted the move.

use crate::path::SessionPath;
use std::fmt;
use tracing::debug;

/// Non-fatal reasons an action had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Parent step attempted from the root.
    AtRoot,
    /// Child step with no known or reachable descendant.
    AtBottom,
    /// The host session refused the move.
    Unreachable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::AtRoot => "already at root",
            Notice::AtBottom => "no deeper directory remembered",
            Notice::Unreachable => "target directory unreachable",
        };
        f.write_str(text)
    }
}

/// A planned step: either a move with the `deepest` value to commit once it
/// succeeds, or a refusal with the `deepest` value to commit immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Move {
        target: SessionPath,
        deepest: Option<SessionPath>,
    },
    Refuse {
        notice: Notice,
        deepest: Option<SessionPath>,
    },
}

/// Session-owned memory of the deepest path visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    deepest: Option<SessionPath>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore state handed back by the host session.
    pub fn with_deepest(deepest: Option<SessionPath>) -> Self {
        Self { deepest }
    }

    pub fn deepest(&self) -> Option<&SessionPath> {
        self.deepest.as_ref()
    }

    /// Plan a climb from `current` to its parent.
    pub fn plan_parent(&self, current: &SessionPath) -> Step {
        let Some(parent) = current.parent() else {
            return Step::Refuse {
                notice: Notice::AtRoot,
                deepest: self.deepest.clone(),
            };
        };

        let deepest = match &self.deepest {
            Some(deepest) if current.is_ancestor_or_self_of(deepest) => deepest.clone(),
            Some(stale) => {
                debug!(stale = %stale, current = %current, "Discarding stale deepest path");
                current.clone()
            }
            None => current.clone(),
        };

        Step::Move {
            target: parent,
            deepest: Some(deepest),
        }
    }

    /// Plan a descent from `current` one level toward the deepest path.
    pub fn plan_child(&self, current: &SessionPath) -> Step {
        let Some(deepest) = &self.deepest else {
            return Step::Refuse {
                notice: Notice::AtBottom,
                deepest: Some(current.clone()),
            };
        };
        if deepest == current {
            return Step::Refuse {
                notice: Notice::AtBottom,
                deepest: self.deepest.clone(),
            };
        }

        let mut previous: Option<SessionPath> = None;
        for step in deepest.ancestors() {
            if &step == current {
                if let Some(target) = previous {
                    return Step::Move {
                        target,
                        deepest: self.deepest.clone(),
                    };
                }
                break;
            }
            previous = Some(step);
        }

        // Walked past root without meeting `current`; the memory is kept.
        debug!(deepest = %deepest, current = %current, "Deepest path is not below current");
        Step::Refuse {
            notice: Notice::AtBottom,
            deepest: self.deepest.clone(),
        }
    }

    pub(crate) fn commit(&mut self, deepest: Option<SessionPath>) {
        self.deepest = deepest;
    }
}
