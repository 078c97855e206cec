pub mod capability;
pub mod dispatch;
pub mod transition;

use thiserror::Error;

use crate::models::action::{Action, Role};

/// Rejections produced by the lifecycle core. All are returned as values and
/// are recoverable by the caller; none is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("{role} may not {action} while status is {status}")]
    Unauthorized {
        role: Role,
        action: Action,
        status: &'static str,
    },

    #[error("no transition for {action} from status {status}")]
    InvalidTransition {
        action: Action,
        status: &'static str,
    },

    #[error("activity already reached terminal status {status}")]
    AlreadyTerminal { status: &'static str },
}

impl LifecycleError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "unauthorized",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::AlreadyTerminal { .. } => "already_terminal",
        }
    }
}
