//! State machine trait for step enums.
//!
//! Implementors list the successors of every state; checked transitions
//! and the terminal test come for free.

use std::fmt::Display;

use super::ValidationError;

/// A finite set of states with a fixed successor relation.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Door {
///     fn successors(&self) -> &'static [Self] {
///         match self {
///             Door::Closed => &[Door::Open, Door::Locked],
///             Door::Open => &[Door::Closed],
///             Door::Locked => &[],
///         }
///     }
/// }
///
/// let next = Door::Closed.transition_to(Door::Open)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + Display + 'static {
    /// States reachable from `self` in one step.
    fn successors(&self) -> &'static [Self];

    /// Returns true if `target` is a direct successor of `self`.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    /// Returns `target` if the move is allowed, an error otherwise.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                self.to_string(),
                target.to_string(),
            ))
        }
    }

    /// A state with no successors.
    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}
