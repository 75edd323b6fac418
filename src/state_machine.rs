// Copyright 2025 Cowboy AI, LLC.

//! State machine traits for entity lifecycles
//!
//! Entities whose state may only change along known edges (room occupancy)
//! model that state as an enum implementing [`State`] and
//! [`MealyStateTransitions`]: the next state depends on the current state
//! AND the input, and an input with no edge from the current state is
//! rejected rather than silently ignored.

use std::fmt::Debug;

/// Input to a state machine transition
pub trait TransitionInput: Debug + Clone + Send + Sync {
    /// Get a description of this input for logging
    fn description(&self) -> String;
}

/// Trait for types that can be used as states in a state machine
pub trait State: Debug + Clone + PartialEq + Eq + Send + Sync {
    /// Get the name of this state for logging/debugging
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Mealy Machine: next state depends on current state AND input
///
/// # Examples
///
/// ```rust
/// use hotel_domain::state_machine::{MealyStateTransitions, State, TransitionInput};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// #[derive(Debug, Clone)]
/// enum Push {
///     Open,
///     Close,
/// }
///
/// impl TransitionInput for Push {
///     fn description(&self) -> String {
///         format!("{self:?}")
///     }
/// }
///
/// impl State for Door {
///     fn name(&self) -> &'static str {
///         match self {
///             Door::Open => "Open",
///             Door::Closed => "Closed",
///         }
///     }
/// }
///
/// impl MealyStateTransitions for Door {
///     type Input = Push;
///
///     fn transition(&self, input: &Push) -> Option<Self> {
///         match (self, input) {
///             (Door::Closed, Push::Open) => Some(Door::Open),
///             (Door::Open, Push::Close) => Some(Door::Closed),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.transition(&Push::Open), Some(Door::Open));
/// assert!(!Door::Open.can_accept(&Push::Open));
/// ```
pub trait MealyStateTransitions: State {
    /// The input type for transitions
    type Input: TransitionInput;

    /// The state reached from `self` on `input`, or `None` if no edge exists
    fn transition(&self, input: &Self::Input) -> Option<Self>;

    /// Check if a transition exists for this input
    fn can_accept(&self, input: &Self::Input) -> bool {
        self.transition(input).is_some()
    }
}
