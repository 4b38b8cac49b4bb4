//! The abstract search problem that every engine in this crate operates on.
//! A problem only exposes a start state, a goal test and a successor
//! relation; the engines never look inside states or actions.

use std::fmt::Debug;
use std::hash::Hash;

/// A single edge of the transition graph: the state reached, the action that
/// reaches it, and the cost of that edge alone (not cumulative).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, A> {
    pub next_state: S,
    pub action: A,
    pub cost: f64,
}

impl<S, A> Transition<S, A> {
    pub fn new(next_state: S, action: A, cost: f64) -> Self {
        debug_assert!(cost >= 0., "edge costs must be non-negative");
        Self {
            next_state,
            action,
            cost,
        }
    }
}

/// The contract between a problem domain and the search engines.
///
/// Implementors must provide [`get_start_state`](Self::get_start_state),
/// [`is_goal_state`](Self::is_goal_state) and [`expand`](Self::expand); the
/// remaining accessors are derived from `expand` and only need overriding
/// when the domain has a cheaper way to answer them.
pub trait SearchProblem {
    type State: Clone + Debug + Eq + Hash;
    type Action: Clone + Debug + PartialEq;

    fn get_start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All legal one-step transitions out of `state`. May be empty when the
    /// state is a dead end.
    fn expand(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action>>;

    /// The actions applicable in `state`, in the same order as
    /// [`expand`](Self::expand) reports them.
    fn get_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        self.expand(state)
            .into_iter()
            .map(|transition| transition.action)
            .collect()
    }

    /// The state reached by taking `action` in `state`, or `None` when the
    /// action is not applicable there.
    fn get_next_state(&self, state: &Self::State, action: &Self::Action) -> Option<Self::State> {
        self.expand(state)
            .into_iter()
            .find(|transition| &transition.action == action)
            .map(|transition| transition.next_state)
    }

    /// The cost of the `(state, action, next_state)` edge, or `None` when no
    /// such edge exists.
    fn get_action_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        next_state: &Self::State,
    ) -> Option<f64> {
        self.expand(state)
            .into_iter()
            .find(|transition| {
                &transition.action == action && &transition.next_state == next_state
            })
            .map(|transition| transition.cost)
    }

    /// Total cost of executing `actions` from the start state, or `None` if
    /// the sequence contains an inapplicable action. Used for validating
    /// returned plans, not by the engines themselves.
    fn get_cost_of_action_sequence(&self, actions: &[Self::Action]) -> Option<f64> {
        let mut state = self.get_start_state();
        let mut total = 0.;
        for action in actions {
            let transition = self
                .expand(&state)
                .into_iter()
                .find(|transition| &transition.action == action)?;
            total += transition.cost;
            state = transition.next_state;
        }
        Some(total)
    }
}
