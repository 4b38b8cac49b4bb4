//! A plan is the externally visible outcome of a search: the ordered actions
//! that take the problem from its start state to a goal state.

use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    /// The valid plan for a problem whose start state is already a goal.
    /// Distinct from "no plan exists", which is a search result, not a plan.
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }
}

impl<A> Deref for Plan<A> {
    type Target = Vec<A>;

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_has_no_steps() {
        let plan: Plan<&str> = Plan::empty();
        assert!(plan.is_empty());
    }

    #[test]
    fn plan_derefs_to_steps() {
        let plan = Plan::new(vec!["north", "east"]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps(), &["north", "east"]);
    }
}
