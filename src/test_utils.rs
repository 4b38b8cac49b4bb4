//! Small graph problems used across the engine tests, built from explicit
//! edge lists so that expansion order is obvious in the fixtures themselves.

use crate::search::{Heuristic, HeuristicValue, SearchProblem, Transition};
use std::collections::HashMap;

pub(crate) type TestState = &'static str;
pub(crate) type TestAction = &'static str;

#[derive(Debug)]
pub(crate) struct GraphProblem {
    start: TestState,
    goals: Vec<TestState>,
    /// (from, action, to, cost); `expand` reports edges in this order.
    edges: Vec<(TestState, TestAction, TestState, f64)>,
}

impl GraphProblem {
    fn new(
        start: TestState,
        goals: Vec<TestState>,
        edges: Vec<(TestState, TestAction, TestState, f64)>,
    ) -> Self {
        Self {
            start,
            goals,
            edges,
        }
    }

    /// S -> A -> B -> G, unit costs.
    pub(crate) fn linear() -> Self {
        Self::new(
            "S",
            vec!["G"],
            vec![
                ("S", "move-to-a", "A", 1.),
                ("A", "move-to-b", "B", 1.),
                ("B", "move-to-g", "G", 1.),
            ],
        )
    }

    /// The start state is already a goal; the outgoing edge must be ignored.
    pub(crate) fn start_is_goal() -> Self {
        Self::new("S", vec!["S"], vec![("S", "move-to-a", "A", 1.)])
    }

    /// The start state has no transitions and is not a goal.
    pub(crate) fn dead_end() -> Self {
        Self::new("S", vec!["G"], vec![])
    }

    /// S -> A -> B -> S cycle with an exit edge B -> G.
    pub(crate) fn cycle() -> Self {
        Self::new(
            "S",
            vec!["G"],
            vec![
                ("S", "move-to-a", "A", 1.),
                ("A", "move-to-b", "B", 1.),
                ("B", "move-to-s", "S", 1.),
                ("B", "move-to-g", "G", 1.),
            ],
        )
    }

    /// Two branches to the goal: S -> A -> G at total cost 5 and
    /// S -> B -> G at total cost 1 (two edges of 0.5 each).
    pub(crate) fn diamond() -> Self {
        Self::new(
            "S",
            vec!["G"],
            vec![
                ("S", "move-to-a", "A", 4.),
                ("S", "move-to-b", "B", 0.5),
                ("A", "move-to-g", "G", 1.),
                ("B", "move-to-g", "G", 0.5),
            ],
        )
    }

    /// The A-branch has the cheaper first edge but the expensive finish
    /// (total 11); the B-branch costs 4. Forces RBFS to back up and switch.
    pub(crate) fn trap() -> Self {
        Self::new(
            "S",
            vec!["G"],
            vec![
                ("S", "move-to-a", "A", 1.),
                ("S", "move-to-b", "B", 2.),
                ("A", "move-to-g", "G", 10.),
                ("B", "move-to-g", "G", 2.),
            ],
        )
    }
}

impl SearchProblem for GraphProblem {
    type State = TestState;
    type Action = TestAction;

    fn get_start_state(&self) -> TestState {
        self.start
    }

    fn is_goal_state(&self, state: &TestState) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &TestState) -> Vec<Transition<TestState, TestAction>> {
        self.edges
            .iter()
            .filter(|(from, _, _, _)| from == state)
            .map(|&(_, action, to, cost)| Transition::new(to, action, cost))
            .collect()
    }
}

/// Heuristic backed by a lookup table, with a default for unlisted states.
/// What it promises (admissibility, consistency) is up to each test.
#[derive(Debug)]
pub(crate) struct TableHeuristic {
    table: HashMap<TestState, f64>,
    default: f64,
}

impl TableHeuristic {
    pub(crate) fn new(entries: Vec<(TestState, f64)>, default: f64) -> Self {
        Self {
            table: entries.into_iter().collect(),
            default,
        }
    }

    /// Admissible and consistent for [`GraphProblem::diamond`].
    pub(crate) fn consistent_for_diamond() -> Self {
        Self::new(vec![("S", 1.), ("A", 1.), ("B", 0.5), ("G", 0.)], 0.)
    }
}

impl Heuristic<GraphProblem> for TableHeuristic {
    fn evaluate(&mut self, state: &TestState, _problem: &GraphProblem) -> HeuristicValue {
        self.table.get(state).copied().unwrap_or(self.default).into()
    }
}
