//! Depth first search

use crate::search::{
    frontier::Stack,
    search_engines::{SearchEngine, SearchResult},
    Heuristic, SearchNode, SearchProblem, SearchStatistics,
};
use std::collections::HashSet;

/// Graph-search DFS: a LIFO frontier plus a visited set. The visited set is
/// what keeps the traversal finite on cyclic state spaces. Returns the first
/// path that reaches a goal, which is feasible but not necessarily optimal.
#[derive(Debug)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DFS {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut stack = Stack::new();
        let mut visited: HashSet<P::State> = HashSet::new();

        stack.push(SearchNode::root(problem.get_start_state(), (0.).into()));
        statistics.increment_generated_nodes(1);

        while let Some(node) = stack.pop() {
            if visited.contains(node.get_state()) {
                statistics.increment_pruned_nodes();
                continue;
            }
            visited.insert(node.get_state().clone());

            if problem.is_goal_state(node.get_state()) {
                statistics.finalise_search();
                return (SearchResult::Success(node.extract_plan()), statistics);
            }

            statistics.increment_expanded_nodes();
            let transitions = problem.expand(node.get_state());
            statistics.increment_generated_nodes(transitions.len());
            for transition in transitions {
                stack.push(SearchNode::child(&node, transition, (0.).into()));
            }
        }

        statistics.finalise_search();
        (SearchResult::Unsolvable, statistics)
    }
}
