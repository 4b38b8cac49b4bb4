//! Breadth first search

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Heuristic, SearchNode, SearchProblem, SearchStatistics,
};
use std::collections::{HashSet, VecDeque};

/// FIFO graph search, structurally identical to [`DFS`](super::DFS) with the
/// frontier order reversed. Returns a shallowest goal path, which is optimal
/// only when all edges cost the same.
#[derive(Debug)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for BFS {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut queue = VecDeque::new();
        let mut visited: HashSet<P::State> = HashSet::new();

        queue.push_back(SearchNode::root(problem.get_start_state(), (0.).into()));
        statistics.increment_generated_nodes(1);

        while let Some(node) = queue.pop_front() {
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
                queue.push_back(SearchNode::child(&node, transition, (0.).into()));
            }
        }

        statistics.finalise_search();
        (SearchResult::Unsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::breadth_first_search;
    use crate::test_utils::*;

    #[test]
    fn linear_graph() {
        let problem = GraphProblem::linear();
        let plan = breadth_first_search(&problem).plan().unwrap();
        assert_eq!(plan.steps(), &["move-to-a", "move-to-b", "move-to-g"]);
    }

    #[test]
    fn start_is_goal_gives_empty_plan() {
        let problem = GraphProblem::start_is_goal();
        assert!(breadth_first_search(&problem).plan().unwrap().is_empty());
    }

    #[test]
    fn dead_end_is_unsolvable() {
        let problem = GraphProblem::dead_end();
        assert_eq!(breadth_first_search(&problem), SearchResult::Unsolvable);
    }

    // BFS minimises the number of steps, not the cost; on the diamond both
    // branches are two steps, so the A-branch wins by expansion order even
    // though it is the expensive one.
    #[test]
    fn diamond_returns_fewest_steps() {
        let problem = GraphProblem::diamond();
        let plan = breadth_first_search(&problem).plan().unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps(), &["move-to-a", "move-to-g"]);
    }
}
