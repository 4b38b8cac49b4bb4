//! This module implements the A* search algorithm.

use crate::search::{
    frontier::PriorityQueue,
    search_engines::{SearchEngine, SearchResult},
    Heuristic, SearchNode, SearchProblem, SearchStatistics,
};
use std::collections::HashMap;

/// Best-first search ordered by `g + h`. The best-known-g table doubles as
/// the closed set: a popped node whose state already has a recorded g no
/// larger than its own is discarded, and closed states are never reopened.
///
/// With an admissible and consistent heuristic the returned plan is optimal.
/// Under an admissible but inconsistent heuristic the no-reopening policy
/// can return a suboptimal plan; this is a known, deliberate limitation.
#[derive(Debug)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = PriorityQueue::new();
        let mut best_g: HashMap<P::State, f64> = HashMap::new();

        let start = problem.get_start_state();
        let h = heuristic.evaluate(&start, problem);
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(h);
        frontier.push(SearchNode::root(start, h), h);
        statistics.increment_generated_nodes(1);

        while let Some(node) = frontier.pop() {
            if let Some(&recorded_g) = best_g.get(node.get_state()) {
                if node.get_g() >= recorded_g {
                    statistics.increment_pruned_nodes();
                    continue;
                }
            }
            best_g.insert(node.get_state().clone(), node.get_g());

            if problem.is_goal_state(node.get_state()) {
                statistics.finalise_search();
                return (SearchResult::Success(node.extract_plan()), statistics);
            }

            statistics.increment_expanded_nodes();
            for transition in problem.expand(node.get_state()) {
                let h = heuristic.evaluate(&transition.next_state, problem);
                statistics.increment_evaluated_nodes();
                statistics.register_heuristic_value(h);
                // An infinite estimate asserts the child is a dead end; such
                // children are never enqueued.
                if h.into_inner().is_finite() {
                    let child = SearchNode::child(&node, transition, h);
                    let priority = child.get_f();
                    frontier.push(child, priority);
                    statistics.increment_generated_nodes(1);
                }
            }
        }

        statistics.finalise_search();
        (SearchResult::Unsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::astar_search;
    use crate::search::{validate, ZeroHeuristic};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn linear_graph_with_null_heuristic() {
        let problem = GraphProblem::linear();
        let plan = astar_search(&problem, &mut ZeroHeuristic::new())
            .plan()
            .unwrap();
        assert_eq!(plan.steps(), &["move-to-a", "move-to-b", "move-to-g"]);
        assert_approx_eq!(validate(&plan, &problem).unwrap(), 3.0);
    }

    #[test]
    fn start_is_goal_gives_empty_plan() {
        let problem = GraphProblem::start_is_goal();
        let plan = astar_search(&problem, &mut ZeroHeuristic::new())
            .plan()
            .unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn diamond_prefers_cheap_branch() {
        let problem = GraphProblem::diamond();
        let plan = astar_search(&problem, &mut ZeroHeuristic::new())
            .plan()
            .unwrap();
        assert_eq!(plan.steps(), &["move-to-b", "move-to-g"]);
        assert_approx_eq!(validate(&plan, &problem).unwrap(), 1.0);
    }

    #[test]
    fn dead_end_is_unsolvable() {
        let problem = GraphProblem::dead_end();
        assert_eq!(
            astar_search(&problem, &mut ZeroHeuristic::new()),
            SearchResult::Unsolvable
        );
    }

    #[test]
    fn consistent_heuristic_preserves_optimality() {
        let problem = GraphProblem::diamond();
        let mut heuristic = TableHeuristic::consistent_for_diamond();
        let plan = astar_search(&problem, &mut heuristic).plan().unwrap();
        assert_approx_eq!(validate(&plan, &problem).unwrap(), 1.0);
    }

    #[test]
    fn infinite_heuristic_excludes_child() {
        // The only route to the goal passes through a state the heuristic
        // declares unreachable, so the search must fail rather than enqueue
        // the child.
        let problem = GraphProblem::linear();
        let mut heuristic = TableHeuristic::new(vec![("A", f64::INFINITY)], 0.);
        assert_eq!(
            astar_search(&problem, &mut heuristic),
            SearchResult::Unsolvable
        );
    }

    #[test]
    fn deterministic_across_runs() {
        let problem = GraphProblem::diamond();
        let first = astar_search(&problem, &mut ZeroHeuristic::new());
        let second = astar_search(&problem, &mut ZeroHeuristic::new());
        assert_eq!(first, second);
    }
}
