//! This module implements recursive best-first search.

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Heuristic, HeuristicValue, Plan, SearchNode, SearchProblem, SearchStatistics,
};
use std::cmp;

/// Memory-bounded best-first search. Instead of a global frontier, each
/// recursive call keeps only the children of one node and descends into the
/// cheapest child with an f-bound taken from its best sibling; when the
/// bound is exceeded the call unwinds, backing the subtree's revised cost
/// floor up into the parent's child record. Memory use is linear in search
/// depth, paid for by re-expanding subtrees whenever a bound tightens.
///
/// Being a tree search, RBFS performs no duplicate detection and is only
/// guaranteed to terminate on finite acyclic graphs or with a heuristic that
/// bounds the explored region.
#[derive(Debug)]
pub struct RBFS {}

impl RBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for RBFS {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem> SearchEngine<P> for RBFS {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();

        let start = problem.get_start_state();
        let h = heuristic.evaluate(&start, problem);
        statistics.increment_evaluated_nodes();
        statistics.register_heuristic_value(h);
        let root = SearchNode::root(start, h);
        statistics.increment_generated_nodes(1);

        let (result, _) = rbfs(
            problem,
            &root,
            HeuristicValue::from(f64::INFINITY),
            heuristic,
            &mut statistics,
        );
        statistics.finalise_search();

        match result {
            Some(plan) => (SearchResult::Success(plan), statistics),
            None => (SearchResult::Unsolvable, statistics),
        }
    }
}

/// One bounded descent below `node`. Returns the plan if a goal was reached,
/// together with the revised f-value of `node`'s subtree; the caller stores
/// that revision in its own child record before reconsidering which child to
/// descend into next.
fn rbfs<P: SearchProblem>(
    problem: &P,
    node: &SearchNode<P::State, P::Action>,
    f_limit: HeuristicValue,
    heuristic: &mut dyn Heuristic<P>,
    statistics: &mut SearchStatistics,
) -> (Option<Plan<P::Action>>, HeuristicValue) {
    if problem.is_goal_state(node.get_state()) {
        return (Some(node.extract_plan()), node.get_f());
    }

    statistics.increment_expanded_nodes();
    let transitions = problem.expand(node.get_state());
    statistics.increment_generated_nodes(transitions.len());

    let mut children: Vec<SearchNode<P::State, P::Action>> = transitions
        .into_iter()
        .map(|transition| {
            let h = heuristic.evaluate(&transition.next_state, problem);
            statistics.increment_evaluated_nodes();
            statistics.register_heuristic_value(h);
            let mut child = SearchNode::child(node, transition, h);
            // f-values must be non-decreasing along a path: a child cannot
            // undercut the floor already established for its parent.
            child.back_up_f(cmp::max(child.get_f(), node.get_f()));
            child
        })
        .collect();

    if children.is_empty() {
        return (None, HeuristicValue::from(f64::INFINITY));
    }

    loop {
        let (best, alternative) = select_best(&children);
        let best_f = children[best].get_f();
        // An infinite floor means no goal is reachable below any child, so
        // there is nothing left to re-descend into.
        if best_f > f_limit || best_f.into_inner().is_infinite() {
            return (None, best_f);
        }

        let (result, revised_f) = rbfs(
            problem,
            &children[best],
            cmp::min(f_limit, alternative),
            heuristic,
            statistics,
        );
        children[best].back_up_f(revised_f);
        if let Some(plan) = result {
            return (Some(plan), revised_f);
        }
    }
}

/// Index of the child with the smallest f (first one on ties) and the f of
/// the runner-up, `+inf` when there is no second child.
fn select_best<S: Clone, A: Clone>(children: &[SearchNode<S, A>]) -> (usize, HeuristicValue) {
    debug_assert!(!children.is_empty());
    let mut best = 0;
    let mut alternative = HeuristicValue::from(f64::INFINITY);
    for (index, child) in children.iter().enumerate().skip(1) {
        if child.get_f() < children[best].get_f() {
            alternative = children[best].get_f();
            best = index;
        } else if child.get_f() < alternative {
            alternative = child.get_f();
        }
    }
    (best, alternative)
}
