use crate::search::{
    search_engines::{AStar, BFS, DFS, RBFS},
    Heuristic, Plan, SearchProblem, SearchStatistics,
};
use clap;

/// Outcome of one search invocation. Exhausting the reachable component is a
/// legitimate result, not an error, and is kept distinct from the empty (but
/// valid) plan returned when the start state is already a goal.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<A> {
    /// The search reached a goal state
    Success(Plan<A>),
    /// No goal state is reachable from the start state
    Unsolvable,
}

impl<A> SearchResult<A> {
    pub fn plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::Unsolvable => None,
        }
    }
}

pub trait SearchEngine<P: SearchProblem> {
    /// Run the engine to completion on `problem`. Engines that do not use a
    /// heuristic ignore the argument; [`ZeroHeuristic`](crate::search::ZeroHeuristic)
    /// is the conventional value to pass in that case.
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    DFS,
    BFS,
    AStar,
    RBFS,
}

impl SearchEngineName {
    pub fn create<P: SearchProblem>(&self) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::DFS => Box::new(DFS::new()),
            SearchEngineName::BFS => Box::new(BFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
            SearchEngineName::RBFS => Box::new(RBFS::new()),
        }
    }
}
