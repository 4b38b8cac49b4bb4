mod astar;
mod bfs;
mod dfs;
mod rbfs;
mod search_engine;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use rbfs::RBFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};

use crate::search::{Heuristic, SearchProblem, ZeroHeuristic};

/// Convenience entry points that run an engine once and discard the
/// statistics. Callers that want the statistics use the engine structs
/// directly.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    DFS::new().search(problem, &mut ZeroHeuristic::new()).0
}

pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    BFS::new().search(problem, &mut ZeroHeuristic::new()).0
}

/// Pass [`ZeroHeuristic`] for uniform-cost behaviour.
pub fn astar_search<P: SearchProblem>(
    problem: &P,
    heuristic: &mut dyn Heuristic<P>,
) -> SearchResult<P::Action> {
    AStar::new().search(problem, heuristic).0
}

/// Pass [`ZeroHeuristic`] for uniform-cost behaviour.
pub fn recursive_best_first_search<P: SearchProblem>(
    problem: &P,
    heuristic: &mut dyn Heuristic<P>,
) -> SearchResult<P::Action> {
    RBFS::new().search(problem, heuristic).0
}
