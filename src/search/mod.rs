pub mod frontier;
pub mod heuristics;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_statistics;
mod validate;

pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::{SearchProblem, Transition};
pub use search_engines::{
    astar_search, breadth_first_search, depth_first_search, recursive_best_first_search,
    SearchEngine, SearchEngineName, SearchResult,
};
pub use search_node::{Path, SearchNode};
pub use search_statistics::SearchStatistics;
pub use validate::validate;
