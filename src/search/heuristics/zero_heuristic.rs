use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// The trivial admissible heuristic. Passing it to A* or RBFS degrades them
/// to uniform-cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}
