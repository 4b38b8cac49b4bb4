use crate::search::SearchProblem;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Heuristic estimates are totally ordered floats so that they can be used
/// directly as frontier priorities and RBFS bounds, with `+inf` standing for
/// "provably unreachable from here".
pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic<P: SearchProblem>: Debug {
    /// Estimate the remaining cost from `state` to the nearest goal of
    /// `problem`. Must be non-negative; may be `+inf` to declare the state a
    /// dead end. Admissibility and consistency are the caller's promise, not
    /// something the engines can check.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}
