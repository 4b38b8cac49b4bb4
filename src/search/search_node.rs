use crate::search::{HeuristicValue, Plan, Transition};

/// The route recorded while searching: one `(state, action)` pair per node
/// from the start to the current node's parent, where the action is the one
/// taken to arrive at the paired state. The start state's pair carries
/// `None`, which plan extraction strips.
pub type Path<S, A> = Vec<(S, Option<A>)>;

/// A node in the search tree. Nodes are created fresh whenever a state is
/// generated by expansion and are never mutated afterwards, with one
/// exception: RBFS revises a node's f-estimate through
/// [`back_up_f`](Self::back_up_f) once a bounded descent into the node's
/// subtree has established a higher cost floor.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// The state this node stands for.
    state: S,
    /// Action that led to this node; `None` for the root.
    action: Option<A>,
    /// G-value of the node, i.e. the cost accumulated from the start.
    g: f64,
    /// Route from the start to this node's parent.
    path: Path<S, A>,
    /// F-value of the node. Only RBFS maintains it as a backed-up bound;
    /// DFS and A* ignore it.
    f: HeuristicValue,
}

impl<S: Clone, A: Clone> SearchNode<S, A> {
    pub fn root(state: S, h: HeuristicValue) -> Self {
        Self {
            state,
            action: None,
            g: 0.,
            path: vec![],
            f: h,
        }
    }

    /// Build the node reached by taking `transition` out of `parent`.
    pub fn child(parent: &Self, transition: Transition<S, A>, h: HeuristicValue) -> Self {
        let g = parent.g + transition.cost;
        let mut path = parent.path.clone();
        path.push((parent.state.clone(), parent.action.clone()));
        Self {
            state: transition.next_state,
            action: Some(transition.action),
            g,
            path,
            f: HeuristicValue::from(g) + h,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_g(&self) -> f64 {
        self.g
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    /// Record that the true cost of reaching a goal through this node is at
    /// least `f`.
    pub fn back_up_f(&mut self, f: HeuristicValue) {
        self.f = f;
    }

    /// Turn the route recorded in this node into the visible action
    /// sequence. The root pair contributes no action.
    pub fn extract_plan(&self) -> Plan<A> {
        let steps = self
            .path
            .iter()
            .map(|(_, action)| action)
            .chain(std::iter::once(&self.action))
            .filter_map(|action| action.clone())
            .collect();
        Plan::new(steps)
    }
}
