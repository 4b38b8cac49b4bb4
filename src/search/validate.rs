use crate::search::{Plan, SearchProblem};

/// Replay `plan` from the problem's start state, checking that every step is
/// applicable and that the final state is a goal. Returns the total plan
/// cost on success.
pub fn validate<P: SearchProblem>(plan: &Plan<P::Action>, problem: &P) -> Result<f64, String> {
    let mut cur_state = problem.get_start_state();
    for action in plan.steps() {
        let transition = problem
            .expand(&cur_state)
            .into_iter()
            .find(|transition| &transition.action == action)
            .ok_or_else(|| {
                format!(
                    "Action {:?} is not applicable in state {:?}",
                    action, cur_state
                )
            })?;
        cur_state = transition.next_state;
    }

    if !problem.is_goal_state(&cur_state) {
        return Err(format!(
            "Plan does not reach goal state, final state is: {:?}",
            cur_state
        ));
    }

    problem
        .get_cost_of_action_sequence(plan.steps())
        .ok_or_else(|| "Plan cost could not be computed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn validate_good_plan_ok() {
        let problem = GraphProblem::linear();
        let plan = Plan::new(vec!["move-to-a", "move-to-b", "move-to-g"]);
        assert_approx_eq!(validate(&plan, &problem).unwrap(), 3.0);
    }

    #[test]
    fn validate_bad_plan_not_applicable() {
        let problem = GraphProblem::linear();
        let plan = Plan::new(vec!["move-to-b"]);
        assert!(validate(&plan, &problem).is_err());
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let problem = GraphProblem::linear();
        let plan = Plan::new(vec!["move-to-a", "move-to-b"]);
        assert!(validate(&plan, &problem).is_err());
    }

    #[test]
    fn validate_empty_plan_when_start_is_goal() {
        let problem = GraphProblem::start_is_goal();
        assert_approx_eq!(validate(&Plan::empty(), &problem).unwrap(), 0.0);
    }
}
