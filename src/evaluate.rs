use crate::Assignments;

/// Truth value under a partial assignment: `None` while undetermined.
pub trait Evaluate {
    fn evaluate(&self, assignments: &Assignments) -> Option<bool>;
}
