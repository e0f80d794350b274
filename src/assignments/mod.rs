use crate::{Literal, Sign, Variable};

pub mod assignment;
pub use assignment::Assignment;

/// One slot per variable: `None` is unassigned.
///
/// Only the [`Trail`](crate::Trail) writes to this array, so every assigned
/// slot is either permanent or owned by a live decision frame.
#[derive(Clone, Debug)]
pub struct Assignments {
    assignments: Vec<Option<Assignment>>,
}

impl Assignments {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            assignments: vec![None; num_vars],
        }
    }

    #[cfg(test)]
    pub fn new_with(signs: Vec<Option<Sign>>) -> Self {
        let mut x = Self::new(signs.len());
        for (i, sign) in signs.into_iter().enumerate() {
            if let Some(sign) = sign {
                x.set(i, Assignment::base(sign));
            }
        }
        x
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn get(&self, var: Variable) -> Option<&Assignment> {
        self.assignments[var].as_ref()
    }

    pub fn value(&self, var: Variable) -> Option<Sign> {
        self.get(var).map(Assignment::sign)
    }

    pub fn is_assigned(&self, var: Variable) -> bool {
        self.assignments[var].is_some()
    }

    pub fn num_assigned(&self) -> usize {
        self.assignments.iter().filter(|slot| slot.is_some()).count()
    }

    /// The literal that is currently true for `var`, if any.
    pub fn literal(&self, var: Variable) -> Option<Literal> {
        self.value(var).map(|sign| Literal::new(var, sign))
    }

    pub(crate) fn set(&mut self, var: Variable, assignment: Assignment) {
        debug_assert!(
            self.assignments[var].is_none(),
            "variable {} assigned twice",
            var
        );
        self.assignments[var] = Some(assignment);
    }

    pub(crate) fn remove(&mut self, var: Variable) {
        self.assignments[var] = None;
    }

    /// Every variable with its value; unassigned variables are reported false.
    pub fn model(&self) -> impl Iterator<Item = (Variable, Sign)> + '_ {
        self.assignments.iter().enumerate().map(|(var, slot)| {
            (
                var,
                slot.as_ref()
                    .map(Assignment::sign)
                    .unwrap_or(Sign::Negative),
            )
        })
    }
}

#[test]
fn set_and_remove() {
    let mut assignments = Assignments::new_with(vec![Some(Sign::Positive), None, None]);
    assert_eq!(assignments.num_assigned(), 1);
    assert_eq!(assignments.literal(0), Some(Literal::new(0, true)));

    assignments.set(2, Assignment::owned(Sign::Negative, 1));
    assert_eq!(assignments.get(2).and_then(Assignment::frame), Some(1));
    assert!(!assignments.get(2).map_or(true, Assignment::is_permanent));

    assignments.remove(2);
    assert!(!assignments.is_assigned(2));
    assert_eq!(
        assignments.model().collect::<Vec<_>>(),
        vec![(0, Sign::Positive), (1, Sign::Negative), (2, Sign::Negative)]
    );
}
