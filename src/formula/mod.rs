pub mod clause;

use crate::{Assignments, ClauseIdx, Evaluate, Literal, Variable};
pub use clause::{Clause, Score, Status, WeightedLiteral};
use std::ops::Index;

/// Identifies a clause in either the original formula or the learned set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClauseKey {
    Original(ClauseIdx),
    Learned(ClauseIdx),
}

/// The original clauses, in input order. Immutable once the search starts.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    num_vars: Variable,
    contains_empty_clause: bool,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            num_vars,
            contains_empty_clause: false,
            clauses: Vec::new(),
        }
    }

    pub fn num_variables(&self) -> Variable {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn contains_empty_clause(&self) -> bool {
        self.contains_empty_clause
    }

    /// Adds a clause, widening the variable range if needed.
    /// An empty clause only sets a flag: the formula is then unsatisfiable.
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = Literal>) {
        let clause = Clause::new(literals);
        if clause.is_empty() {
            self.contains_empty_clause = true;
            return;
        }
        if let Some(max) = clause.max_variable() {
            self.num_vars = std::cmp::max(self.num_vars, max + 1);
        }
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub(crate) fn clauses_mut(&mut self) -> &mut [Clause] {
        &mut self.clauses
    }

    pub fn units(&self) -> impl Iterator<Item = Literal> + '_ {
        self.clauses
            .iter()
            .filter(|clause| clause.is_unit())
            .flat_map(Clause::literals)
    }

    /// First clause not satisfied by `assignments`, if any.
    pub fn unsatisfied(&self, assignments: &Assignments) -> Option<(ClauseIdx, &Clause)> {
        self.clauses
            .iter()
            .enumerate()
            .find(|(_, clause)| clause.evaluate(assignments) != Some(true))
    }
}

impl Evaluate for Formula {
    fn evaluate(&self, assignments: &Assignments) -> Option<bool> {
        if self.contains_empty_clause {
            return Some(false);
        }
        self.clauses
            .iter()
            .map(|clause| clause.evaluate(assignments))
            .collect::<Option<Vec<_>>>()
            .map(|truths| truths.iter().all(|x| *x))
    }
}

impl Index<ClauseIdx> for Formula {
    type Output = Clause;

    fn index(&self, idx: ClauseIdx) -> &Self::Output {
        &self.clauses[idx]
    }
}

/// Clauses written as DIMACS integers, e.g. `vec![vec![1, -2], vec![2]]`.
impl From<Vec<Vec<isize>>> for Formula {
    fn from(clauses: Vec<Vec<isize>>) -> Self {
        let mut formula = Formula::new(0);
        for clause in clauses {
            formula.add_clause(clause.into_iter().map(Literal::from));
        }
        formula
    }
}

#[test]
fn build_from_dimacs_integers() {
    use crate::Sign::Positive;

    let formula = Formula::from(vec![vec![1, -2], vec![3], vec![]]);
    assert_eq!(formula.num_variables(), 3);
    assert_eq!(formula.num_clauses(), 2);
    assert!(formula.contains_empty_clause());
    assert_eq!(formula.units().collect::<Vec<_>>(), vec![Literal::from(3)]);

    let assignments = Assignments::new_with(vec![Some(Positive), None, Some(Positive)]);
    assert_eq!(formula.evaluate(&assignments), Some(false));
    assert!(formula.unsatisfied(&assignments).is_none());
}
