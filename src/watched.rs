use crate::{formula::ClauseKey, Formula, Literal, Sign, Variable};
use std::ops::Index;

/// For each variable and polarity, every clause mentioning the variable
/// with that polarity, in insertion order.
#[derive(Debug)]
pub struct Watched {
    watched: Vec<Vec<ClauseKey>>,
}

impl Watched {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            watched: vec![Vec::new(); num_vars * 2],
        }
    }

    pub fn from_formula(formula: &Formula) -> Self {
        let mut watched = Self::new(formula.num_variables());
        for (idx, clause) in formula.clauses().iter().enumerate() {
            watched.insert(ClauseKey::Original(idx), clause.literals());
        }
        watched
    }

    /// Registers `key` under each of its literals, once per literal.
    pub fn insert(&mut self, key: ClauseKey, literals: impl IntoIterator<Item = Literal>) {
        for literal in literals {
            let list = &mut self.watched[literal.code()];
            // A repeated literal can only collide with the key just pushed
            if list.last() != Some(&key) {
                list.push(key);
            }
        }
    }

    /// Clauses mentioning `var` with polarity `sign`.
    pub fn clauses_watching(&self, var: Variable, sign: Sign) -> &[ClauseKey] {
        &self[Literal::new(var, sign)]
    }
}

impl Index<Literal> for Watched {
    type Output = Vec<ClauseKey>;

    #[inline]
    fn index(&self, literal: Literal) -> &Self::Output {
        &self.watched[literal.code()]
    }
}

#[test]
fn polarity_lists() {
    use crate::Sign::{Negative, Positive};

    let formula = Formula::from(vec![vec![1, -2], vec![-1, -2], vec![2, 2, 3]]);
    let watched = Watched::from_formula(&formula);

    assert_eq!(watched.clauses_watching(0, Positive), &[ClauseKey::Original(0)]);
    assert_eq!(watched.clauses_watching(0, Negative), &[ClauseKey::Original(1)]);
    assert_eq!(
        watched.clauses_watching(1, Negative),
        &[ClauseKey::Original(0), ClauseKey::Original(1)]
    );
    assert_eq!(watched.clauses_watching(1, Positive), &[ClauseKey::Original(2)]);
    assert!(watched.clauses_watching(2, Negative).is_empty());
}
