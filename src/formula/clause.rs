use crate::{Assignments, Evaluate, Literal, Variable};
use ordered_float::OrderedFloat;

pub type Score = OrderedFloat<f64>;

/// A clause literal carrying the static branching score of its variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedLiteral {
    literal: Literal,
    score: Score,
}

impl WeightedLiteral {
    pub fn new(literal: Literal) -> Self {
        Self {
            literal,
            score: OrderedFloat(0.0),
        }
    }

    pub fn literal(&self) -> Literal {
        self.literal
    }

    pub fn var(&self) -> Variable {
        self.literal.var()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}

impl Evaluate for WeightedLiteral {
    #[inline]
    fn evaluate(&self, assignments: &Assignments) -> Option<bool> {
        self.literal.evaluate(assignments)
    }
}

#[derive(Clone, Debug)]
pub struct Clause {
    literals: Vec<WeightedLiteral>,
}

/// Outcome of checking a clause after one of its literals became false.
#[must_use]
#[derive(Debug, PartialEq)]
pub enum Status {
    /// Satisfied, or still has two or more unassigned literals
    Ok,
    /// Every literal is false
    Conflict,
    /// The only unassigned literal, with the variables of the false literals forcing it
    Implied(Literal, Vec<Variable>),
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().map(WeightedLiteral::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn weighted(&self) -> &[WeightedLiteral] {
        &self.literals
    }

    pub(crate) fn weighted_mut(&mut self) -> &mut [WeightedLiteral] {
        &mut self.literals
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().map(WeightedLiteral::literal)
    }

    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals().map(Literal::var)
    }

    pub fn max_variable(&self) -> Option<Variable> {
        self.variables().max()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals().any(|x| x == literal)
    }

    /// Looks for a forced literal or a conflict under `assignments`.
    pub fn examine(&self, assignments: &Assignments) -> Status {
        let mut unassigned = None;
        let mut antecedents = Vec::with_capacity(self.literals.len());

        for literal in self.literals() {
            match literal.evaluate(assignments) {
                Some(true) => return Status::Ok,
                Some(false) => antecedents.push(literal.var()),
                None if unassigned.is_some() => return Status::Ok,
                None => unassigned = Some(literal),
            }
        }

        match unassigned {
            Some(literal) => Status::Implied(literal, antecedents),
            None => Status::Conflict,
        }
    }
}

impl Evaluate for Clause {
    fn evaluate(&self, assignments: &Assignments) -> Option<bool> {
        let mut undetermined = false;
        for literal in self.literals.iter() {
            match literal.evaluate(assignments) {
                Some(true) => return Some(true),
                Some(false) => (),
                None => undetermined = true,
            }
        }
        if undetermined {
            None
        } else {
            Some(false)
        }
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Self::new(literals)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for literal in self.literals() {
            write!(f, "{} ", literal)?;
        }
        write!(f, "0")
    }
}

#[test]
fn examine_clause() {
    use crate::Sign::{Negative, Positive};

    let clause = Clause::from(vec![
        Literal::from(1),
        Literal::from(-2),
        Literal::from(3),
    ]);

    let open = Assignments::new_with(vec![None, None, None]);
    assert_eq!(clause.examine(&open), Status::Ok);
    assert_eq!(clause.evaluate(&open), None);

    let unit = Assignments::new_with(vec![Some(Negative), Some(Positive), None]);
    assert_eq!(
        clause.examine(&unit),
        Status::Implied(Literal::from(3), vec![0, 1])
    );

    let satisfied = Assignments::new_with(vec![Some(Negative), Some(Negative), None]);
    assert_eq!(clause.examine(&satisfied), Status::Ok);
    assert_eq!(clause.evaluate(&satisfied), Some(true));

    let falsified = Assignments::new_with(vec![Some(Negative), Some(Positive), Some(Negative)]);
    assert_eq!(clause.examine(&falsified), Status::Conflict);
    assert_eq!(clause.evaluate(&falsified), Some(false));
}

#[test]
fn unit_clause_is_implied_without_antecedents() {
    let clause = Clause::from(vec![Literal::from(-1)]);
    assert!(clause.is_unit());
    assert_eq!(
        clause.examine(&Assignments::new(1)),
        Status::Implied(Literal::from(-1), vec![])
    );
    assert_eq!(format!("{}", clause), "-1 0");
}
