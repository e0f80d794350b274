//! Static, clause-position-weighted branching.
//!
//! Every variable starts with a score of one. Walking the clauses from the
//! last to the first, the `i`-th clause visited (counting from one) adds
//! `log2(i)` to the score of each variable it mentions, so the clause at
//! index `k` of `n` contributes `log2(n - k)`. Scores never change after
//! the search starts.

use crate::{
    error::Error, formula::Score, log::targets, Assignments, Evaluate, Formula, Literal, Sign,
    Variable,
};
use ordered_float::OrderedFloat;

/// Computes the score of each variable and stores it on every occurrence.
pub fn weigh(formula: &mut Formula) -> Vec<Score> {
    let mut scores = vec![OrderedFloat(1.0); formula.num_variables()];

    for (i, clause) in formula.clauses().iter().rev().enumerate() {
        let weight = ((i + 1) as f64).log2();
        for var in clause.variables() {
            scores[var] = OrderedFloat(scores[var].into_inner() + weight);
        }
    }

    for clause in formula.clauses_mut() {
        for literal in clause.weighted_mut() {
            literal.set_score(scores[literal.var()]);
        }
    }

    scores
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Branch(Literal),
    /// No unsatisfied clause has an unassigned literal left.
    Satisfied,
}

/// Picks the next variable to branch on.
///
/// Clauses are scanned in order, skipping satisfied ones. The unassigned
/// literal with the highest score seen so far is the candidate, ties going
/// to the later literal, and the scan stops after `cap` improvements.
pub fn next_decision(
    formula: &Formula,
    assignments: &Assignments,
    cap: usize,
) -> Result<Decision, Error> {
    let mut best: Option<(Variable, Score)> = None;
    let mut improvements = 0;

    for (idx, clause) in formula.clauses().iter().enumerate() {
        if clause.evaluate(assignments) == Some(true) {
            continue;
        }

        let mut open = false;
        for literal in clause.weighted() {
            if assignments.is_assigned(literal.var()) {
                continue;
            }
            open = true;

            if best.map_or(true, |(_, score)| literal.score() >= score) {
                best = Some((literal.var(), literal.score()));
                improvements += 1;
                if improvements >= cap {
                    break;
                }
            }
        }

        if improvements >= cap {
            break;
        }

        if !open && best.is_none() {
            log::error!(target: targets::DECISION, "Clause {} is falsified with no candidate", idx);
            return Err(Error::UnexpectedState { clause: idx });
        }
    }

    Ok(match best {
        Some((var, score)) => {
            log::debug!(target: targets::DECISION, "Branching on {} (score {})", var + 1, score);
            Decision::Branch(Literal::new(var, Sign::Positive))
        }
        None => Decision::Satisfied,
    })
}
