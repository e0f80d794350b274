use crate::{
    config::LearnedClauses,
    formula::{Clause, ClauseKey},
    log::targets,
    solver::{lookup, State},
    Dependencies, Solver, Variable,
};
use fixedbitset::FixedBitSet;

/// Every variable reachable from `conflict` through dependency records,
/// the conflicting variables included.
pub fn closure(
    dependencies: &Dependencies,
    conflict: impl IntoIterator<Item = Variable>,
    num_vars: Variable,
) -> FixedBitSet {
    let mut reached = FixedBitSet::with_capacity(num_vars);
    let mut todo = conflict.into_iter().collect::<Vec<_>>();

    while let Some(var) = todo.pop() {
        if reached.put(var) {
            continue;
        }
        if let Some(antecedents) = dependencies.get(var) {
            todo.extend_from_slice(antecedents);
        }
    }

    reached
}

impl Solver {
    /// Handles the conflict in `key` with a single-level chronological backjump.
    ///
    /// The learned clause negates every literal in the dependency closure of
    /// the conflict. Only the most recent frame is popped, whether or not the
    /// closure depends on it; its decision comes back flipped as a forced
    /// literal of the frame below, justified by the part of the closure that
    /// is still assigned.
    pub(crate) fn backjump(&mut self, key: ClauseKey) -> State {
        self.stats.conflicts += 1;

        if self.trail.is_empty() {
            log::info!(target: targets::BACKJUMP, "Conflict with no decision to undo");
            return State::Unsat;
        }

        let conflict = lookup(&self.formula, &self.learned, key).variables();
        let reached = closure(
            self.trail.dependencies(),
            conflict,
            self.formula.num_variables(),
        );

        let assignments = self.trail.assignments();
        let learned = Clause::new(
            reached
                .ones()
                .filter_map(|var| assignments.literal(var))
                .map(|literal| !literal),
        );
        log::debug!(target: targets::ANALYSIS, "Learned {}", learned);

        let decision = match self.trail.pop() {
            Some(decision) => decision,
            None => return State::Unsat,
        };
        self.trail.clear_pending();

        let flipped = !decision;
        let assignments = self.trail.assignments();
        let reason = reached
            .ones()
            .filter(|var| *var != flipped.var() && assignments.is_assigned(*var))
            .collect::<Vec<_>>();

        log::debug!(target: targets::BACKJUMP, "Undid {}, asserting {} at level {}", decision, flipped, self.trail.level());
        self.trail.propagate(flipped, reason);
        self.learn(learned);

        State::Propagating
    }

    fn learn(&mut self, clause: Clause) {
        let key = ClauseKey::Learned(self.learned.len());
        if self.config.learned_clauses == LearnedClauses::Watch {
            self.watched.insert(key, clause.literals());
        }
        self.learned.push(clause);
        self.stats.learned += 1;
    }
}
