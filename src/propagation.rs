use crate::{
    formula::{ClauseKey, Status},
    log::targets,
    solver::lookup,
    Solver,
};

impl Solver {
    /// Unit propagation over the pending-check queue.
    ///
    /// For every pending variable, the clauses mentioning it with the polarity
    /// that just became false are examined in watch-list order. Forced
    /// literals are assigned to the top frame and queued in turn. The first
    /// falsified clause is returned at once, leaving the rest of the queue
    /// for the backjump to discard.
    pub(crate) fn propagate(&mut self) -> Option<ClauseKey> {
        while let Some(var) = self.trail.next_pending() {
            let sign = match self.trail.assignments().value(var) {
                Some(sign) => sign,
                None => continue,
            };

            for &key in self.watched.clauses_watching(var, !sign) {
                let clause = lookup(&self.formula, &self.learned, key);
                match clause.examine(self.trail.assignments()) {
                    Status::Ok => (),
                    Status::Implied(literal, antecedents) => {
                        self.stats.propagations += 1;
                        self.trail.propagate(literal, antecedents);
                    }
                    Status::Conflict => {
                        log::debug!(target: targets::PROPAGATION, "Conflict in {:?}: {}", key, clause);
                        return Some(key);
                    }
                }
            }
        }

        None
    }
}
