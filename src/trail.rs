use crate::{
    log::targets, Assignment, Assignments, DecisionLevel, Dependencies, Literal, Variable,
};
use std::collections::VecDeque;

/// A decision and everything propagated under it before the next decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    decision: Literal,
    propagated: Vec<Literal>,
}

impl Frame {
    pub fn decision(&self) -> Literal {
        self.decision
    }

    pub fn propagated(&self) -> &[Literal] {
        &self.propagated
    }

    /// The decision followed by its propagations, in assignment order.
    pub fn owned(&self) -> impl Iterator<Item = Literal> + '_ {
        std::iter::once(self.decision).chain(self.propagated.iter().copied())
    }
}

/// The stack of decision frames together with the state they own.
///
/// The assignment array and the dependency graph are only written here.
/// Assignments made while no frame is live are permanent; every other
/// assignment, and its dependency record, belongs to the top frame at the
/// time it was made and is released by [`Trail::pop`].
#[derive(Clone, Debug)]
pub struct Trail {
    frames: Vec<Frame>,
    assignments: Assignments,
    dependencies: Dependencies,
    pending: VecDeque<Variable>,
}

impl Trail {
    pub fn new(num_vars: Variable) -> Self {
        Self {
            frames: Vec::with_capacity(num_vars),
            assignments: Assignments::new(num_vars),
            dependencies: Dependencies::new(num_vars),
            pending: VecDeque::new(),
        }
    }

    /// Number of live frames; zero at the base level.
    pub fn level(&self) -> DecisionLevel {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    /// Opens a new frame with `literal` as its decision.
    pub fn decide(&mut self, literal: Literal) {
        self.frames.push(Frame {
            decision: literal,
            propagated: Vec::new(),
        });
        let level = self.level();
        log::trace!(target: targets::TRAIL, "Decision {} at level {}", literal, level);

        self.assignments
            .set(literal.var(), Assignment::owned(literal.sign(), level));
        self.pending.push_back(literal.var());
    }

    /// Assigns a forced literal to the top frame, or permanently when no frame is live.
    ///
    /// A dependency record is kept for owned literals with at least one antecedent.
    pub fn propagate(&mut self, literal: Literal, antecedents: Vec<Variable>) {
        let var = literal.var();
        let level = self.level();

        match self.frames.last_mut() {
            None => {
                log::trace!(target: targets::TRAIL, "Fact {}", literal);
                self.assignments.set(var, Assignment::base(literal.sign()));
            }
            Some(frame) => {
                log::trace!(target: targets::TRAIL, "Propagated {} at level {} from {:?}", literal, level, antecedents);
                frame.propagated.push(literal);
                self.assignments
                    .set(var, Assignment::owned(literal.sign(), level));
                if !antecedents.is_empty() {
                    self.dependencies.record(var, antecedents);
                }
            }
        }

        self.pending.push_back(var);
    }

    /// Removes the top frame, releasing every slot it owns, and returns its decision.
    pub fn pop(&mut self) -> Option<Literal> {
        let frame = self.frames.pop()?;
        for literal in frame.owned() {
            self.assignments.remove(literal.var());
            self.dependencies.discard(literal.var());
        }
        log::trace!(target: targets::TRAIL, "Released {} literals of level {}", frame.propagated.len() + 1, self.level() + 1);
        Some(frame.decision)
    }

    #[must_use]
    pub fn next_pending(&mut self) -> Option<Variable> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sign::{Negative, Positive};

    #[test]
    fn base_level_is_permanent() {
        let mut trail = Trail::new(3);
        trail.propagate(Literal::new(0, Positive), vec![]);
        trail.propagate(Literal::new(1, Negative), vec![0]);

        assert!(trail.is_empty());
        assert!(trail.dependencies().is_empty());
        assert!(trail.assignments().get(1).unwrap().is_permanent());
        assert_eq!(trail.pop(), None);
        assert_eq!(trail.assignments().num_assigned(), 2);

        assert_eq!(trail.next_pending(), Some(0));
        assert_eq!(trail.next_pending(), Some(1));
        assert_eq!(trail.next_pending(), None);
    }

    #[test]
    fn pop_releases_owned_slots() {
        let mut trail = Trail::new(6);
        trail.propagate(Literal::new(0, Positive), vec![]);

        trail.decide(Literal::new(1, Positive));
        trail.propagate(Literal::new(2, Positive), vec![0, 1]);

        trail.decide(Literal::new(3, Positive));
        trail.propagate(Literal::new(4, Negative), vec![3]);
        trail.propagate(Literal::new(5, Positive), vec![2, 4]);

        assert_eq!(trail.level(), 2);
        assert_eq!(
            trail.frames()[1].owned().collect::<Vec<_>>(),
            vec![
                Literal::new(3, Positive),
                Literal::new(4, Negative),
                Literal::new(5, Positive)
            ]
        );
        assert_eq!(trail.assignments().get(5).unwrap().frame(), Some(2));
        assert_eq!(trail.dependencies().len(), 3);

        assert_eq!(trail.pop(), Some(Literal::new(3, Positive)));
        assert_eq!(trail.level(), 1);
        for var in 3..6 {
            assert!(!trail.assignments().is_assigned(var));
            assert!(!trail.dependencies().contains(var));
        }
        for var in 0..3 {
            assert!(trail.assignments().is_assigned(var));
        }
        assert_eq!(trail.dependencies().get(2), Some(&[0, 1][..]));

        assert_eq!(trail.pop(), Some(Literal::new(1, Positive)));
        assert_eq!(trail.assignments().num_assigned(), 1);
        assert!(trail.dependencies().is_empty());
    }

    #[test]
    fn pending_is_fifo() {
        let mut trail = Trail::new(3);
        trail.decide(Literal::new(2, Negative));
        trail.propagate(Literal::new(0, Positive), vec![2]);
        assert!(trail.has_pending());
        assert_eq!(trail.next_pending(), Some(2));

        trail.clear_pending();
        assert!(!trail.has_pending());
    }
}
