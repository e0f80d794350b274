use crate::{
    error::{Error, Violation},
    formula::{Clause, ClauseKey},
    heuristic::{self, Decision},
    log::targets,
    Config, Evaluate, Formula, Literal, Trail, Watched,
};

/// Positions of the control loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    Propagating,
    Conflict(ClauseKey),
    Deciding,
    Sat,
    Unsat,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Sat | State::Unsat)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// One literal per variable, in variable order.
    Sat(Vec<Literal>),
    Unsat,
}

impl Solution {
    pub fn is_sat(&self) -> bool {
        matches!(self, Solution::Sat(_))
    }

    /// Whether this is a model of `formula`. Always false for `Unsat`.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        match self {
            Solution::Unsat => false,
            Solution::Sat(model) => {
                !formula.contains_empty_clause()
                    && formula
                        .clauses()
                        .iter()
                        .all(|clause| clause.literals().any(|literal| model.contains(&literal)))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub decisions: usize,
    pub conflicts: usize,
    pub propagations: usize,
    pub learned: usize,
}

pub(crate) fn lookup<'a>(formula: &'a Formula, learned: &'a [Clause], key: ClauseKey) -> &'a Clause {
    match key {
        ClauseKey::Original(idx) => &formula[idx],
        ClauseKey::Learned(idx) => &learned[idx],
    }
}

pub struct Solver {
    pub(crate) config: Config,
    pub(crate) formula: Formula,
    pub(crate) watched: Watched,
    pub(crate) trail: Trail,
    pub(crate) learned: Vec<Clause>,
    pub(crate) stats: Stats,
    state: State,
}

impl Solver {
    pub fn new(formula: impl Into<Formula>) -> Self {
        Self::with_config(formula, Config::default())
    }

    /// Weighs the formula, builds the watch lists and loads the unit clauses
    /// as permanent facts.
    pub fn with_config(formula: impl Into<Formula>, config: Config) -> Self {
        let mut formula = formula.into();
        heuristic::weigh(&mut formula);

        let num_vars = formula.num_variables();
        let watched = Watched::from_formula(&formula);
        let mut trail = Trail::new(num_vars);

        let mut state = State::Propagating;
        if formula.contains_empty_clause() {
            log::info!(target: targets::SOLVE, "Formula contains the empty clause");
            state = State::Unsat;
        } else {
            for literal in formula.units() {
                match literal.evaluate(trail.assignments()) {
                    Some(true) => (),
                    Some(false) => {
                        log::info!(target: targets::SOLVE, "Unit clause {} contradicts an earlier unit", literal);
                        state = State::Unsat;
                        break;
                    }
                    None => trail.propagate(literal, Vec::new()),
                }
            }
        }

        log::debug!(target: targets::SOLVE, "{} variables, {} clauses", num_vars, formula.num_clauses());

        Self {
            config,
            formula,
            watched,
            trail,
            learned: Vec::new(),
            stats: Stats::default(),
            state,
        }
    }

    pub fn solve(mut self) -> Result<Solution, Error> {
        self.run()
    }

    /// Steps until a verdict is reached.
    pub fn run(&mut self) -> Result<Solution, Error> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.solution())
    }

    /// Makes one transition of the control loop and returns the new state.
    pub fn step(&mut self) -> Result<State, Error> {
        self.state = match self.state {
            State::Propagating => match self.propagate() {
                Some(key) => State::Conflict(key),
                None => State::Deciding,
            },
            State::Conflict(key) => self.backjump(key),
            State::Deciding => self.decide()?,
            terminal => terminal,
        };
        Ok(self.state)
    }

    fn decide(&mut self) -> Result<State, Error> {
        match heuristic::next_decision(
            &self.formula,
            self.trail.assignments(),
            self.config.decision_cap,
        )? {
            Decision::Branch(literal) => {
                self.stats.decisions += 1;
                self.trail.decide(literal);
                Ok(State::Propagating)
            }
            Decision::Satisfied => {
                self.check_model()?;
                Ok(State::Sat)
            }
        }
    }

    /// Confirms every original clause has a true literal.
    fn check_model(&self) -> Result<(), Error> {
        let assignments = self.trail.assignments();

        if let Some((idx, clause)) = self.formula.unsatisfied(assignments) {
            let violation = Violation {
                clause: idx,
                literals: clause
                    .literals()
                    .map(|literal| (literal, assignments.value(literal.var())))
                    .collect(),
            };
            log::error!(target: targets::SOLVE, "{}", violation);
            return Err(violation.into());
        }

        for clause in self.learned.iter() {
            if clause.evaluate(assignments) == Some(false) {
                log::warn!(target: targets::ANALYSIS, "Learned clause falsified by the model: {}", clause);
            }
        }

        Ok(())
    }

    fn solution(&self) -> Solution {
        match self.state {
            State::Sat => Solution::Sat(
                self.trail
                    .assignments()
                    .model()
                    .map(|(var, sign)| Literal::new(var, sign))
                    .collect(),
            ),
            _ => Solution::Unsat,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn learned(&self) -> &[Clause] {
        &self.learned
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}
