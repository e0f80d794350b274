/// What happens to clauses learned from conflicts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LearnedClauses {
    /// Kept for diagnostics only; propagation never sees them.
    Record,
    /// Also added to the watch lists, so they prune later search.
    Watch,
}

impl std::str::FromStr for LearnedClauses {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "record" => Ok(Self::Record),
            "watch" => Ok(Self::Watch),
            other => Err(format!("unknown learned clause mode '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Candidate improvements after which the heuristic stops scanning.
    pub decision_cap: usize,
    pub learned_clauses: LearnedClauses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decision_cap: 5,
            learned_clauses: LearnedClauses::Record,
        }
    }
}

#[test]
fn parse_learned_mode() {
    assert_eq!("watch".parse::<LearnedClauses>(), Ok(LearnedClauses::Watch));
    assert_eq!("record".parse::<LearnedClauses>(), Ok(LearnedClauses::Record));
    assert!("prune".parse::<LearnedClauses>().is_err());
}
