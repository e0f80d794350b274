//! Error types.
//!
//! An unsatisfiable formula is a verdict, not an error. Everything here is
//! fatal: either the input could not be read, or the engine reached a state
//! that a correct search never reaches.

use crate::{ClauseIdx, Literal, Sign};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Parse(ParseError),
    /// The model claimed as satisfying leaves an original clause false.
    Inconsistent(Violation),
    /// The heuristic met a falsified clause before finding any candidate.
    UnexpectedState { clause: ClauseIdx },
}

impl Error {
    /// Process exit code reported by the `sat` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Inconsistent(_) => 1,
            Error::Io(_) | Error::Parse(_) => 2,
            Error::UnexpectedState { .. } => 3,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    MissingProblemLine,
    InvalidProblemLine { line: usize },
    InvalidToken { line: usize, token: String },
    VariableOutOfRange { line: usize, literal: isize },
    ClauseCount { declared: usize, found: usize },
    UnterminatedClause,
}

/// An original clause together with the state of each of its variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    pub clause: ClauseIdx,
    pub literals: Vec<(Literal, Option<Sign>)>,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Error in model, clause is not satisfied:")?;
        for (literal, state) in self.literals.iter() {
            let state = match state {
                Some(sign) => sign.symbol(),
                None => "[ ]",
            };
            write!(
                f,
                " {}{}={}",
                literal.sign().symbol(),
                literal.var() + 1,
                state
            )?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseError::MissingProblemLine => write!(f, "missing 'p cnf' problem line"),
            ParseError::InvalidProblemLine { line } => {
                write!(f, "line {}: malformed problem line", line)
            }
            ParseError::InvalidToken { line, token } => {
                write!(f, "line {}: '{}' is not a literal", line, token)
            }
            ParseError::VariableOutOfRange { line, literal } => {
                write!(f, "line {}: literal {} outside declared variables", line, literal)
            }
            ParseError::ClauseCount { declared, found } => {
                write!(f, "expected {} clauses, found {}", declared, found)
            }
            ParseError::UnterminatedClause => write!(f, "last clause is not terminated by 0"),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Inconsistent(violation) => write!(f, "{}", violation),
            Error::UnexpectedState { clause } => {
                write!(f, "Unexpected error: clause {} falsified at decision", clause)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Inconsistent(v)
    }
}

#[test]
fn violation_listing() {
    let violation = Violation {
        clause: 0,
        literals: vec![
            (Literal::from(1), Some(Sign::Negative)),
            (Literal::from(-2), None),
        ],
    };
    assert_eq!(
        violation.to_string(),
        "Error in model, clause is not satisfied: [+]1=[-] [-]2=[ ]"
    );
    assert_eq!(Error::from(violation).exit_code(), 1);
    assert_eq!(Error::from(ParseError::MissingProblemLine).exit_code(), 2);
}
