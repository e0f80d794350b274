use crate::{
    error::{Error, ParseError},
    log::targets,
    Formula, Literal,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

impl Formula {
    /// Parses DIMACS CNF text given line by line.
    ///
    /// Clauses may span lines. A line starting with `%` ends the clause list.
    pub fn parse(lines: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Self, ParseError> {
        let mut header = None;
        let mut clauses = Vec::new();
        let mut clause = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let (line_no, line) = (idx + 1, line.as_ref().trim());

            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            if line.starts_with('%') {
                break;
            }
            if line.starts_with('p') {
                if header.is_some() {
                    return Err(ParseError::InvalidProblemLine { line: line_no });
                }
                header = Some(problem_line(line, line_no)?);
                continue;
            }

            let (num_vars, _) = header.ok_or(ParseError::MissingProblemLine)?;
            for token in line.split_whitespace() {
                let value = token
                    .parse::<isize>()
                    .map_err(|_| ParseError::InvalidToken {
                        line: line_no,
                        token: token.to_string(),
                    })?;
                if value == 0 {
                    clauses.push(std::mem::take(&mut clause));
                } else if value.unsigned_abs() > num_vars {
                    return Err(ParseError::VariableOutOfRange {
                        line: line_no,
                        literal: value,
                    });
                } else {
                    clause.push(Literal::from(value));
                }
            }
        }

        let (num_vars, declared) = header.ok_or(ParseError::MissingProblemLine)?;
        if !clause.is_empty() {
            return Err(ParseError::UnterminatedClause);
        }
        if clauses.len() != declared {
            return Err(ParseError::ClauseCount {
                declared,
                found: clauses.len(),
            });
        }

        log::debug!(target: targets::DIMACS, "Read {} variables, {} clauses", num_vars, declared);

        let mut formula = Formula::new(num_vars);
        for clause in clauses {
            formula.add_clause(clause);
        }
        Ok(formula)
    }

    pub fn read(reader: impl Read) -> Result<Self, Error> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::parse(lines)?)
    }

    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::read(File::open(path)?)
    }
}

/// `p cnf <variables> <clauses>`
fn problem_line(line: &str, line_no: usize) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidProblemLine { line: line_no };
    match line.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["p", "cnf", vars, clauses] => Ok((
            vars.parse().map_err(|_| invalid())?,
            clauses.parse().map_err(|_| invalid())?,
        )),
        _ => Err(invalid()),
    }
}
