use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::Rng;
use sat::{
    Config, Error, Evaluate, Formula, LearnedClauses, Literal, Solution, Solver, State, Variable,
};

fn solve_file(name: &str, config: Config) -> Result<(Formula, Solution), Error> {
    let formula = Formula::read_file(format!("tests/data/{}", name))?;
    let solution = Solver::with_config(formula.clone(), config).solve()?;
    Ok((formula, solution))
}

fn modes() -> Vec<Config> {
    vec![
        Config::default(),
        Config {
            learned_clauses: LearnedClauses::Watch,
            ..Config::default()
        },
        Config {
            decision_cap: 1,
            ..Config::default()
        },
    ]
}

fn check_file(name: &str, sat: bool) -> Result<(), Error> {
    for config in modes() {
        let (formula, solution) = solve_file(name, config)?;
        assert_eq!(solution.is_sat(), sat, "{}", name);
        if sat {
            assert!(solution.satisfies(&formula), "{}: {:?}", name, solution);
        }
    }
    Ok(())
}

#[test]
fn single_unit() -> Result<(), Error> {
    let (_, solution) = solve_file("unit.cnf", Config::default())?;
    assert_eq!(solution, Solution::Sat(vec![Literal::from(1)]));
    Ok(())
}

#[test]
fn contradicting_units() -> Result<(), Error> {
    check_file("contradiction.cnf", false)
}

#[test]
fn two_variables() -> Result<(), Error> {
    let (_, solution) = solve_file("two_vars.cnf", Config::default())?;
    assert_eq!(
        solution,
        Solution::Sat(vec![Literal::from(1), Literal::from(2)])
    );
    check_file("two_vars.cnf", true)
}

#[test]
fn at_most_one() -> Result<(), Error> {
    check_file("at_most_one.cnf", true)
}

#[test]
fn propagation_chain() -> Result<(), Error> {
    let formula = Formula::read_file("tests/data/chain.cnf")?;
    let mut solver = Solver::new(formula);
    let solution = solver.run()?;
    assert_eq!(
        solution,
        Solution::Sat(vec![Literal::from(1), Literal::from(2), Literal::from(3)])
    );
    assert_eq!(solver.stats().decisions, 0);
    assert_eq!(solver.stats().conflicts, 0);
    Ok(())
}

#[test]
fn pigeonhole() -> Result<(), Error> {
    check_file("php_3_2.cnf", false)
}

#[test]
fn every_sign_pattern() -> Result<(), Error> {
    check_file("full_3.cnf", false)
}

#[test]
fn clauses_spanning_lines() -> Result<(), Error> {
    let (formula, solution) = solve_file("multiline.cnf", Config::default())?;
    assert_eq!(formula.num_clauses(), 3);
    assert!(solution.satisfies(&formula));
    Ok(())
}

/// A random CNF small enough to check exhaustively.
#[derive(Clone, Debug)]
struct SmallCnf {
    num_vars: Variable,
    clauses: Vec<Vec<isize>>,
}

impl Arbitrary for SmallCnf {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let num_vars = g.gen_range(1, 9);
        let num_clauses = g.gen_range(1, 5 * num_vars + 2);
        let mut clauses = Vec::with_capacity(num_clauses);
        for _ in 0..num_clauses {
            let len = g.gen_range(1, 4);
            let mut clause = Vec::with_capacity(len);
            for _ in 0..len {
                let var = g.gen_range(1, num_vars as isize + 1);
                clause.push(if g.gen() { var } else { -var });
            }
            clauses.push(clause);
        }
        SmallCnf { num_vars, clauses }
    }
}

impl SmallCnf {
    fn formula(&self) -> Formula {
        let mut formula = Formula::new(self.num_vars);
        for clause in self.clauses.iter() {
            formula.add_clause(clause.iter().map(|x| Literal::from(*x)));
        }
        formula
    }

    fn brute_force(&self) -> bool {
        (0u32..1 << self.num_vars).any(|bits| {
            self.clauses.iter().all(|clause| {
                clause.iter().any(|x| {
                    let value = bits & (1 << (x.unsigned_abs() - 1)) != 0;
                    value == (*x > 0)
                })
            })
        })
    }
}

#[quickcheck]
fn agrees_with_brute_force(cnf: SmallCnf) -> bool {
    let expected = cnf.brute_force();
    modes().into_iter().all(|config| {
        match Solver::with_config(cnf.formula(), config).solve() {
            Ok(solution) => {
                solution.is_sat() == expected && (!expected || solution.satisfies(&cnf.formula()))
            }
            Err(_) => false,
        }
    })
}

#[quickcheck]
fn backjumps_release_the_popped_frame(cnf: SmallCnf) -> bool {
    let mut solver = Solver::new(cnf.formula());

    while !solver.state().is_terminal() {
        let conflict = matches!(solver.state(), State::Conflict(_));
        let level = solver.trail().level();
        let before = solver.trail().assignments().clone();

        let state = match solver.step() {
            Ok(state) => state,
            Err(_) => return false,
        };

        if conflict && state == State::Propagating {
            let after = solver.trail().assignments();
            if solver.trail().level() + 1 != level {
                return false;
            }
            for var in 0..cnf.num_vars {
                if !before.is_assigned(var) && after.is_assigned(var) {
                    return false;
                }
                if let Some(frame) = after.get(var).and_then(|a| a.frame()) {
                    if frame >= level {
                        return false;
                    }
                }
            }
            match solver.learned().last() {
                Some(learned) if learned.evaluate(after) != Some(false) => (),
                _ => return false,
            }
        }
    }

    true
}

#[quickcheck]
fn decisions_are_bounded_per_descent(cnf: SmallCnf) -> bool {
    let mut solver = Solver::new(cnf.formula());
    match solver.run() {
        Ok(_) => solver.trail().level() <= cnf.num_vars,
        Err(_) => false,
    }
}
