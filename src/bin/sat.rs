use clap::Parser;
use sat::{log::targets, Config, Formula, LearnedClauses, Literal, Solution, Solver};
use std::{path::PathBuf, process::exit, time::Instant};

/// Decides satisfiability of a DIMACS CNF formula.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Input file; standard input when omitted
    file: Option<PathBuf>,

    /// Candidate improvements after which the branching scan stops
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    decision_cap: u64,

    /// What to do with learned clauses: `record` or `watch`
    #[arg(long, default_value = "record")]
    learned: LearnedClauses,

    /// Do not print the model
    #[arg(long)]
    no_model: bool,

    /// Print search statistics
    #[arg(long)]
    stats: bool,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let start = Instant::now();
    let formula = match &args.file {
        Some(path) => Formula::read_file(path),
        None => Formula::read(std::io::stdin().lock()),
    };
    let formula = match formula {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("c Error reading input: {}", e);
            exit(e.exit_code());
        }
    };

    let config = Config {
        decision_cap: args.decision_cap as usize,
        learned_clauses: args.learned,
    };
    log::info!(target: targets::SOLVE, "Solving with {:?}", config);

    let mut solver = Solver::with_config(formula, config);
    let result = solver.run();

    if args.stats {
        let stats = solver.stats();
        println!("c decisions {}", stats.decisions);
        println!("c conflicts {}", stats.conflicts);
        println!("c propagations {}", stats.propagations);
        println!("c learned {}", stats.learned);
    }

    match result {
        Ok(solution) => {
            let code = print_solution(&solution, !args.no_model);
            println!("c solved in {}ms", start.elapsed().as_millis());
            exit(code)
        }
        Err(e) => {
            println!("c {}", e);
            exit(e.exit_code())
        }
    }
}

fn print_solution(solution: &Solution, show_model: bool) -> i32 {
    match solution {
        Solution::Unsat => {
            println!("s UNSATISFIABLE");
            10
        }
        Solution::Sat(model) => {
            println!("s SATISFIABLE");
            if show_model {
                print_model(model);
            }
            20
        }
    }
}

fn print_model(model: &[Literal]) {
    const PER_LINE: usize = 10;
    for chunk in model.chunks(PER_LINE) {
        let line = chunk
            .iter()
            .map(Literal::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("v {}", line);
    }
    println!("v 0");
}
