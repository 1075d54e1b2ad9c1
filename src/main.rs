use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::exit;

use clap::Parser;

use dpll::dimacs::parse_formula_from_dimacs;
use dpll::sat::report::report;
use dpll::{CnfFormula, Error, SearchOutcome, Solver};

mod config;

use config::Config;

fn main() {
    env_logger::init();
    let config = Config::parse();
    let status = run(&config).unwrap_or_else(|err| {
        eprintln!("{err}");
        exit(1)
    });
    exit(status);
}

fn verify(cnf: &CnfFormula, outcome: &SearchOutcome) -> dpll::Result<()> {
    if let Some(assignment) = outcome.assignment() {
        if let Some(clause) = cnf.clauses.iter().position(|c| !c.is_satisfied(assignment)) {
            return Err(Error::WitnessRejected { clause });
        }
        log::info!("Witness checked against {} clauses", cnf.clauses.len());
    }
    Ok(())
}

fn run(config: &Config) -> dpll::Result<i32> {
    let cnf = match &config.input {
        Some(path) => {
            log::info!("Reading {}", path.display());
            parse_formula_from_dimacs(File::open(path)?, config.strict)?
        }
        None => parse_formula_from_dimacs(io::stdin().lock(), config.strict)?,
    };
    log::info!(
        "Solving {} clauses over {} variables",
        cnf.clauses.len(),
        cnf.num_vars()
    );

    let mut solver = Solver::new(cnf);
    let outcome = solver.run();
    if config.verify {
        verify(solver.cnf(), &outcome)?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if config.header && outcome.is_sat() {
        writeln!(out, "SATISFIABLE")?;
    }
    let status = report(&mut out, &outcome)?;
    out.flush()?;
    Ok(status)
}
