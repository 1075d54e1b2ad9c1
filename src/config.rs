use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "dpll",
    version,
    about = "Determines whether a DIMACS CNF formula is satisfiable"
)]
pub struct Config {
    /// The DIMACS CNF file to solve. Reads stdin when absent.
    pub input: Option<PathBuf>,

    /// Fail if the number of clauses disagrees with the `p cnf` header.
    #[arg(long)]
    pub strict: bool,

    /// Check the witness against the input clauses before printing it.
    #[arg(long)]
    pub verify: bool,

    /// Print a `SATISFIABLE` line before the witness.
    #[arg(long)]
    pub header: bool,
}
