pub mod assignment;
pub mod clause;
pub mod formula;
pub mod lit;
pub mod report;
pub mod solver;

use std::io::Write;

use crate::error::Result;
use formula::CnfFormula;
use solver::Solver;

/// Decides `clauses` over `num_vars` variables, writes the witness line or
/// `UNSAT` to `out`, and returns the status code (10 SAT, 20 UNSAT).
pub fn dpll<C: AsRef<[i32]>, W: Write>(num_vars: usize, clauses: &[C], out: &mut W) -> Result<i32> {
    let cnf = CnfFormula::from_dimacs(num_vars, clauses)?;
    let outcome = Solver::new(cnf).run();
    Ok(report::report(out, &outcome)?)
}
