use std::io::{self, Write};

use super::solver::SearchOutcome;

/// Writes the witness line (`<lits...> 0`) or `UNSAT`, and returns the status code.
pub fn report<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<i32> {
    writeln!(out, "{outcome}")?;
    Ok(outcome.status())
}
