//! Recursive DPLL search for CNF satisfiability.
//!
//! The solver owns a copy of the formula per branch, propagates unit clauses to a
//! fixpoint, then splits on the most frequent unassigned variable, trying its
//! majority polarity first. The first satisfying assignment found ends the search.

pub mod dimacs;
pub mod error;
pub mod sat;

pub use error::{Error, Result};
pub use sat::dpll;
pub use sat::formula::CnfFormula;
pub use sat::solver::{SearchOutcome, SearchStats, Solver};
