use std::fmt;

use super::assignment::Assignment;
use super::formula::{CnfFormula, Formula, PropagationOutcome};

/// Result of a complete search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A satisfying assignment. Unassigned variables are don't-cares.
    Found(Assignment),
    /// No assignment satisfies the formula.
    Exhausted,
}

impl SearchOutcome {
    pub const SAT_STATUS: i32 = 10;
    pub const UNSAT_STATUS: i32 = 20;

    pub fn is_sat(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SearchOutcome::Found(assignment) => Some(assignment),
            SearchOutcome::Exhausted => None,
        }
    }

    /// Status code for the caller: 10 when a witness exists, 20 when unsatisfiable.
    pub fn status(&self) -> i32 {
        match self {
            SearchOutcome::Found(_) => Self::SAT_STATUS,
            SearchOutcome::Exhausted => Self::UNSAT_STATUS,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(assignment) => write!(f, "{}", assignment.witness_line()),
            SearchOutcome::Exhausted => write!(f, "UNSAT"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Trial assignments made by branching.
    pub decisions: usize,
    /// Variables forced by unit clauses.
    pub propagations: usize,
    /// Branches that ended with a falsified clause.
    pub conflicts: usize,
}

/// Recursive DPLL search. Every branch owns its own copy of the formula.
#[derive(Debug, Clone)]
pub struct Solver {
    cnf: CnfFormula,
    stats: SearchStats,
}

impl Solver {
    pub fn new(cnf: CnfFormula) -> Self {
        Self {
            cnf,
            stats: SearchStats::default(),
        }
    }

    pub fn cnf(&self) -> &CnfFormula {
        &self.cnf
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, mut formula: Formula) -> SearchOutcome {
        let assigned = formula.assignment().num_assigned();
        let outcome = formula.propagate();
        self.stats.propagations += formula.assignment().num_assigned() - assigned;
        match outcome {
            PropagationOutcome::Satisfied => return SearchOutcome::Found(formula.into_assignment()),
            PropagationOutcome::Unsatisfied => {
                log::debug!("Unit propagation hit a conflict. Backtracking.");
                self.stats.conflicts += 1;
                return SearchOutcome::Exhausted;
            }
            PropagationOutcome::Open => {}
        }

        let var = formula
            .pick_branch_var()
            .expect("Something has gone terribly wrong - open formula with every variable assigned");
        let first = formula.preferred_value(var);
        for value in [first, !first] {
            let mut child = formula.clone();
            self.stats.decisions += 1;
            log::debug!(
                "Branching on {} = {value} with {} clauses left",
                var.to_dimacs(),
                child.clauses().len()
            );
            child.assign(var, value);
            match child.apply(var) {
                PropagationOutcome::Satisfied => {
                    return SearchOutcome::Found(child.into_assignment())
                }
                PropagationOutcome::Unsatisfied => {
                    log::debug!("{} = {value} falsifies a clause", var.to_dimacs());
                    self.stats.conflicts += 1;
                }
                PropagationOutcome::Open => {
                    if let found @ SearchOutcome::Found(_) = self.search(child) {
                        return found;
                    }
                }
            }
        }
        SearchOutcome::Exhausted
    }

    /// Searches from scratch, stopping at the first satisfying assignment.
    pub fn run(&mut self) -> SearchOutcome {
        self.stats = SearchStats::default();
        let formula = Formula::new(&self.cnf);
        let outcome = self.search(formula);
        log::info!(
            "Search finished ({}): {} decisions, {} propagations, {} conflicts",
            if outcome.is_sat() { "SAT" } else { "UNSAT" },
            self.stats.decisions,
            self.stats.propagations,
            self.stats.conflicts
        );
        outcome
    }
}
