use std::cmp::Reverse;

use super::assignment::Assignment;
use super::clause::Clause;
use super::lit::{Lit, Var};
use crate::error::{Error, Result};

/// State of a formula after assigning one or more variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// Every clause is satisfied.
    Satisfied,
    /// Some clause lost all of its literals.
    Unsatisfied,
    /// Clauses remain and none is empty.
    Open,
}

impl PropagationOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PropagationOutcome::Open)
    }
}

/// A validated CNF formula over `num_vars` variables, as handed to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    num_vars: usize,
    pub clauses: Vec<Clause>,
}

impl CnfFormula {
    pub fn new(num_vars: usize, clauses: Vec<Clause>) -> Result<Self> {
        for clause in clauses.iter() {
            if let Some(lit) = clause.lits.iter().find(|l| l.get_var().index() >= num_vars) {
                return Err(Error::VarOutOfRange {
                    lit: lit.to_dimacs(),
                    num_vars,
                });
            }
        }
        Ok(Self { num_vars, clauses })
    }

    /// Builds a formula from clauses of signed 1-based integers.
    pub fn from_dimacs<C: AsRef<[i32]>>(num_vars: usize, clauses: &[C]) -> Result<Self> {
        let mut cnf_clauses = Vec::with_capacity(clauses.len());
        for (idx, clause) in clauses.iter().enumerate() {
            let clause = clause.as_ref();
            if clause.contains(&0) {
                return Err(Error::ZeroLiteral { clause: idx });
            }
            if clause.contains(&i32::MIN) {
                return Err(Error::VarOutOfRange {
                    lit: i32::MIN,
                    num_vars,
                });
            }
            cnf_clauses.push(Clause::from_dimacs(clause));
        }
        Self::new(num_vars, cnf_clauses)
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.is_satisfied(assignment))
    }
}

/// The search state owned by one branch: the residual clauses, the partial
/// assignment, and the branching bookkeeping.
///
/// `frequency[v]` counts the occurrences of `v` in the input clauses and becomes
/// `None` once `v` is assigned, so an assigned variable is never branched on again.
/// `polarity[v]` is fixed at construction: +1 per positive occurrence, -1 per
/// negative one. Both count repeated literals before they are collapsed.
#[derive(Debug, Clone)]
pub struct Formula {
    assignment: Assignment,
    clauses: Vec<Clause>,
    frequency: Vec<Option<usize>>,
    polarity: Vec<i64>,
}

impl Formula {
    pub fn new(cnf: &CnfFormula) -> Self {
        let num_vars = cnf.num_vars();
        let mut frequency = vec![Some(0); num_vars];
        let mut polarity = vec![0; num_vars];
        let mut clauses = Vec::with_capacity(cnf.clauses.len());
        for clause in cnf.clauses.iter() {
            for lit in clause.lits.iter() {
                let idx = lit.get_var().index();
                if let Some(count) = frequency[idx].as_mut() {
                    *count += 1;
                }
                polarity[idx] += if lit.is_negated() { -1 } else { 1 };
            }
            let mut clause = clause.clone();
            clause.dedup();
            clauses.push(clause);
        }
        Self {
            assignment: Assignment::new(num_vars),
            clauses,
            frequency,
            polarity,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.assignment.num_vars()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }

    pub fn frequency(&self, var: Var) -> Option<usize> {
        self.frequency[var.index()]
    }

    pub fn polarity(&self, var: Var) -> i64 {
        self.polarity[var.index()]
    }

    /// Fixes `var` to `value` and retires it from branching. Does not touch the clauses.
    pub fn assign(&mut self, var: Var, value: bool) {
        self.assignment.assign(var, value);
        self.frequency[var.index()] = None;
    }

    /// Eliminates `var` from the clauses using its assigned value: clauses it
    /// satisfies are dropped and its falsified literal is removed from the rest.
    ///
    /// Panics if `var` is unassigned.
    pub fn apply(&mut self, var: Var) -> PropagationOutcome {
        let value = self
            .assignment
            .get(var)
            .expect("Something has gone terribly wrong - eliminating an unassigned variable");
        let satisfied = Lit::with_value(var, value);
        let falsified = satisfied.negate();

        let mut idx = 0;
        while idx < self.clauses.len() {
            if self.clauses[idx].contains(&satisfied) {
                self.clauses.remove(idx);
                if self.clauses.is_empty() {
                    return PropagationOutcome::Satisfied;
                }
                continue;
            }
            if self.clauses[idx].remove_lit(&falsified) && self.clauses[idx].is_empty() {
                log::trace!("Clause {idx} falsified by {falsified}");
                return PropagationOutcome::Unsatisfied;
            }
            idx += 1;
        }
        PropagationOutcome::Open
    }

    /// Assigns unit clauses until none remain or the formula is decided.
    pub fn propagate(&mut self) -> PropagationOutcome {
        loop {
            if self.clauses.is_empty() {
                return PropagationOutcome::Satisfied;
            }
            let mut unit = None;
            for clause in self.clauses.iter() {
                if clause.is_empty() {
                    return PropagationOutcome::Unsatisfied;
                }
                if let Some(lit) = clause.unit_lit() {
                    unit = Some(lit);
                    break;
                }
            }
            let Some(lit) = unit else {
                return PropagationOutcome::Open;
            };
            log::trace!("Propagating unit {lit}");
            self.assign(lit.get_var(), lit.value());
            let outcome = self.apply(lit.get_var());
            if outcome.is_terminal() {
                return outcome;
            }
        }
    }

    /// The unassigned variable with the most input occurrences. Ties go to
    /// the lowest index.
    pub fn pick_branch_var(&self) -> Option<Var> {
        self.frequency
            .iter()
            .enumerate()
            .filter_map(|(idx, count)| count.map(|count| (idx, count)))
            .min_by_key(|&(_, count)| Reverse(count))
            .map(|(idx, _)| Var::new(idx))
    }

    /// The value to try first for `var`: true when it occurs more often positively.
    pub fn preferred_value(&self, var: Var) -> bool {
        self.polarity(var) > 0
    }
}
