use itertools::Itertools;

use super::lit::{Lit, Var};

/// Partial assignment of the variables `0..num_vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    pub fn new(num_vars: usize) -> Self {
        Self {
            values: vec![None; num_vars],
        }
    }

    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values[var.index()]
    }

    /// Value of `lit` under this assignment, `None` while its variable is unassigned.
    pub fn get_assignment(&self, lit: &Lit) -> Option<bool> {
        self.get(lit.get_var())
            .map(|value| if lit.is_negated() { !value } else { value })
    }

    pub fn assign(&mut self, var: Var, value: bool) {
        self.values[var.index()] = Some(value);
    }

    pub fn is_assigned(&self, var: Var) -> bool {
        self.values[var.index()].is_some()
    }

    pub fn num_assigned(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// One signed literal per variable in index order. Unassigned variables are
    /// don't-cares and are reported positive.
    pub fn witness(&self) -> Vec<i32> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let lit = Lit::with_value(Var::new(idx), value.unwrap_or(true));
                lit.to_dimacs()
            })
            .collect()
    }

    /// The witness as a single DIMACS-style line terminated by `0`.
    pub fn witness_line(&self) -> String {
        self.witness()
            .into_iter()
            .chain(std::iter::once(0))
            .join(" ")
    }
}
