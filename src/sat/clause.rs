use super::assignment::Assignment;
use super::lit::Lit;

/// A disjunction of literals. An empty clause is falsified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub lits: Vec<Lit>,
}

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Self {
        Self { lits }
    }

    /// Builds a clause from signed 1-based integers, skipping any `0`.
    pub(crate) fn from_dimacs(lits: &[i32]) -> Self {
        Self::new(lits.iter().filter_map(|l| Lit::from_dimacs(*l)).collect())
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// The forced literal if this is a unit clause.
    pub fn unit_lit(&self) -> Option<Lit> {
        match self.lits.as_slice() {
            [lit] => Some(*lit),
            _ => None,
        }
    }

    pub fn contains(&self, lit: &Lit) -> bool {
        self.lits.contains(lit)
    }

    /// Drops every occurrence of `lit`, returning whether anything was removed.
    pub(crate) fn remove_lit(&mut self, lit: &Lit) -> bool {
        let before = self.lits.len();
        self.lits.retain(|l| l != lit);
        self.lits.len() != before
    }

    /// Collapses repeated literals, keeping the first occurrence of each.
    pub(crate) fn dedup(&mut self) {
        let mut seen = Vec::with_capacity(self.lits.len());
        self.lits.retain(|lit| {
            if seen.contains(lit) {
                false
            } else {
                seen.push(*lit);
                true
            }
        });
    }

    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.lits
            .iter()
            .any(|lit| assignment.get_assignment(lit) == Some(true))
    }
}
