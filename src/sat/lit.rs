use std::fmt;

/// A variable, identified by its 0-based index. Externally it is numbered `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based external number of this variable
    pub fn to_dimacs(&self) -> i32 {
        self.0 as i32 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    negated: bool,
    var: Var,
}

impl Lit {
    pub fn pos(var: Var) -> Self {
        Self {
            var,
            negated: false,
        }
    }

    pub fn neg(var: Var) -> Self {
        Self { var, negated: true }
    }

    /// The literal that is true when `var` takes `value`.
    pub fn with_value(var: Var, value: bool) -> Self {
        if value {
            Self::pos(var)
        } else {
            Self::neg(var)
        }
    }

    /// Converts a signed 1-based integer. Returns `None` for `0` and for
    /// `i32::MIN`, whose variable has no positive literal.
    pub fn from_dimacs(lit: i32) -> Option<Self> {
        if lit == 0 || lit == i32::MIN {
            return None;
        }
        let var = Var::new(lit.unsigned_abs() as usize - 1);
        Some(Self::with_value(var, lit > 0))
    }

    pub fn to_dimacs(&self) -> i32 {
        if self.negated {
            -self.var.to_dimacs()
        } else {
            self.var.to_dimacs()
        }
    }

    pub fn get_var(&self) -> Var {
        self.var
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The truth value this literal asserts for its variable.
    pub fn value(&self) -> bool {
        !self.negated
    }

    pub fn negate(&self) -> Self {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

#[cfg(test)]
mod lit_test {
    use super::{Lit, Var};

    #[test]
    fn dimacs_numbering_is_one_based() {
        let lit = Lit::from_dimacs(-3).unwrap();
        assert_eq!(lit.get_var(), Var::new(2));
        assert!(lit.is_negated());
        assert_eq!(lit.to_dimacs(), -3);
        assert_eq!(lit.negate().to_dimacs(), 3);
    }

    #[test]
    fn zero_is_not_a_literal() {
        assert_eq!(Lit::from_dimacs(0), None);
    }

    #[test]
    fn min_int_is_not_a_literal() {
        assert_eq!(Lit::from_dimacs(i32::MIN), None);
        assert_eq!(Lit::from_dimacs(i32::MAX).unwrap().to_dimacs(), i32::MAX);
    }
}
