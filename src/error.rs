use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// A literal `0` appeared inside a clause.
    ZeroLiteral { clause: usize },
    /// A literal names a variable outside `1..=num_vars`.
    VarOutOfRange { lit: i32, num_vars: usize },
    /// Malformed DIMACS text.
    Parse { line: usize, msg: String },
    /// Strict mode: the body disagrees with the `p cnf` header.
    HeaderMismatch { declared: usize, found: usize },
    /// A reported witness leaves some input clause unsatisfied.
    WitnessRejected { clause: usize },
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroLiteral { clause } => {
                write!(f, "clause {clause} contains the literal 0")
            }
            Error::VarOutOfRange { lit, num_vars } => {
                write!(f, "literal {lit} is out of range for {num_vars} variables")
            }
            Error::Parse { line, msg } => write!(f, "parse error on line {line}: {msg}"),
            Error::HeaderMismatch { declared, found } => write!(
                f,
                "header declares {declared} clauses but {found} were read"
            ),
            Error::WitnessRejected { clause } => {
                write!(f, "witness does not satisfy clause {clause}")
            }
            Error::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
