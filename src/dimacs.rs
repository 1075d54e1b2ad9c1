use std::io::Read;

use crate::error::{Error, Result};
use crate::sat::clause::Clause;
use crate::sat::formula::CnfFormula;
use crate::sat::lit::Lit;

struct Header {
    num_vars: usize,
    num_clauses: usize,
}

fn parse_header(line: &str, line_no: usize) -> Result<Header> {
    let parse_error = |msg: &str| Error::Parse {
        line: line_no,
        msg: msg.to_string(),
    };
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("p") || tokens.next() != Some("cnf") {
        return Err(parse_error("expected `p cnf <vars> <clauses>`"));
    }
    let mut count = |what: &str| -> Result<usize> {
        tokens
            .next()
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or_else(|| parse_error(&format!("missing or invalid {what} count")))
    };
    let num_vars = count("variable")?;
    let num_clauses = count("clause")?;
    if tokens.next().is_some() {
        return Err(parse_error("trailing tokens after header"));
    }
    Ok(Header {
        num_vars,
        num_clauses,
    })
}

/// Parses DIMACS CNF text. Without a `p cnf` header the variable count is the
/// largest variable mentioned. With `strict`, the clause count must match the header.
pub fn parse_formula_from_dimacs_str(lines: &str, strict: bool) -> Result<CnfFormula> {
    let mut header: Option<Header> = None;
    let mut clauses = Vec::new();
    let mut collector = Vec::new();
    let mut max_var = 0;

    for (idx, line) in lines.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('c') {
            continue;
        }
        // SATLIB benchmarks end with a `%` line followed by junk
        if trimmed.starts_with('%') {
            break;
        }
        if trimmed.starts_with('p') {
            if header.is_some() {
                return Err(Error::Parse {
                    line: line_no,
                    msg: "duplicate header".to_string(),
                });
            }
            header = Some(parse_header(trimmed, line_no)?);
            continue;
        }

        for token in trimmed.split_whitespace() {
            let num = token.parse::<i32>().map_err(|_| Error::Parse {
                line: line_no,
                msg: format!("unexpected token `{token}`"),
            })?;
            if num == i32::MIN {
                return Err(Error::Parse {
                    line: line_no,
                    msg: format!("literal `{token}` is out of range"),
                });
            }
            match Lit::from_dimacs(num) {
                // 0 ends the clause
                None => clauses.push(Clause::new(std::mem::take(&mut collector))),
                Some(lit) => {
                    max_var = max_var.max(lit.get_var().index() + 1);
                    collector.push(lit);
                }
            }
        }
    }

    if !collector.is_empty() {
        return Err(Error::Parse {
            line: lines.lines().count(),
            msg: "last clause is not terminated by 0".to_string(),
        });
    }

    let num_vars = match header {
        Some(header) => {
            if strict && header.num_clauses != clauses.len() {
                return Err(Error::HeaderMismatch {
                    declared: header.num_clauses,
                    found: clauses.len(),
                });
            }
            header.num_vars
        }
        None => max_var,
    };
    log::debug!(
        "Parsed {} clauses over {num_vars} variables",
        clauses.len()
    );
    CnfFormula::new(num_vars, clauses)
}

pub fn parse_formula_from_dimacs<R: Read>(mut reader: R, strict: bool) -> Result<CnfFormula> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_formula_from_dimacs_str(&text, strict)
}

#[cfg(test)]
mod dimacs_test {
    use super::{parse_formula_from_dimacs, parse_formula_from_dimacs_str};
    use crate::error::Error;
    use crate::sat::clause::Clause;

    #[test]
    fn simple_dimacs() {
        let str = "
          c  simple_v3_c2.cnf
          c
          p cnf 3 2
          1 -3 0
          2 3 -1 0
        ";
        let formula = parse_formula_from_dimacs_str(str, true).unwrap();
        assert_eq!(formula.num_vars(), 3);
        assert_eq!(
            formula.clauses,
            vec![Clause::from_dimacs(&[1, -3]), Clause::from_dimacs(&[2, 3, -1])]
        );
    }

    #[test]
    fn clauses_may_span_lines() {
        let str = "p cnf 4 2\n1 2\n-3 0 4\n0\n";
        let formula = parse_formula_from_dimacs_str(str, true).unwrap();
        assert_eq!(
            formula.clauses,
            vec![Clause::from_dimacs(&[1, 2, -3]), Clause::from_dimacs(&[4])]
        );
    }

    #[test]
    fn header_is_optional() {
        let formula = parse_formula_from_dimacs_str("1 -5 0\n2 0\n", true).unwrap();
        assert_eq!(formula.num_vars(), 5);
    }

    #[test]
    fn header_var_count_wins() {
        let formula = parse_formula_from_dimacs_str("p cnf 7 1\n1 0\n", false).unwrap();
        assert_eq!(formula.num_vars(), 7);
    }

    #[test]
    fn stops_at_percent_line() {
        let formula = parse_formula_from_dimacs_str("p cnf 2 1\n1 2 0\n%\n0\n", true).unwrap();
        assert_eq!(formula.clauses.len(), 1);
    }

    #[test]
    fn strict_rejects_clause_count_mismatch() {
        let str = "p cnf 2 3\n1 0\n2 0\n";
        assert!(matches!(
            parse_formula_from_dimacs_str(str, true),
            Err(Error::HeaderMismatch {
                declared: 3,
                found: 2
            })
        ));
        assert!(parse_formula_from_dimacs_str(str, false).is_ok());
    }

    #[test]
    fn rejects_var_beyond_header() {
        assert!(matches!(
            parse_formula_from_dimacs_str("p cnf 2 1\n1 3 0\n", false),
            Err(Error::VarOutOfRange { lit: 3, num_vars: 2 })
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_formula_from_dimacs_str("p cnf 2 1\n1 x 0\n", false),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_formula_from_dimacs_str("p dnf 2 1\n", false),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_formula_from_dimacs_str("p cnf 2 1\n1 2\n", false),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn rejects_min_int_literal() {
        assert!(matches!(
            parse_formula_from_dimacs_str("p cnf 2 1\n1 -2147483648 0\n", false),
            Err(Error::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn reads_from_reader() {
        let formula = parse_formula_from_dimacs("p cnf 1 1\n-1 0\n".as_bytes(), true).unwrap();
        assert_eq!(formula.clauses, vec![Clause::from_dimacs(&[-1])]);
    }
}
