//! Text format for SPP instances.
//!
//! The OR-Library `sppnw` layout: a header line `rows sets`, then one line
//! per set reading `cost count r1 r2 .. r_count`, with 1-based row numbers.
//! Blank lines are ignored.
//!
//! ```text
//! 3 4
//! 1 1 1
//! 1 1 2
//! 1 1 3
//! 1 3 1 2 3
//! ```

use super::model::{SppProblem, DEFAULT_PENALTY_FACTOR};
use crate::error::{Error, Result};
use std::str::FromStr;

impl SppProblem {
    /// Parses an instance and applies `penalty_factor`.
    ///
    /// # Errors
    /// [`Error::Parse`] for malformed lines, [`Error::SetSizeMismatch`] and
    /// [`Error::SetCountMismatch`] when declared counts disagree with the
    /// data, plus every construction error of
    /// [`with_penalty_factor`](SppProblem::with_penalty_factor).
    pub fn parse_with_penalty_factor(text: &str, penalty_factor: f64) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (line, header) = lines.next().ok_or_else(|| Error::Parse {
            line: 1,
            message: "empty instance".into(),
        })?;
        let header: Vec<usize> = header
            .split_whitespace()
            .map(|t| parse_token(line, t, "header count"))
            .collect::<Result<_>>()?;
        let [rows, declared] = header[..] else {
            return Err(Error::Parse {
                line,
                message: format!("expected `rows sets`, got {} values", header.len()),
            });
        };

        let mut sets = Vec::with_capacity(declared);
        let mut costs = Vec::with_capacity(declared);
        for (line, text) in lines {
            let mut tokens = text.split_whitespace();
            let cost: f64 = parse_token(line, tokens.next().unwrap_or_default(), "cost")?;
            let count: usize = match tokens.next() {
                Some(t) => parse_token(line, t, "row count")?,
                None => {
                    return Err(Error::Parse {
                        line,
                        message: "missing row count".into(),
                    })
                }
            };
            let members = tokens
                .map(|t| {
                    let row: usize = parse_token(line, t, "row number")?;
                    row.checked_sub(1).ok_or_else(|| Error::Parse {
                        line,
                        message: "row numbers are 1-based".into(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            if members.len() != count {
                return Err(Error::SetSizeMismatch {
                    set: sets.len(),
                    declared: count,
                    found: members.len(),
                });
            }
            sets.push(members);
            costs.push(cost);
        }

        if sets.len() != declared {
            return Err(Error::SetCountMismatch {
                declared,
                found: sets.len(),
            });
        }

        SppProblem::with_penalty_factor(rows, sets, costs, penalty_factor)
    }
}

impl FromStr for SppProblem {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse_with_penalty_factor(text, DEFAULT_PENALTY_FACTOR)
    }
}

fn parse_token<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {what} {token:?}"),
    })
}
