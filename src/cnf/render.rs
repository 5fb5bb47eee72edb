use std::fmt;
use std::str::FromStr;

use super::cnf::{Atom, Clause, ClauseSet, Literal};
use crate::error::FormulaError;

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, lit) in self.literals().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", lit)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

impl FromStr for Literal {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negated, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut chars = rest.chars();
        let atom = match (chars.next(), chars.next()) {
            (Some(c), None) => Atom::new(c),
            _ => None,
        }
        .ok_or_else(|| FormulaError::ClauseText(format!("invalid literal '{}'", s)))?;
        Ok(Literal { atom, negated })
    }
}

/// Parses the output of `ClauseSet`'s `Display`. Whitespace is ignored.
impl FromStr for ClauseSet {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        let mut set = ClauseSet::default();
        let mut rest = compact.as_str();
        while !rest.is_empty() {
            let body = rest
                .strip_prefix('{')
                .ok_or_else(|| FormulaError::ClauseText(format!("expected '{{' at '{}'", rest)))?;
            let end = body
                .find('}')
                .ok_or_else(|| FormulaError::ClauseText("missing '}'".to_owned()))?;
            let lits = body[..end]
                .split(',')
                .filter(|t| !t.is_empty())
                .map(Literal::from_str)
                .collect::<Result<Vec<_>, _>>()?;
            set.add_clause(Clause::new(lits));

            rest = &body[end + 1..];
            if let Some(next) = rest.strip_prefix(',') {
                if next.is_empty() {
                    return Err(FormulaError::ClauseText("trailing ','".to_owned()));
                }
                rest = next;
            } else if !rest.is_empty() {
                return Err(FormulaError::ClauseText(format!("expected ',' at '{}'", rest)));
            }
        }
        Ok(set)
    }
}
