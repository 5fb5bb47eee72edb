use thiserror::Error;

use crate::cnf::extract::CnfViolation;
use crate::formula::grammar::Violation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,

    #[error("formula is syntactically invalid: {}", join(.0))]
    MalformedSyntax(Vec<Violation>),

    #[error("formula is not propositional, disallowed words: {}", .words.join(", "))]
    NotPropositional { words: Vec<String> },

    #[error("formula is not in conjunctive normal form: {}", join(.0))]
    NotCnf(Vec<CnfViolation>),

    #[error("{atoms} atoms exceed the enumeration limit of {limit}")]
    CapacityExceeded { atoms: usize, limit: usize },

    #[error("invalid clause text: {0}")]
    ClauseText(String),
}

pub type Result<T> = std::result::Result<T, FormulaError>;

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
