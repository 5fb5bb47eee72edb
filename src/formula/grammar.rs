use log::trace;
use thiserror::Error;

use super::token::{tokenize, TokenKind};
use crate::error::{FormulaError, Result};

/// A single broken grammar rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("first term '{0}' is not an atom or unary operator")]
    BadFirstTerm(String),
    #[error("atom '{atom}' after atom '{prev}'")]
    AtomAfterAtom { atom: String, prev: String },
    #[error("binary operator '{op}' after operator '{prev}'")]
    BinaryAfterOperator { op: String, prev: String },
    #[error("unary operator '{op}' after atom '{prev}'")]
    UnaryAfterAtom { op: String, prev: String },
    #[error("unknown word '{0}'")]
    UnknownWord(String),
    #[error("parenthesis '{0}' is not attached to an atom")]
    DetachedParen(String),
    #[error("formula does not end in an atom")]
    NoTrailingAtom,
    #[error("more left parentheses ({left}) than right ({right})")]
    MoreLeftParens { left: usize, right: usize },
    #[error("more right parentheses ({right}) than left ({left})")]
    MoreRightParens { left: usize, right: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    pub diagnostics: Vec<Violation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    Atom,
    Operator,
}

/// Checks the token stream with a single look-behind on the previous term.
///
/// All rules are evaluated; the verdict is valid only when none fired.
/// Parentheses are checked by global count, not by nesting.
pub fn validate(text: &str) -> Result<Validity> {
    if text.trim().is_empty() {
        return Err(FormulaError::Empty);
    }

    let mut diagnostics = Vec::new();
    let mut prev: Option<(Term, &str)> = None;
    let mut left = 0usize;
    let mut right = 0usize;

    for token in tokenize(text) {
        left += token.open;
        right += token.close;

        match token.kind {
            TokenKind::Atom(_) => {
                if let Some((Term::Atom, p)) = prev {
                    diagnostics.push(Violation::AtomAfterAtom {
                        atom: token.core.to_owned(),
                        prev: p.to_owned(),
                    });
                }
                prev = Some((Term::Atom, token.core));
            }
            TokenKind::Unary(op) => {
                if let Some((Term::Atom, p)) = prev {
                    diagnostics.push(Violation::UnaryAfterAtom {
                        op: op.to_owned(),
                        prev: p.to_owned(),
                    });
                }
                prev = Some((Term::Operator, op));
            }
            TokenKind::Binary(op) => match prev {
                None => {
                    diagnostics.push(Violation::BadFirstTerm(op.to_owned()));
                    prev = Some((Term::Operator, op));
                }
                Some((Term::Operator, p)) => {
                    diagnostics.push(Violation::BinaryAfterOperator {
                        op: op.to_owned(),
                        prev: p.to_owned(),
                    });
                    prev = Some((Term::Operator, op));
                }
                Some((Term::Atom, _)) => prev = Some((Term::Operator, op)),
            },
            TokenKind::Unknown(word) => {
                if prev.is_none() {
                    diagnostics.push(Violation::BadFirstTerm(word.to_owned()));
                    prev = Some((Term::Operator, word));
                }
                diagnostics.push(Violation::UnknownWord(word.to_owned()));
            }
            TokenKind::Paren => {
                diagnostics.push(Violation::DetachedParen(token.text.to_owned()));
            }
        }
    }

    if !matches!(prev, Some((Term::Atom, _))) {
        diagnostics.push(Violation::NoTrailingAtom);
    }
    if left > right {
        diagnostics.push(Violation::MoreLeftParens { left, right });
    }
    if right > left {
        diagnostics.push(Violation::MoreRightParens { left, right });
    }

    trace!("validated '{}': {} violation(s)", text, diagnostics.len());
    Ok(Validity {
        valid: diagnostics.is_empty(),
        diagnostics,
    })
}
