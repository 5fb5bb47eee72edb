use log::debug;
use thiserror::Error;

use super::cnf::{Clause, ClauseSet, Literal};
use crate::error::{FormulaError, Result};
use crate::formula::token::{tokenize, trim_outer_parens, Token, TokenKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CnfViolation {
    #[error("'{0}' is not allowed in CNF")]
    ForbiddenConnective(String),
    #[error("'or' between clauses")]
    OrBetweenClauses,
    #[error("'{0}' inside a clause")]
    ConnectiveInsideClause(String),
    #[error("'not' must be followed by a single atom, found '{0}'")]
    NotWithoutAtom(String),
    #[error("formula ends with 'not'")]
    TrailingNot,
    #[error("unexpected word '{0}'")]
    UnexpectedWord(String),
    #[error("clauses must be joined by exactly one 'and'")]
    MissingAnd,
    #[error("'and' without a clause on both sides")]
    MisplacedAnd,
    #[error("parenthesized span without literals")]
    EmptyClauseSpan,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("formula has no clauses")]
    NoClauses,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfAnalysis {
    pub is_cnf: bool,
    pub clauses: Option<ClauseSet>,
    pub diagnostics: Vec<CnfViolation>,
}

impl CnfAnalysis {
    pub fn into_result(self) -> Result<ClauseSet> {
        match self.clauses {
            Some(set) if self.is_cnf => Ok(set),
            _ => Err(FormulaError::NotCnf(self.diagnostics)),
        }
    }
}

#[derive(Default)]
struct Extractor {
    depth: usize,
    span: Vec<Literal>,
    clauses: Vec<Clause>,
    conjuncts: usize,
    ands: usize,
    pending_not: bool,
    diagnostics: Vec<CnfViolation>,
}

impl Extractor {
    fn begin_conjunct(&mut self) {
        if (self.conjuncts > 0 && self.ands != 1) || (self.conjuncts == 0 && self.ands > 0) {
            self.diagnostics.push(if self.ands == 0 {
                CnfViolation::MissingAnd
            } else {
                CnfViolation::MisplacedAnd
            });
        }
        self.conjuncts += 1;
        self.ands = 0;
    }

    fn literal(&mut self, lit: Literal) {
        if self.depth > 0 {
            self.span.push(lit);
        } else {
            self.begin_conjunct();
            self.clauses.push(Clause::unit(lit));
        }
    }

    fn open(&mut self) {
        if self.depth == 0 {
            self.begin_conjunct();
            self.span.clear();
        }
        self.depth += 1;
    }

    fn close(&mut self) {
        if self.depth == 0 {
            self.diagnostics.push(CnfViolation::UnbalancedParens);
            return;
        }
        self.depth -= 1;
        if self.depth == 0 {
            let clause = Clause::new(self.span.drain(..));
            if clause.is_empty() {
                self.diagnostics.push(CnfViolation::EmptyClauseSpan);
            } else {
                self.clauses.push(clause);
            }
        }
    }

    fn token(&mut self, token: &Token<'_>) {
        if self.pending_not {
            self.pending_not = false;
            if let (TokenKind::Atom(atom), 0) = (token.kind, token.open) {
                self.literal(Literal::negative(atom));
                (0..token.close).for_each(|_| self.close());
                return;
            }
            self.diagnostics
                .push(CnfViolation::NotWithoutAtom(token.text.to_owned()));
        }

        (0..token.open).for_each(|_| self.open());

        match token.kind {
            TokenKind::Atom(atom) => self.literal(Literal::positive(atom)),
            TokenKind::Unary("not") => self.pending_not = true,
            TokenKind::Binary("and") => {
                if self.depth > 0 {
                    self.diagnostics
                        .push(CnfViolation::ConnectiveInsideClause("and".to_owned()));
                } else {
                    self.ands += 1;
                }
            }
            TokenKind::Binary("or") => {
                if self.depth == 0 {
                    self.diagnostics.push(CnfViolation::OrBetweenClauses);
                }
            }
            TokenKind::Binary(word @ ("implies" | "equivalent")) => {
                self.diagnostics
                    .push(CnfViolation::ForbiddenConnective(word.to_owned()));
                if self.depth > 0 {
                    self.diagnostics
                        .push(CnfViolation::ConnectiveInsideClause(word.to_owned()));
                }
            }
            TokenKind::Unary(word) | TokenKind::Binary(word) | TokenKind::Unknown(word) => {
                self.diagnostics
                    .push(CnfViolation::UnexpectedWord(word.to_owned()));
            }
            TokenKind::Paren => self
                .diagnostics
                .push(CnfViolation::UnexpectedWord(token.text.to_owned())),
        }

        (0..token.close).for_each(|_| self.close());
    }

    fn finish(mut self) -> CnfAnalysis {
        if self.pending_not {
            self.diagnostics.push(CnfViolation::TrailingNot);
        } else if self.ands > 0 {
            self.diagnostics.push(CnfViolation::MisplacedAnd);
        }
        if self.depth > 0 {
            self.diagnostics.push(CnfViolation::UnbalancedParens);
        }
        if self.clauses.is_empty() && self.diagnostics.is_empty() {
            self.diagnostics.push(CnfViolation::NoClauses);
        }

        let is_cnf = self.diagnostics.is_empty();
        CnfAnalysis {
            is_cnf,
            clauses: is_cnf.then(|| ClauseSet::new(self.clauses)),
            diagnostics: self.diagnostics,
        }
    }
}

/// Recognizes the parenthesized CNF surface syntax and extracts its clauses
/// in one pass.
///
/// Each maximal parenthesized span is one clause; a bare literal outside any
/// span is a unit clause. Conjuncts are joined by `and`, literals inside a span
/// by `or`. Every violation is reported.
pub fn analyze(text: &str) -> CnfAnalysis {
    let trimmed = trim_outer_parens(text);
    let mut ex = Extractor::default();
    for token in tokenize(trimmed) {
        ex.token(&token);
    }
    let analysis = ex.finish();
    debug!(
        "cnf analysis of '{}': is_cnf={} clauses={} violations={}",
        trimmed,
        analysis.is_cnf,
        analysis.clauses.as_ref().map_or(0, ClauseSet::len),
        analysis.diagnostics.len()
    );
    analysis
}
