pub mod grammar;
pub mod propositional;
pub mod token;

use std::cell::OnceCell;

use log::debug;

use crate::cnf::cnf::ClauseSet;
use crate::cnf::extract::{analyze, CnfAnalysis};
use crate::error::{FormulaError, Result};

/// Construction runs the grammar check and records whether the formula stays
/// inside the propositional fragment. CNF analysis is computed on first use and
/// cached.
#[derive(Debug, Clone)]
pub struct Formula {
    text: String,
    propositional: bool,
    cnf: OnceCell<CnfAnalysis>,
}

impl Formula {
    pub fn parse(text: &str) -> Result<Self> {
        let validity = grammar::validate(text)?;
        if !validity.valid {
            return Err(FormulaError::MalformedSyntax(validity.diagnostics));
        }
        let text = token::trim_outer_parens(text).to_owned();
        let propositional = propositional::is_propositional(&text);
        debug!("formula '{}' propositional={}", text, propositional);
        Ok(Self {
            text,
            propositional,
            cnf: OnceCell::new(),
        })
    }

    /// The input with redundant outer parentheses trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_propositional(&self) -> bool {
        self.propositional
    }

    pub fn require_propositional(&self) -> Result<()> {
        if self.propositional {
            Ok(())
        } else {
            Err(FormulaError::NotPropositional {
                words: propositional::disallowed_words(&self.text),
            })
        }
    }

    pub fn analyze_cnf(&self) -> Result<&CnfAnalysis> {
        self.require_propositional()?;
        Ok(self.cnf.get_or_init(|| analyze(&self.text)))
    }

    pub fn is_cnf(&self) -> bool {
        self.analyze_cnf().is_ok_and(|a| a.is_cnf)
    }

    /// The extracted clauses, or `NotCnf` with every violation.
    pub fn clause_set(&self) -> Result<&ClauseSet> {
        let analysis = self.analyze_cnf()?;
        match &analysis.clauses {
            Some(set) if analysis.is_cnf => Ok(set),
            _ => Err(FormulaError::NotCnf(analysis.diagnostics.clone())),
        }
    }
}

impl std::str::FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
