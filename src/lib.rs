//! Propositional formula validation, CNF clause extraction and satisfiability
//! checking by brute force, brute force with unit clauses, and DPLL.

pub mod cnf;
pub mod error;
pub mod formula;
pub mod gen;
pub mod sat;
pub mod solver;

pub use cnf::cnf::{Atom, Clause, ClauseSet, Literal};
pub use cnf::extract::{analyze, CnfAnalysis, CnfViolation};
pub use error::{FormulaError, Result};
pub use formula::grammar::{validate, Validity, Violation};
pub use formula::propositional::is_propositional;
pub use formula::Formula;
