pub mod brute_backend;
pub mod dpll_backend;
pub mod report;

use std::str::FromStr;

use anyhow::bail;

use crate::cnf::cnf::{Atom, ClauseSet};
use crate::error::Result;
use crate::sat::interpretation::Interpretation;

pub use brute_backend::BruteForceBackend;
pub use dpll_backend::DpllBackend;
pub use report::solve_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    Sat,
    Unsat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub solve_calls: usize,
    pub candidates: u64,
    pub decisions: usize,
    pub propagations: usize,
    pub pure_literals: usize,
    pub conflicts: usize,
}

pub trait Solver {
    /// Decides `clauses`. Unsatisfiability is a result, not an error.
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SolveResult>;
    fn model(&self) -> Option<&Interpretation>;
    fn model_vector(&self) -> Option<u32>;
    fn stats(&self) -> SolverStats;
    fn backend_name(&self) -> &'static str;

    fn model_value(&self, atom: Atom) -> Option<bool> {
        self.model().and_then(|m| m.get(atom))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BruteForce,
    BruteForceUnit,
    Dpll,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BruteForce,
        Algorithm::BruteForceUnit,
        Algorithm::Dpll,
    ];
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "brute" => Ok(Algorithm::BruteForce),
            "unit" => Ok(Algorithm::BruteForceUnit),
            "dpll" => Ok(Algorithm::Dpll),
            _ => bail!("unknown algorithm '{}', expected brute|unit|dpll", s),
        }
    }
}

pub fn backend_for(algorithm: Algorithm) -> Box<dyn Solver> {
    match algorithm {
        Algorithm::BruteForce => Box::new(BruteForceBackend::plain()),
        Algorithm::BruteForceUnit => Box::new(BruteForceBackend::with_units()),
        Algorithm::Dpll => Box::new(DpllBackend::new()),
    }
}
