use std::io::Write;

use anyhow::Result;

use crate::cnf::cnf::ClauseSet;
use crate::error::FormulaError;
use crate::solver::{backend_for, Algorithm, SolveResult};

/// A backend that cannot enumerate the formula reports the overflow and the
/// remaining algorithms still run.
pub fn solve_all<W: Write>(
    clauses: &ClauseSet,
    algorithms: &[Algorithm],
    out: &mut W,
) -> Result<()> {
    for &algorithm in algorithms {
        let mut solver = backend_for(algorithm);
        let name = solver.backend_name();
        let result = match solver.solve(clauses) {
            Ok(result) => result,
            Err(err @ FormulaError::CapacityExceeded { .. }) => {
                writeln!(out, "{}: capacity exceeded ({})", name, err)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match result {
            SolveResult::Sat => {
                let vector = solver
                    .model_vector()
                    .map_or_else(|| "-".to_owned(), |v| v.to_string());
                let model = solver
                    .model()
                    .map(|m| m.to_string())
                    .unwrap_or_default();
                writeln!(out, "{}: SAT vector={} interpretation={}", name, vector, model)?;
            }
            SolveResult::Unsat => writeln!(out, "{}: UNSAT result=-1", name)?,
        }
        let stats = solver.stats();
        writeln!(
            out,
            "  candidates={} decisions={} propagations={} pure={} conflicts={}",
            stats.candidates,
            stats.decisions,
            stats.propagations,
            stats.pure_literals,
            stats.conflicts
        )?;
    }
    Ok(())
}
