use indexmap::IndexMap;
use log::{debug, trace};

use super::interpretation::Interpretation;
use crate::cnf::cnf::{Atom, Clause, ClauseSet, Literal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DpllOutcome {
    Sat(Interpretation),
    Unsat,
}

impl DpllOutcome {
    pub fn is_sat(&self) -> bool {
        matches!(self, DpllOutcome::Sat(_))
    }

    pub fn model(&self) -> Option<&Interpretation> {
        match self {
            DpllOutcome::Sat(m) => Some(m),
            DpllOutcome::Unsat => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpllStats {
    pub decisions: usize,
    pub propagations: usize,
    pub pure_literals: usize,
    pub conflicts: usize,
}

pub fn dpll(clauses: &ClauseSet) -> DpllOutcome {
    dpll_with_stats(clauses).0
}

/// Runs DPLL and returns a total witness over every atom of `clauses`.
/// Atoms left unconstrained by the search are set to false.
pub fn dpll_with_stats(clauses: &ClauseSet) -> (DpllOutcome, DpllStats) {
    let mut search = Search::default();
    let outcome = match search.run(clauses.clone(), Interpretation::new(), 0) {
        Some(mut model) => {
            model.complete(&clauses.atoms());
            DpllOutcome::Sat(model)
        }
        None => DpllOutcome::Unsat,
    };
    debug!("dpll: sat={} {:?}", outcome.is_sat(), search.stats);
    (outcome, search.stats)
}

#[derive(Default)]
struct Search {
    stats: DpllStats,
}

impl Search {
    // Each call owns its clause set; siblings receive independent copies.
    fn run(
        &mut self,
        set: ClauseSet,
        mut assigned: Interpretation,
        depth: usize,
    ) -> Option<Interpretation> {
        if set.contains_empty() {
            self.stats.conflicts += 1;
            trace!("depth {}: empty clause", depth);
            return None;
        }
        if let Some(lits) = consistent_literals(&set) {
            trace!("depth {}: consistent set of {} literals", depth, lits.len());
            lits.into_iter().for_each(|l| assigned.assign(l));
            return Some(assigned);
        }

        let set = self.propagate_units(set, &mut assigned, depth)?;
        let set = self.eliminate_pure(set, &mut assigned);

        let Some(lit) = set.iter().find_map(Clause::first_literal) else {
            return Some(assigned);
        };

        self.stats.decisions += 1;
        for choice in [lit, lit.neg()] {
            trace!("depth {}: decide {}", depth, choice);
            let mut branch = assigned.clone();
            branch.assign(choice);
            if let Some(model) = self.run(set.assign(choice), branch, depth + 1) {
                return Some(model);
            }
        }
        None
    }

    /// Applies unit clauses until none remain; `None` on conflict.
    fn propagate_units(
        &mut self,
        mut set: ClauseSet,
        assigned: &mut Interpretation,
        depth: usize,
    ) -> Option<ClauseSet> {
        loop {
            let units = set.unit_literals().collect::<Vec<_>>();
            if units.is_empty() {
                return Some(set);
            }
            for lit in units {
                if set.contains_empty() {
                    break;
                }
                if assigned.get(lit.atom) == Some(!lit.negated) {
                    continue;
                }
                trace!("depth {}: unit {}", depth, lit);
                assigned.assign(lit);
                set = set.assign(lit);
                self.stats.propagations += 1;
            }
            if set.contains_empty() {
                self.stats.conflicts += 1;
                trace!("depth {}: conflict after propagation", depth);
                return None;
            }
        }
    }

    fn eliminate_pure(&mut self, mut set: ClauseSet, assigned: &mut Interpretation) -> ClauseSet {
        for lit in pure_literals(&set) {
            assigned.assign(lit);
            set = set.assign(lit);
            self.stats.pure_literals += 1;
        }
        set
    }
}

/// The literals of `set` if every clause is a unit and no atom appears with
/// both polarities.
fn consistent_literals(set: &ClauseSet) -> Option<Vec<Literal>> {
    let mut seen = IndexMap::<Atom, bool>::new();
    for clause in set.iter() {
        let lit = clause.as_unit()?;
        match seen.get(&lit.atom) {
            Some(&neg) if neg != lit.negated => return None,
            Some(_) => {}
            None => {
                seen.insert(lit.atom, lit.negated);
            }
        }
    }
    Some(
        seen.into_iter()
            .map(|(atom, negated)| Literal { atom, negated })
            .collect(),
    )
}

/// Literals whose atom occurs with a single polarity across `set`.
pub fn pure_literals(set: &ClauseSet) -> Vec<Literal> {
    let mut polarity = IndexMap::<Atom, (bool, bool)>::new();
    for lit in set.iter().flat_map(|c| c.literals()) {
        let entry = polarity.entry(lit.atom).or_insert((false, false));
        if lit.negated {
            entry.1 = true;
        } else {
            entry.0 = true;
        }
    }
    polarity
        .into_iter()
        .filter_map(|(atom, pol)| match pol {
            (true, false) => Some(Literal::positive(atom)),
            (false, true) => Some(Literal::negative(atom)),
            _ => None,
        })
        .collect()
}
