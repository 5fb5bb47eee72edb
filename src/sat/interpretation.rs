use std::fmt;

use indexmap::{IndexMap, IndexSet};

use super::enumerate::WORD_BITS;
use crate::cnf::cnf::{Atom, Clause, ClauseSet, Literal};
use crate::error::{FormulaError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation {
    values: IndexMap<Atom, bool>,
}

impl Interpretation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit `i` of `vector` is the value of the `i`-th atom.
    pub fn from_vector(atoms: &IndexSet<Atom>, vector: u32) -> Self {
        Self {
            values: atoms
                .iter()
                .enumerate()
                .map(|(i, &a)| (a, (vector >> i) & 1 == 1))
                .collect(),
        }
    }

    pub fn to_vector(&self, atoms: &IndexSet<Atom>) -> Result<u32> {
        if atoms.len() > WORD_BITS {
            return Err(FormulaError::CapacityExceeded {
                atoms: atoms.len(),
                limit: WORD_BITS,
            });
        }
        Ok(atoms
            .iter()
            .enumerate()
            .filter(|(_, a)| self.get(**a) == Some(true))
            .fold(0u32, |acc, (i, _)| acc | (1 << i)))
    }

    pub fn set(&mut self, atom: Atom, value: bool) {
        self.values.insert(atom, value);
    }

    pub fn assign(&mut self, lit: Literal) {
        self.set(lit.atom, !lit.negated);
    }

    pub fn get(&self, atom: Atom) -> Option<bool> {
        self.values.get(&atom).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Atom, bool)> + '_ {
        self.values.iter().map(|(&a, &v)| (a, v))
    }

    /// Fills every atom of `atoms` that has no value yet with `false`, and
    /// reorders the map to follow `atoms`.
    pub fn complete(&mut self, atoms: &IndexSet<Atom>) {
        let values = atoms
            .iter()
            .map(|&a| (a, self.get(a).unwrap_or(false)))
            .collect::<IndexMap<_, _>>();
        self.values = values;
    }

    pub fn satisfies(&self, clauses: &ClauseSet) -> bool {
        clauses.iter().all(|c| clause_satisfied(c, self))
    }
}

/// True iff some literal evaluates to true. Unassigned atoms count as false
/// literals; the empty clause is never satisfied.
pub fn clause_satisfied(clause: &Clause, interpretation: &Interpretation) -> bool {
    clause.literals().any(|lit| {
        interpretation
            .get(lit.atom)
            .is_some_and(|value| lit.eval(value))
    })
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (atom, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", atom, value)?;
        }
        f.write_str("}")
    }
}
