use indexmap::IndexSet;

use crate::cnf::cnf::Atom;
use crate::error::{FormulaError, Result};

pub const WORD_BITS: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVectorSpace {
    pub atoms: IndexSet<Atom>,
    pub words: Vec<u32>,
}

/// Maps atom `i` to bit `i % 31` of word `i / 31` and sets every used bit.
pub fn enumerate(atoms: &IndexSet<Atom>) -> BitVectorSpace {
    let n = atoms.len();
    let mut words = vec![0u32; n.div_ceil(WORD_BITS).max(1)];
    for i in 0..n {
        words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
    }
    BitVectorSpace {
        atoms: atoms.clone(),
        words,
    }
}

impl BitVectorSpace {
    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn fits_one_word(&self) -> bool {
        self.atoms.len() <= WORD_BITS
    }

    pub fn low_word(&self) -> Result<u32> {
        if !self.fits_one_word() {
            return Err(FormulaError::CapacityExceeded {
                atoms: self.atoms.len(),
                limit: WORD_BITS,
            });
        }
        Ok(self.words[0])
    }

    pub fn bit_of(&self, atom: Atom) -> Option<usize> {
        self.atoms.get_index_of(&atom)
    }
}
