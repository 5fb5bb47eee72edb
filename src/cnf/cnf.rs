use indexmap::IndexSet;

/// A propositional variable named by a single alphanumeric character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(char);

impl Atom {
    pub fn new(c: char) -> Option<Self> {
        if Self::is_atom_char(c) {
            Some(Self(c))
        } else {
            None
        }
    }

    pub fn is_atom_char(c: char) -> bool {
        c.is_alphanumeric()
    }

    pub fn name(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub atom: Atom,
    pub negated: bool,
}

impl Literal {
    pub fn positive(atom: Atom) -> Self {
        Self {
            atom,
            negated: false,
        }
    }

    pub fn negative(atom: Atom) -> Self {
        Self {
            atom,
            negated: true,
        }
    }

    pub fn neg(self) -> Self {
        Self {
            atom: self.atom,
            negated: !self.negated,
        }
    }

    pub fn eval(self, value: bool) -> bool {
        value ^ self.negated
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "-{}", self.atom)
        } else {
            write!(f, "{}", self.atom)
        }
    }
}

/// `Empty` is the unsatisfiable clause produced when simplification removes
/// every literal. A clause never holds an empty `Literals` set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Empty,
    Literals(IndexSet<Literal>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simplified {
    Satisfied,
    Reduced(Clause),
}

impl Clause {
    pub fn new(lits: impl IntoIterator<Item = Literal>) -> Self {
        let set = lits.into_iter().collect::<IndexSet<_>>();
        if set.is_empty() {
            Clause::Empty
        } else {
            Clause::Literals(set)
        }
    }

    pub fn unit(lit: Literal) -> Self {
        Self::new([lit])
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Clause::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Clause::Empty => 0,
            Clause::Literals(set) => set.len(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        let set = match self {
            Clause::Empty => None,
            Clause::Literals(set) => Some(set),
        };
        set.into_iter().flat_map(|s| s.iter().copied())
    }

    pub fn contains(&self, lit: Literal) -> bool {
        match self {
            Clause::Empty => false,
            Clause::Literals(set) => set.contains(&lit),
        }
    }

    pub fn as_unit(&self) -> Option<Literal> {
        match self {
            Clause::Literals(set) if set.len() == 1 => set.first().copied(),
            _ => None,
        }
    }

    pub fn first_literal(&self) -> Option<Literal> {
        match self {
            Clause::Empty => None,
            Clause::Literals(set) => set.first().copied(),
        }
    }

    pub fn assign(&self, lit: Literal) -> Simplified {
        match self {
            Clause::Empty => Simplified::Reduced(Clause::Empty),
            Clause::Literals(set) => {
                if set.contains(&lit) {
                    Simplified::Satisfied
                } else if set.contains(&lit.neg()) {
                    Simplified::Reduced(Clause::new(
                        set.iter().copied().filter(|&l| l != lit.neg()),
                    ))
                } else {
                    Simplified::Reduced(self.clone())
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    pub clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Atoms in first-appearance order; the position of an atom is its bit index.
    pub fn atoms(&self) -> IndexSet<Atom> {
        self.clauses
            .iter()
            .flat_map(|c| c.literals())
            .map(|l| l.atom)
            .collect()
    }

    pub fn contains_empty(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn unit_literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.clauses.iter().filter_map(Clause::as_unit)
    }

    /// Fixes `lit = true`: satisfied clauses are dropped, the opposite literal
    /// is removed from the rest.
    pub fn assign(&self, lit: Literal) -> ClauseSet {
        ClauseSet::new(self.clauses.iter().filter_map(|c| match c.assign(lit) {
            Simplified::Satisfied => None,
            Simplified::Reduced(c) => Some(c),
        }))
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Clause::len).max().unwrap_or(0)
    }
}
