use serde::{Deserialize, Serialize};

pub mod elements;

/// Bond order between two atoms. Aromaticity is a separate flag on [`Bond`],
/// matching the convention that a kekulized aromatic bond still carries a
/// fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Quadruple,
    Unspecified,
}

/// Tetrahedral parity tag on an atom, as read from the depiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Clockwise,
    Anticlockwise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub symbol: String,
    pub atomic_number: Option<u8>,
    pub pseudo: bool,
    pub parity: Option<Parity>,
}

impl Atom {
    /// A regular element atom. The atomic number is resolved from the
    /// periodic table; an unknown symbol is kept but resolves to `None`.
    pub fn new(symbol: &str) -> Self {
        Atom {
            symbol: symbol.to_string(),
            atomic_number: elements::atomic_number(symbol),
            pseudo: false,
            parity: None,
        }
    }

    /// A pseudo atom ("R1", "*", ...) carrying a raw label instead of an
    /// element symbol.
    pub fn pseudo(label: &str) -> Self {
        Atom {
            symbol: label.to_string(),
            atomic_number: None,
            pseudo: true,
            parity: None,
        }
    }

    pub fn with_parity(mut self, parity: Parity) -> Self {
        self.parity = Some(parity);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub order: BondOrder,
    pub aromatic: bool,
}

impl Bond {
    /// Whether both bonded atoms sit in a delocalized sp2 ring system.
    pub fn is_sp2(&self) -> bool {
        self.aromatic
    }
}

/// Read access to a molecular graph: atoms with stable integer indices and
/// bond lookup for any pair joined by an edge. Fingerprint walking and path
/// search only ever need this view.
pub trait Graph {
    fn atom_count(&self) -> usize;

    fn atom(&self, index: usize) -> &Atom;

    fn neighbors(&self, index: usize) -> &[usize];

    fn bond(&self, a: usize, b: usize) -> Option<&Bond>;

    fn atoms(&self) -> AtomIter<'_, Self>
    where
        Self: Sized,
    {
        AtomIter {
            graph: self,
            next: 0,
        }
    }
}

pub struct AtomIter<'a, G: Graph> {
    graph: &'a G,
    next: usize,
}

impl<'a, G: Graph> Iterator for AtomIter<'a, G> {
    type Item = &'a Atom;

    fn next(&mut self) -> Option<&'a Atom> {
        if self.next >= self.graph.atom_count() {
            return None;
        }
        let atom = self.graph.atom(self.next);
        self.next += 1;
        Some(atom)
    }
}

/// Adjacency-list molecular graph, the reference [`Graph`] implementation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MolGraph {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    adjacency: Vec<Vec<usize>>,
}

impl MolGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        self.atoms.len() - 1
    }

    pub fn add_bond(
        &mut self,
        begin: usize,
        end: usize,
        order: BondOrder,
        aromatic: bool,
    ) -> eyre::Result<usize> {
        if begin >= self.atoms.len() || end >= self.atoms.len() {
            return Err(eyre::eyre!(
                "bond references atom out of range: {} - {}",
                begin,
                end
            ));
        }
        if begin == end {
            return Err(eyre::eyre!("self-loop bond on atom {}", begin));
        }
        if self.bond(begin, end).is_some() {
            return Err(eyre::eyre!("duplicate bond: {} - {}", begin, end));
        }

        self.bonds.push(Bond {
            begin,
            end,
            order,
            aromatic,
        });
        self.adjacency[begin].push(end);
        self.adjacency[end].push(begin);
        Ok(self.bonds.len() - 1)
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }
}

impl Graph for MolGraph {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn atom(&self, index: usize) -> &Atom {
        &self.atoms[index]
    }

    fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    fn bond(&self, a: usize, b: usize) -> Option<&Bond> {
        self.bonds
            .iter()
            .find(|bond| (bond.begin, bond.end) == (a, b) || (bond.begin, bond.end) == (b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_lookup() {
        let carbon = Atom::new("C");
        assert_eq!(carbon.atomic_number, Some(6));
        assert!(!carbon.pseudo);

        let r_group = Atom::pseudo("R1");
        assert_eq!(r_group.atomic_number, None);
        assert!(r_group.pseudo);
    }

    #[test]
    fn test_bond_lookup_either_direction() {
        let mut graph = MolGraph::new();
        let c1 = graph.add_atom(Atom::new("C"));
        let c2 = graph.add_atom(Atom::new("C"));
        graph.add_bond(c1, c2, BondOrder::Single, false).unwrap();

        assert!(graph.bond(c1, c2).is_some());
        assert!(graph.bond(c2, c1).is_some());
        assert_eq!(graph.neighbors(c1), &[c2]);
        assert_eq!(graph.atoms().count(), 2);
    }

    #[test]
    fn test_add_bond_rejects_bad_input() {
        let mut graph = MolGraph::new();
        let c1 = graph.add_atom(Atom::new("C"));

        assert!(graph.add_bond(c1, 7, BondOrder::Single, false).is_err());
        assert!(graph.add_bond(c1, c1, BondOrder::Single, false).is_err());
    }
}
