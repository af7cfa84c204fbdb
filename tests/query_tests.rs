use std::collections::HashSet;

use molpath::graph::{Atom, BondOrder, Graph, MolGraph, Parity};
use molpath::query::{AtomQuery, Chirality, QueryExpr};

/// Element-symbol leaf, standing in for the query grammar's atom primitives.
struct Symbol(&'static str);

impl AtomQuery for Symbol {
    fn matches(&self, atom: &Atom) -> bool {
        atom.symbol == self.0
    }
}

/// Leaf that asserts the chirality tag carried by the atom itself.
struct HasParity;

impl AtomQuery for HasParity {
    fn matches(&self, atom: &Atom) -> bool {
        atom.parity.is_some()
    }

    fn chirality(&self, atom: &Atom, marks: &mut HashSet<Chirality>) {
        match atom.parity {
            Some(Parity::Clockwise) => {
                marks.insert(Chirality::Clockwise);
            }
            Some(Parity::Anticlockwise) => {
                marks.insert(Chirality::Anticlockwise);
            }
            None => {
                marks.insert(Chirality::Any);
            }
        }
    }
}

fn glycolaldehyde() -> MolGraph {
    // O=C-C-O with a parity tag on the central carbon
    let mut graph = MolGraph::new();
    let o1 = graph.add_atom(Atom::new("O"));
    let c1 = graph.add_atom(Atom::new("C"));
    let c2 = graph.add_atom(Atom::new("C").with_parity(Parity::Clockwise));
    let o2 = graph.add_atom(Atom::new("O"));
    graph.add_bond(o1, c1, BondOrder::Double, false).unwrap();
    graph.add_bond(c1, c2, BondOrder::Single, false).unwrap();
    graph.add_bond(c2, o2, BondOrder::Single, false).unwrap();
    graph
}

#[test]
fn test_query_over_graph_atoms() {
    let graph = glycolaldehyde();

    let carbon_stereocenter = QueryExpr::and(
        QueryExpr::leaf(Symbol("C")),
        QueryExpr::leaf(HasParity),
    );

    let hits: Vec<usize> = (0..graph.atom_count())
        .filter(|&i| carbon_stereocenter.matches(graph.atom(i)))
        .collect();
    assert_eq!(hits, vec![2]);
}

#[test]
fn test_disjunction_finds_either_element() {
    let graph = glycolaldehyde();
    let c_or_o = QueryExpr::or(QueryExpr::leaf(Symbol("C")), QueryExpr::leaf(Symbol("O")));

    assert!(graph.atoms().all(|atom| c_or_o.matches(atom)));
}

#[test]
fn test_negation_excludes_matches() {
    let graph = glycolaldehyde();
    let not_oxygen = QueryExpr::not(QueryExpr::leaf(Symbol("O")));

    let hits = graph.atoms().filter(|atom| not_oxygen.matches(atom)).count();
    assert_eq!(hits, 2);
}

#[test]
fn test_chirality_flows_from_atom_through_conjunction() {
    let graph = glycolaldehyde();
    let expr = QueryExpr::and(QueryExpr::leaf(Symbol("C")), QueryExpr::leaf(HasParity));

    let mut marks = HashSet::new();
    expr.chirality(graph.atom(2), &mut marks);
    assert_eq!(marks, HashSet::from([Chirality::Clockwise]));
}

#[test]
fn test_untagged_atom_reports_any_until_constrained() {
    let graph = glycolaldehyde();

    let mut marks = HashSet::new();
    QueryExpr::leaf(HasParity).chirality(graph.atom(1), &mut marks);
    assert_eq!(marks, HashSet::from([Chirality::Any]));

    // conjoined with a concrete assertion, Any is dropped
    struct Clockwise;
    impl AtomQuery for Clockwise {
        fn matches(&self, _atom: &Atom) -> bool {
            true
        }
        fn chirality(&self, _atom: &Atom, marks: &mut HashSet<Chirality>) {
            marks.insert(Chirality::Clockwise);
        }
    }

    let expr = QueryExpr::and(QueryExpr::leaf(HasParity), QueryExpr::leaf(Clockwise));
    let mut marks = HashSet::new();
    expr.chirality(graph.atom(1), &mut marks);
    assert_eq!(marks, HashSet::from([Chirality::Clockwise]));
}

#[test]
fn test_reused_expression_is_stateless_across_atoms() {
    let graph = glycolaldehyde();
    let expr = QueryExpr::and(QueryExpr::leaf(Symbol("C")), QueryExpr::leaf(HasParity));

    // evaluating against one atom must not bleed into the next
    for _ in 0..3 {
        assert!(!expr.matches(graph.atom(1)));
        assert!(expr.matches(graph.atom(2)));
    }
}

#[test]
fn test_expression_is_shareable_across_threads() {
    let expr = std::sync::Arc::new(QueryExpr::or(
        QueryExpr::leaf(Symbol("C")),
        QueryExpr::leaf(Symbol("N")),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = expr.clone();
            std::thread::spawn(move || {
                let atom = Atom::new("C");
                assert!(expr.matches(&atom));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
