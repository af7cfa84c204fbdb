use crate::graph::Graph;

/// Produces a deterministic total ordering over a graph's atoms. Fingerprints
/// are only comparable across molecules when the two orderings agree on
/// isomorphic graphs; implementations making that stronger guarantee plug in
/// through this trait.
pub trait Canonicalizer {
    /// Every atom index exactly once. Re-invoking on an unchanged graph must
    /// yield the same order.
    fn canonical_order<G: Graph>(&self, graph: &G) -> eyre::Result<Vec<usize>>;
}

/// Ranks atoms by element symbol, then degree, keeping index order for ties.
/// Deterministic for a fixed graph, but not isomorphism-invariant across
/// differently built copies of the same molecule.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleCanonicalizer;

impl Canonicalizer for SimpleCanonicalizer {
    fn canonical_order<G: Graph>(&self, graph: &G) -> eyre::Result<Vec<usize>> {
        let mut order: Vec<usize> = (0..graph.atom_count()).collect();
        order.sort_by(|&a, &b| {
            let atom_a = graph.atom(a);
            let atom_b = graph.atom(b);
            atom_a
                .symbol
                .cmp(&atom_b.symbol)
                .then_with(|| graph.neighbors(a).len().cmp(&graph.neighbors(b).len()))
        });
        Ok(order)
    }
}
