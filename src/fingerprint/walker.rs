use std::collections::HashSet;
use std::fmt;

use crate::fingerprint::canon::{Canonicalizer, SimpleCanonicalizer};
use crate::fingerprint::encode::encode_path;
use crate::fingerprint::paths::shortest_path;
use crate::graph::Graph;

/// Walks every pairwise shortest path of a molecular graph and encodes each
/// into a token; the deduplicated token set is the molecule's path
/// fingerprint. The whole walk happens eagerly during construction and the
/// result is read-only afterwards.
pub struct ShortestPathWalker {
    paths: HashSet<String>,
    pseudo_atoms: Vec<String>,
}

impl ShortestPathWalker {
    pub fn new<G: Graph>(graph: &G) -> eyre::Result<Self> {
        Self::with_canonicalizer(graph, &SimpleCanonicalizer)
    }

    pub fn with_canonicalizer<G: Graph, C: Canonicalizer>(
        graph: &G,
        canonicalizer: &C,
    ) -> eyre::Result<Self> {
        let order = canonicalizer.canonical_order(graph)?;

        let mut paths = HashSet::new();
        let mut pseudo_atoms = Vec::new();

        for &source in &order {
            insert_token(
                &mut paths,
                encode_path(graph, &[source], &mut pseudo_atoms)?,
            );

            for &sink in &order {
                if source == sink {
                    continue;
                }
                let Some(path) = shortest_path(graph, source, sink) else {
                    continue;
                };
                if path.len() < 2 {
                    continue;
                }
                insert_token(&mut paths, encode_path(graph, &path, &mut pseudo_atoms)?);
            }
        }

        log::debug!(
            "walked {} atoms into {} unique path tokens",
            order.len(),
            paths.len()
        );

        Ok(ShortestPathWalker { paths, pseudo_atoms })
    }

    /// The fingerprint: every unique path token.
    pub fn paths(&self) -> &HashSet<String> {
        &self.paths
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Raw labels of every pseudo atom visited while encoding, in visit
    /// order with repeats. Kept for future token disambiguation; does not
    /// affect the fingerprint today.
    pub fn pseudo_atom_labels(&self) -> &[String] {
        &self.pseudo_atoms
    }
}

fn insert_token(paths: &mut HashSet<String>, token: String) {
    // the encoder never emits blank tokens, but a blank would poison every
    // downstream comparison, so it is dropped rather than stored
    let clean = token.trim();
    if clean.is_empty() {
        log::warn!("discarding blank path token");
        return;
    }
    paths.insert(clean.to_string());
}

impl fmt::Display for ShortestPathWalker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.paths {
            write!(f, "{}->", path)?;
        }
        Ok(())
    }
}
