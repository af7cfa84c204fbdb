use crate::graph::Graph;

/// Fewest-bond-hop path between `source` and `sink`, both endpoints
/// inclusive. `None` when the atoms sit in different connected components.
///
/// Molecular graphs are full of rings, so visited atoms are tracked
/// explicitly. Neighbors expand in ascending atom index, which pins the
/// tie-break among equal-length paths to one reproducible choice per graph.
pub fn shortest_path<G: Graph>(graph: &G, source: usize, sink: usize) -> Option<Vec<usize>> {
    if source == sink {
        return Some(vec![source]);
    }

    let n = graph.atom_count();
    let mut visited = vec![false; n];
    let mut previous = vec![usize::MAX; n];
    let mut queue = std::collections::VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    'search: while let Some(current) = queue.pop_front() {
        let mut neighbors = graph.neighbors(current).to_vec();
        neighbors.sort_unstable();

        for neighbor in neighbors {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            previous[neighbor] = current;
            if neighbor == sink {
                break 'search;
            }
            queue.push_back(neighbor);
        }
    }

    if !visited[sink] {
        return None;
    }

    let mut path = vec![sink];
    let mut current = sink;
    while current != source {
        current = previous[current];
        path.push(current);
    }
    path.reverse();
    Some(path)
}
