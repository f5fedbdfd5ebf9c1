use super::{UndirectedGraph, Vertex};

/// Depth-first reachability test from `source` to `target`.
///
/// Uses an explicit stack, so depth is bounded by memory rather than the call
/// stack. Neighbors are explored in ascending order, the same order a
/// recursive search over `neighbors()` would take. A vertex is always
/// connected to itself; out-of-range vertices are connected to nothing.
pub fn is_connected(graph: &UndirectedGraph, source: Vertex, target: Vertex) -> bool {
    let count = graph.vertex_count();
    if source >= count || target >= count {
        return false;
    }

    let mut visited = vec![false; count];
    let mut stack = vec![source];

    while let Some(vertex) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;

        if vertex == target {
            return true;
        }

        // Reverse so the smallest neighbor is popped first
        let pending: Vec<Vertex> = graph.neighbors(vertex).filter(|&n| !visited[n]).collect();
        stack.extend(pending.into_iter().rev());
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(len: usize) -> UndirectedGraph {
        let mut graph = UndirectedGraph::new(len);
        for v in 1..len {
            graph.add_edge(v - 1, v);
        }
        graph
    }

    #[test]
    fn test_source_equals_target() {
        let graph = UndirectedGraph::new(3);
        for v in 0..3 {
            assert!(is_connected(&graph, v, v));
        }
    }

    #[test]
    fn test_out_of_range() {
        let graph = UndirectedGraph::new(3);
        assert!(!is_connected(&graph, 3, 3));
        assert!(!is_connected(&graph, 0, 5));
    }

    #[test]
    fn test_disconnected_components() {
        let mut graph = UndirectedGraph::new(6);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);
        graph.add_edge(4, 5);

        assert!(is_connected(&graph, 0, 2));
        assert!(is_connected(&graph, 2, 0));
        assert!(is_connected(&graph, 5, 3));
        assert!(!is_connected(&graph, 0, 3));
        assert!(!is_connected(&graph, 5, 1));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = path_graph(5);
        graph.add_edge(4, 0);
        graph.add_edge(1, 3);
        assert!(is_connected(&graph, 0, 2));

        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);
        assert!(!is_connected(&graph, 0, 3));
    }

    #[test]
    fn test_long_path_does_not_overflow_stack() {
        let graph = path_graph(200_000);
        assert!(is_connected(&graph, 0, 199_999));
        assert!(is_connected(&graph, 199_999, 0));
    }

    #[test]
    fn test_removed_edge_disconnects() {
        let mut graph = path_graph(4);
        assert!(is_connected(&graph, 0, 3));
        graph.remove_edge(1, 2);
        assert!(!is_connected(&graph, 0, 3));
    }
}
