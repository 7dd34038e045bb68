use std::collections::HashMap;

/// Weighted directed graph as an adjacency mapping. Edges keep their
/// definition order, which fixes the expansion order of neighbors.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: HashMap<String, Vec<(String, usize)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no outgoing edges.
    pub fn add_node(&mut self, name: &str) {
        self.edges.entry(name.to_string()).or_default();
    }

    pub fn add_edge(&mut self, from: &str, to: &str, cost: usize) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), cost));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    /// Outgoing edges in definition order. `None` if the node was never
    /// registered, which callers treat as a dead end.
    pub fn neighbors(&self, name: &str) -> Option<&[(String, usize)]> {
        self.edges.get(name).map(|edges| edges.as_slice())
    }
}

/// Estimated remaining cost to the goal, per node.
#[derive(Debug, Clone, Default)]
pub struct Heuristics {
    estimates: HashMap<String, usize>,
}

impl Heuristics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, estimate: usize) {
        self.estimates.insert(name.to_string(), estimate);
    }

    /// Nodes without an entry estimate to 0. Deliberate policy: the goal
    /// itself usually has no entry, and 0 keeps any admissible table
    /// admissible.
    pub fn estimate(&self, name: &str) -> usize {
        self.estimates.get(name).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_keep_definition_order() {
        let mut graph = Graph::new();
        graph.add_edge("Home", "Bank", 45);
        graph.add_edge("Home", "Garden", 40);
        graph.add_edge("Home", "School", 50);

        let neighbors = graph.neighbors("Home").unwrap();
        assert_eq!(
            neighbors,
            &[
                ("Bank".to_string(), 45),
                ("Garden".to_string(), 40),
                ("School".to_string(), 50),
            ]
        );
    }

    #[test]
    fn test_node_without_edges() {
        let mut graph = Graph::new();
        graph.add_node("Post office");
        assert!(graph.contains("Post office"));
        assert!(graph.neighbors("Post office").unwrap().is_empty());
        assert!(graph.neighbors("Bank").is_none());
    }

    #[test]
    fn test_missing_heuristic_defaults_to_zero() {
        let mut heuristics = Heuristics::new();
        heuristics.insert("Home", 120);
        assert_eq!(heuristics.estimate("Home"), 120);
        assert_eq!(heuristics.estimate("University"), 0);
    }
}
