//! Built-in demonstration data. Every graph and tree is a hardcoded
//! literal constructed at startup and never mutated.

use crate::graph::{Graph, Heuristics};
use crate::tree::{GameTree, LeafValues};

/// City graph for the path search demo, with straight-line estimates
/// toward University. University itself has no estimate and defaults to 0.
pub fn city_graph() -> (Graph, Heuristics) {
    let mut graph = Graph::new();
    graph.add_edge("Home", "Bank", 45);
    graph.add_edge("Home", "Garden", 40);
    graph.add_edge("Home", "School", 50);
    graph.add_edge("Bank", "Police Station", 60);
    graph.add_edge("Bank", "Home", 45);
    graph.add_edge("Police Station", "Bank", 60);
    graph.add_edge("Police Station", "University", 28);
    graph.add_edge("University", "Police Station", 28);
    graph.add_edge("University", "Railway Station", 40);
    graph.add_edge("Railway Station", "School", 75);
    graph.add_edge("Railway Station", "Garden", 72);
    graph.add_edge("Railway Station", "University", 40);
    graph.add_edge("School", "Home", 50);
    graph.add_edge("School", "Post office", 59);
    graph.add_edge("School", "Railway Station", 40);
    graph.add_edge("Garden", "Home", 40);
    graph.add_edge("Garden", "Railway Station", 72);
    graph.add_node("Post office");

    let mut heuristics = Heuristics::new();
    heuristics.insert("Home", 120);
    heuristics.insert("Bank", 80);
    heuristics.insert("Police Station", 110);
    heuristics.insert("Railway Station", 20);
    heuristics.insert("School", 70);
    heuristics.insert("Garden", 100);
    heuristics.insert("Post office", 26);

    (graph, heuristics)
}

/// Two-ply tree for the minimax demo.
pub fn minimax_tree() -> (GameTree, LeafValues) {
    let mut tree = GameTree::new();
    tree.add_node("A", &["B", "C"]);
    tree.add_node("B", &["D", "E"]);
    tree.add_node("C", &["F", "G"]);

    let mut values = LeafValues::new();
    values.insert("D", 2);
    values.insert("E", 5);
    values.insert("F", 1);
    values.insert("G", 9);

    (tree, values)
}

/// Same tree shape with the leaf values used by the alpha-beta demo.
pub fn alpha_beta_tree() -> (GameTree, LeafValues) {
    let mut tree = GameTree::new();
    tree.add_node("A", &["B", "C"]);
    tree.add_node("B", &["D", "E"]);
    tree.add_node("C", &["F", "G"]);

    let mut values = LeafValues::new();
    values.insert("D", 3);
    values.insert("E", 5);
    values.insert("F", 6);
    values.insert("G", 9);

    (tree, values)
}
