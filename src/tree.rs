use anyhow::{anyhow, Result};
use std::collections::HashMap;

/// Game tree as a parent-to-children mapping. Children keep their
/// definition order; tie-breaking and pruning both depend on it.
#[derive(Debug, Clone, Default)]
pub struct GameTree {
    children: HashMap<String, Vec<String>>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: &str, children: &[&str]) {
        self.children.insert(
            name.to_string(),
            children.iter().map(|child| child.to_string()).collect(),
        );
    }

    pub fn children(&self, name: &str) -> Option<&[String]> {
        self.children.get(name).map(|children| children.as_slice())
    }

    /// A node absent from the mapping, or present with no children, is a
    /// leaf.
    pub fn is_terminal(&self, name: &str) -> bool {
        self.children
            .get(name)
            .map_or(true, |children| children.is_empty())
    }
}

/// Payoff table for terminal positions. Every node reachable at the cutoff
/// depth must have an entry, whether or not it is a true leaf.
#[derive(Debug, Clone, Default)]
pub struct LeafValues {
    values: HashMap<String, i32>,
}

impl LeafValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: i32) {
        self.values.insert(name.to_string(), value);
    }

    pub fn value(&self, name: &str) -> Result<i32> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("no stored value for node {name:?}"))
    }
}
