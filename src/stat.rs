use tracing::info;

/// Per-run search counters, threaded through every algorithm call.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub expanded_nodes: usize,
    pub generated_nodes: usize,
    pub leaf_evaluations: usize,
    pub cutoffs: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Expanded nodes {:?} Generated nodes {:?} Leaf evaluations {:?} Cutoffs {:?}",
            self.expanded_nodes, self.generated_nodes, self.leaf_evaluations, self.cutoffs
        );
    }
}
