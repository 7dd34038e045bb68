mod alphabeta;
mod astar;
mod minimax;

pub use alphabeta::alpha_beta_search;
pub use astar::a_star_search;
pub use minimax::minimax_search;

use std::collections::HashMap;

use crate::common::Path;

/// Parent links recorded during the path search, keyed by node name.
type Trace = HashMap<String, String>;

fn construct_path(trace: &Trace, goal: &str) -> Path {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while let Some(parent) = trace.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}
