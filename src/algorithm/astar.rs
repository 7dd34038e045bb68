use super::{construct_path, Trace};
use crate::common::{OpenNode, Path};
use crate::graph::{Graph, Heuristics};
use crate::stat::Stats;

use anyhow::{bail, Result};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, instrument, trace};

/// Informed best-first search over a weighted graph. Returns the minimum-cost
/// path from `start` to `goal` with its cumulative edge cost, or `None` when
/// the goal is unreachable. An absent start node is a precondition violation
/// and fails instead.
#[instrument(skip_all, name = "a_star", fields(start = start, goal = goal), level = "debug")]
pub fn a_star_search(
    graph: &Graph,
    heuristics: &Heuristics,
    start: &str,
    goal: &str,
    stats: &mut Stats,
) -> Result<Option<(Path, usize)>> {
    if !graph.contains(start) {
        bail!("start node {start:?} is not in the graph");
    }

    let mut open_list = BinaryHeap::new();
    let mut best_g_cost: HashMap<String, usize> = HashMap::new();
    let mut trace_links = Trace::new();

    best_g_cost.insert(start.to_string(), 0);
    open_list.push(Reverse(OpenNode {
        name: start.to_string(),
        f_cost: heuristics.estimate(start),
        g_cost: 0,
    }));

    while let Some(Reverse(current)) = open_list.pop() {
        // Lazy deletion: a cheaper entry for this node was pushed after this
        // one, so this one is stale.
        if current.g_cost > *best_g_cost.get(&current.name).unwrap_or(&usize::MAX) {
            continue;
        }
        trace!("expand node: {current:?}");
        stats.expanded_nodes += 1;

        if current.name == goal {
            return Ok(Some((construct_path(&trace_links, goal), current.g_cost)));
        }

        for (neighbor, cost) in graph.neighbors(&current.name).unwrap_or(&[]) {
            let tentative_g_cost = current.g_cost + cost;

            // A better-or-equal candidate for this node is already pending.
            if best_g_cost
                .get(neighbor)
                .is_some_and(|&g_cost| g_cost <= tentative_g_cost)
            {
                continue;
            }

            best_g_cost.insert(neighbor.clone(), tentative_g_cost);
            trace_links.insert(neighbor.clone(), current.name.clone());
            stats.generated_nodes += 1;
            open_list.push(Reverse(OpenNode {
                name: neighbor.clone(),
                f_cost: tentative_g_cost + heuristics.estimate(neighbor),
                g_cost: tentative_g_cost,
            }));
        }
        trace!("open list {open_list:?}");
    }

    debug!("goal {goal:?} is unreachable from {start:?}");
    Ok(None)
}
