use crate::common::{Path, Player};
use crate::stat::Stats;
use crate::tree::{GameTree, LeafValues};

use anyhow::Result;
use tracing::{instrument, trace};

/// Full-width minimax over a game tree. Returns the value achievable under
/// optimal play within `depth` plies, together with the principal variation
/// from `node` down to the evaluated leaf or cutoff node.
///
/// A node reached at depth 0 is evaluated directly from the leaf-value
/// table even when it still has children, so the table must cover every
/// node reachable at the cutoff depth.
#[instrument(skip_all, name = "minimax", fields(root = node, depth = depth), level = "debug")]
pub fn minimax_search(
    tree: &GameTree,
    values: &LeafValues,
    node: &str,
    depth: usize,
    player: Player,
    stats: &mut Stats,
) -> Result<(i32, Path)> {
    if depth == 0 || tree.is_terminal(node) {
        stats.leaf_evaluations += 1;
        return Ok((values.value(node)?, vec![node.to_string()]));
    }

    let mut best = match player {
        Player::Max => i32::MIN,
        Player::Min => i32::MAX,
    };
    let mut variation = Path::new();

    for child in tree.children(node).unwrap_or(&[]) {
        let (value, child_variation) =
            minimax_search(tree, values, child, depth - 1, player.opponent(), stats)?;
        trace!("child {child} of {node} evaluates to {value}");

        // Strict comparison: the first child reaching the best value keeps
        // the principal variation on ties.
        let improves = match player {
            Player::Max => value > best,
            Player::Min => value < best,
        };
        if improves {
            best = value;
            variation = child_variation;
        }
    }

    let mut path = vec![node.to_string()];
    path.extend(variation);
    Ok((best, path))
}
