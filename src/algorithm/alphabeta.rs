use crate::common::Player;
use crate::stat::Stats;
use crate::tree::{GameTree, LeafValues};

use anyhow::Result;
use tracing::{instrument, trace};

/// Minimax with alpha-beta pruning. Same value as [`minimax_search`] for the
/// same tree, depth and player; only the number of visited nodes differs.
/// Callers pass the initial window explicitly, `i32::MIN` and `i32::MAX`
/// standing in for the infinities.
///
/// [`minimax_search`]: super::minimax_search
#[instrument(skip_all, name = "alpha_beta", fields(root = node, depth = depth), level = "debug")]
pub fn alpha_beta_search(
    tree: &GameTree,
    values: &LeafValues,
    node: &str,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    player: Player,
    stats: &mut Stats,
) -> Result<i32> {
    if depth == 0 || tree.is_terminal(node) {
        stats.leaf_evaluations += 1;
        return values.value(node);
    }

    match player {
        Player::Max => {
            let mut value = i32::MIN;
            for child in tree.children(node).unwrap_or(&[]) {
                value = value.max(alpha_beta_search(
                    tree,
                    values,
                    child,
                    depth - 1,
                    alpha,
                    beta,
                    Player::Min,
                    stats,
                )?);
                alpha = alpha.max(value);
                if beta <= alpha {
                    // Beta cutoff: MIN already has a better line elsewhere.
                    trace!("beta cutoff at {node} after {child}");
                    stats.cutoffs += 1;
                    break;
                }
            }
            Ok(value)
        }
        Player::Min => {
            let mut value = i32::MAX;
            for child in tree.children(node).unwrap_or(&[]) {
                value = value.min(alpha_beta_search(
                    tree,
                    values,
                    child,
                    depth - 1,
                    alpha,
                    beta,
                    Player::Max,
                    stats,
                )?);
                beta = beta.min(value);
                if beta <= alpha {
                    // Alpha cutoff: MAX already has a better line elsewhere.
                    trace!("alpha cutoff at {node} after {child}");
                    stats.cutoffs += 1;
                    break;
                }
            }
            Ok(value)
        }
    }
}
