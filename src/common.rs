use anyhow::anyhow;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sequence of node names in traversal order.
pub type Path = Vec<String>;

/// Side to move in a two-player zero-sum game tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAX" => Ok(Player::Max),
            "MIN" => Ok(Player::Min),
            _ => Err(anyhow!("unknown player {s:?}, expected MAX or MIN")),
        }
    }
}

/// Frontier entry for the path search. Parent links live in a trace table
/// keyed by node name, not in the node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenNode {
    pub name: String,
    pub f_cost: usize,
    pub g_cost: usize,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ordered by f cost; the remaining fields only make the order total
        // so the heap behaves deterministically.
        self.f_cost
            .cmp(&other.f_cost)
            .then_with(|| self.g_cost.cmp(&other.g_cost))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_parse() {
        assert_eq!("MAX".parse::<Player>().unwrap(), Player::Max);
        assert_eq!("MIN".parse::<Player>().unwrap(), Player::Min);
        assert!("max".parse::<Player>().is_err());
        assert_eq!(Player::Max.opponent(), Player::Min);
    }

    #[test]
    fn test_open_node_orders_by_f_cost() {
        let cheap = OpenNode {
            name: "B".to_string(),
            f_cost: 10,
            g_cost: 7,
        };
        let expensive = OpenNode {
            name: "A".to_string(),
            f_cost: 12,
            g_cost: 2,
        };
        assert!(cheap < expensive);
    }
}
