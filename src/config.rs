use crate::common::Player;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "Search Lab",
    about = "Classic search and game-tree algorithms implemented in Rust.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(
        long,
        help = "Demonstration to run: astar, minimax, alphabeta or all",
        default_value = "all"
    )]
    pub demo: String,

    #[arg(long, help = "Start node for the path search", default_value = "Home")]
    pub start: String,

    #[arg(
        long,
        help = "Goal node for the path search",
        default_value = "University"
    )]
    pub goal: String,

    #[arg(long, help = "Ply budget for the game-tree demos (defaults per demo)")]
    pub depth: Option<usize>,

    #[arg(long, help = "Player to move at the root", default_value = "MAX")]
    pub player: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub demo: String,
    pub start: String,
    pub goal: String,
    pub depth: Option<usize>,
    pub player: Player,
}

impl Config {
    pub fn new(cli: &Cli) -> Result<Self> {
        Ok(Self {
            demo: cli.demo.clone(),
            start: cli.start.clone(),
            goal: cli.goal.clone(),
            depth: cli.depth,
            player: cli.player.parse()?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        match self.demo.as_str() {
            "astar" | "minimax" | "alphabeta" | "all" => {}
            other => bail!("unknown demo {other:?}, expected astar, minimax, alphabeta or all"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_demo(demo: &str) -> Cli {
        Cli::parse_from(["search_lab", "--demo", demo])
    }

    #[test]
    fn test_default_config() {
        let cli = Cli::parse_from(["search_lab"]);
        let config = Config::new(&cli).unwrap();
        config.validate().unwrap();
        assert_eq!(config.demo, "all");
        assert_eq!(config.start, "Home");
        assert_eq!(config.goal, "University");
        assert_eq!(config.depth, None);
        assert_eq!(config.player, Player::Max);
    }

    #[test]
    fn test_unknown_demo_rejected() {
        let config = Config::new(&cli_with_demo("dfs")).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_player_rejected() {
        let cli = Cli::parse_from(["search_lab", "--player", "BOTH"]);
        assert!(Config::new(&cli).is_err());
    }
}
