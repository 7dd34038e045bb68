use search_lab::algorithm::{a_star_search, alpha_beta_search, minimax_search};
use search_lab::config::{Cli, Config};
use search_lab::scenario;
use search_lab::stat::Stats;

use clap::Parser;
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();
    let cli = Cli::parse();

    let config = Config::new(&cli)?;
    config.validate()?;

    match config.demo.as_str() {
        "astar" => run_a_star(&config)?,
        "minimax" => run_minimax(&config)?,
        "alphabeta" => run_alpha_beta(&config)?,
        "all" => {
            run_a_star(&config)?;
            run_minimax(&config)?;
            run_alpha_beta(&config)?;
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn run_a_star(config: &Config) -> anyhow::Result<()> {
    let (graph, heuristics) = scenario::city_graph();
    let mut stats = Stats::default();

    match a_star_search(&graph, &heuristics, &config.start, &config.goal, &mut stats)? {
        Some((path, cost)) => {
            info!("path cost: {cost}");
            println!(
                "Shortest path from {} to {}: {:?}",
                config.start, config.goal, path
            );
        }
        None => println!(
            "Shortest path from {} to {}: None",
            config.start, config.goal
        ),
    }
    stats.print();
    Ok(())
}

fn run_minimax(config: &Config) -> anyhow::Result<()> {
    let (tree, values) = scenario::minimax_tree();
    let mut stats = Stats::default();
    let depth = config.depth.unwrap_or(2);

    let (value, path) = minimax_search(&tree, &values, "A", depth, config.player, &mut stats)?;
    println!("Optimal value of the tree is: {value}");
    println!("Decision path followed: {}", path.join(" -> "));
    stats.print();
    Ok(())
}

fn run_alpha_beta(config: &Config) -> anyhow::Result<()> {
    let (tree, values) = scenario::alpha_beta_tree();
    let mut stats = Stats::default();
    let depth = config.depth.unwrap_or(3);

    let value = alpha_beta_search(
        &tree,
        &values,
        "A",
        depth,
        i32::MIN,
        i32::MAX,
        config.player,
        &mut stats,
    )?;
    println!("Best achievable value for root A: {value}");
    stats.print();
    Ok(())
}
