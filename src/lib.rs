pub mod algorithm;
pub mod common;
pub mod config;
pub mod graph;
pub mod scenario;
pub mod stat;
pub mod tree;
