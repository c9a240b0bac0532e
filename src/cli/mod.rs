//! CLI module for the Recipe Gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Recipe Gateway - recipe search and recommendations over Spoonacular
#[derive(Parser)]
#[command(name = "recipe-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
