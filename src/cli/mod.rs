//! CLI entrypoints

pub mod serve;

use clap::{Parser, Subcommand};

/// Delivery forms API - validated input binding for the delivery app
#[derive(Parser)]
#[command(name = "delivery-forms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
