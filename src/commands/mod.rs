//! Command implementations for the depgraph-export CLI
//!
//! This module contains the implementations for each CLI command:
//! - render: render a resolution listing into a graph document
//! - check-style: validate style configuration layers

pub mod check_style;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::CheckStyle { .. } => check_style::execute_check_style_command(command),
    }
}
