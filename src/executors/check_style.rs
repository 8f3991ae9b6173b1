//! Check-style command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::CheckStyleOptions;
use crate::executors::CommandExecutor;
use crate::style::StyleConfiguration;
use crate::utils::pluralize;

pub struct CheckStyleExecutor;

impl CommandExecutor for CheckStyleExecutor {
    type Config = CheckStyleOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking {} (built-in default plus {})...",
            style("🎨").cyan(),
            pluralize(config.styles.len() + 1, "style layer"),
            pluralize(config.styles.len(), "user layer")
        );

        let merged = StyleConfiguration::load_layers(&config.styles)
            .wrap_err("Style configuration is invalid")?;

        println!(
            "{} Merged configuration carries {}, {} and {}",
            style("✓").green(),
            pluralize(merged.node_rule_count(), "node rule"),
            pluralize(merged.edge_rule_count(), "edge rule"),
            pluralize(merged.resolution_count(), "resolution style")
        );

        Ok(())
    }
}
