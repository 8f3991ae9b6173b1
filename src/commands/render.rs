//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::ExportError;
use crate::format::DisplayConfig;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, ExportError> {
        match command {
            Commands::Render {
                listing,
                format,
                output,
                styles,
                hide_optional,
                hide_group_id,
                hide_artifact_id,
                hide_version,
                hide_types,
                hide_classifiers,
                hide_scope,
                hide_versions_on_edges,
                keep_self_references,
                repeat_transitive_dependencies,
            } => RenderOptions::builder()
                .with_listing(listing)
                .with_format(format)
                .with_output(output)
                .with_styles(styles)
                .with_display(DisplayConfig {
                    show_optional: !hide_optional,
                    show_group_id: !hide_group_id,
                    show_artifact_id: !hide_artifact_id,
                    show_version: !hide_version,
                    show_types: !hide_types,
                    show_classifiers: !hide_classifiers,
                    show_scope: !hide_scope,
                    versions_on_edges: !hide_versions_on_edges,
                })
                .with_omit_self_references(!keep_self_references)
                .with_repeat_transitive_dependencies(repeat_transitive_dependencies)
                .build(),
            _ => Err(ExportError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
