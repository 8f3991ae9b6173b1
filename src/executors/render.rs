//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::RenderOptions;
use crate::executors::CommandExecutor;
use crate::format::RendererSet;
use crate::listing::ResolutionListing;
use crate::style::StyleConfiguration;
use crate::utils::pluralize;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let styles = StyleConfiguration::load_layers(&config.styles)
            .wrap_err("Failed to load style configuration")?;

        let listing = ResolutionListing::from_file(&config.listing)
            .wrap_err("Failed to read resolution listing")?;

        let renderers = RendererSet::for_format(
            config.format,
            config.display.clone(),
            styles,
            config.repeat_transitive_dependencies,
        );
        let builder = listing.build_graph(
            renderers.node_renderer.as_ref(),
            renderers.edge_renderer.as_ref(),
            config.omit_self_references,
        );

        eprintln!(
            "{} Built graph with {} and {}",
            style("ℹ").blue(),
            pluralize(builder.node_count(), "node"),
            pluralize(builder.edge_count(), "edge")
        );

        let document = renderers
            .formatter
            .format(listing.graph_name(), builder.graph())
            .wrap_err("Failed to format graph")?;

        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        output_writer
            .write_all(document.as_bytes())
            .into_diagnostic()
            .wrap_err("Failed to write graph document")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph document")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
