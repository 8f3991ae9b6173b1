use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "depgraph-export",
    about = "Render resolved dependency graphs as DOT, GML, JSON, Mermaid, PlantUML or text trees",
    long_about = "depgraph-export turns the output of a dependency resolver - a listing of \
                  resolved (from, to) artifact pairs - into a textual graph document. Six output \
                  formats are supported, and node and edge styling can be customized through \
                  layered JSON style configurations.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a resolution listing into a graph document
    ///
    /// Reads a pre-built dependency graph from a JSON listing, renders every
    /// node and edge with the renderers of the selected output format, and
    /// writes the assembled document to a file or stdout.
    #[command(
        long_about = "Render a resolution listing into a graph document. The listing is consumed \
                      in traversal order: nodes are deduplicated by their natural key (the first \
                      rendering of a label wins), self-referential edges are dropped unless \
                      --keep-self-references is given, and the finished node and edge collections \
                      are assembled into the selected output format."
    )]
    Render {
        /// Resolution listing produced by the dependency resolver
        #[arg(value_name = "LISTING", env = "DEPGRAPH_EXPORT_LISTING")]
        listing: PathBuf,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_FORMAT,
            env = "DEPGRAPH_EXPORT_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DEPGRAPH_EXPORT_OUTPUT")]
        output: Option<PathBuf>,

        /// Style layer merged over the built-in default (repeatable, in order)
        #[arg(long = "style", value_name = "STYLE", env = "DEPGRAPH_EXPORT_STYLE")]
        styles: Vec<PathBuf>,

        /// Hide the optional marker in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_OPTIONAL")]
        hide_optional: bool,

        /// Hide group ids in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_GROUP_ID")]
        hide_group_id: bool,

        /// Hide artifact ids in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_ARTIFACT_ID")]
        hide_artifact_id: bool,

        /// Hide versions in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_VERSION")]
        hide_version: bool,

        /// Hide packaging types in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_TYPES")]
        hide_types: bool,

        /// Hide classifiers in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_CLASSIFIERS")]
        hide_classifiers: bool,

        /// Hide scopes in node labels
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_SCOPE")]
        hide_scope: bool,

        /// Do not print conflict versions on edges
        #[arg(long, env = "DEPGRAPH_EXPORT_HIDE_VERSIONS_ON_EDGES")]
        hide_versions_on_edges: bool,

        /// Keep self-referential edges instead of dropping them
        #[arg(long, env = "DEPGRAPH_EXPORT_KEEP_SELF_REFERENCES")]
        keep_self_references: bool,

        /// Expand a shared subtree at every encounter in the text tree
        #[arg(long, env = "DEPGRAPH_EXPORT_REPEAT_TRANSITIVE")]
        repeat_transitive_dependencies: bool,
    },

    /// Validate style configuration layers
    ///
    /// Loads the built-in default plus the given style files in order,
    /// reporting malformed style keys, unknown node shapes and missing
    /// resources, and prints a summary of the merged configuration.
    #[command(
        long_about = "Validate style configuration layers. Every file is loaded and merged onto \
                      the built-in default exactly as the render command would, so configuration \
                      errors (malformed style keys, unknown node shape ids, missing files) \
                      surface here instead of during a render."
    )]
    CheckStyle {
        /// Style layers merged over the built-in default, in order
        #[arg(value_name = "STYLE", env = "DEPGRAPH_EXPORT_STYLE")]
        styles: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Gml,
    Json,
    Mermaid,
    Puml,
    Text,
}
