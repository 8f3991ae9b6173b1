//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::format::DisplayConfig;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub listing: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub styles: Vec<PathBuf>,
    pub display: DisplayConfig,
    pub omit_self_references: bool,
    pub repeat_transitive_dependencies: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

impl_builder! {
    RenderOptionsBuilder => RenderOptions {
        with_listing => listing: PathBuf,
        with_format => format: GraphFormat,
        with_output => output: Option<PathBuf>,
        with_styles => styles: Vec<PathBuf>,
        with_display => display: DisplayConfig,
        with_omit_self_references => omit_self_references: bool,
        with_repeat_transitive_dependencies => repeat_transitive_dependencies: bool,
    }
}
