//! Check-style command configuration

use std::path::PathBuf;

use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct CheckStyleOptions {
    pub styles: Vec<PathBuf>,
}

impl CheckStyleOptions {
    pub fn builder() -> CheckStyleOptionsBuilder {
        CheckStyleOptionsBuilder::new()
    }
}

impl_builder! {
    CheckStyleOptionsBuilder => CheckStyleOptions {
        with_styles => styles: Vec<PathBuf>,
    }
}
