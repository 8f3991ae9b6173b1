//! Artifact model handed over by the dependency resolver
//!
//! The resolver is an external collaborator: it walks a build tool's
//! dependency tree and produces `(from, to)` pairs of artifacts that are
//! already tagged with a resolution status. This module only models what
//! arrives on that boundary.

mod artifact;
mod version;

pub use artifact::{Artifact, ArtifactBuilder, Resolution};
pub use version::abbreviate_version;
