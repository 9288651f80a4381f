//! Human-readable job names for Casparian Flow pipeline steps.
//!
//! Planner-generated job names are mostly random IDs. This crate derives a
//! short, deterministic label from a step's position in its pipeline and
//! the endpoints it reads and writes:
//!
//! ```text
//! <pipeline> [(<step>/<steps>) <sources>] -> <sinks>
//! ```
//!
//! Sources are capped at 60 characters and the whole name at 175, both
//! with an ellipsis marker. Naming is pure and infallible; only
//! configuration can be rejected.

pub mod abbreviate;
pub mod canonical;
pub mod config;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod extract;
pub mod naming;
pub mod paths;
pub mod strategy;

pub use abbreviate::abbreviate;
pub use canonical::{canonical_name, resolve_path_name};
pub use config::NamingConfig;
pub use descriptor::{
    CompositeMember, DescriptorKind, SourceDescriptor, StepMetadata, SyntheticKind,
};
pub use error::{NamingError, Result};
pub use extract::{extract_identifier, FallbackResolver, IdentifierExtractor};
pub use naming::{format_job_name, JobNamer};
pub use paths::leaf_component;
pub use strategy::{JobNameTarget, RenameJobStrategy, StepStrategy};
