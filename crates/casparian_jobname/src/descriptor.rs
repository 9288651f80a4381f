//! Source/sink descriptors and step metadata supplied by the orchestrator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptor kinds whose identifiers are random and carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntheticKind {
    /// Discard sink
    Null,
    /// In-memory source
    Memory,
}

impl SyntheticKind {
    /// Fixed tag used in place of the identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntheticKind::Null => "NullSink",
            SyntheticKind::Memory => "MemorySource",
        }
    }
}

impl fmt::Display for SyntheticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of a composite descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum CompositeMember {
    Descriptor(SourceDescriptor),
    /// A child the orchestrator could not express as a descriptor.
    Foreign { type_name: String },
}

impl From<SourceDescriptor> for CompositeMember {
    fn from(descriptor: SourceDescriptor) -> Self {
        CompositeMember::Descriptor(descriptor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorKind {
    Synthetic(SyntheticKind),
    Composite(Vec<CompositeMember>),
    /// Backed by a hierarchical, filesystem-like location
    Path,
    Generic,
}

/// A data endpoint (source or sink) of a pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub temporary: bool,
    pub kind: DescriptorKind,
}

impl SourceDescriptor {
    pub fn generic(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            temporary: false,
            kind: DescriptorKind::Generic,
        }
    }

    pub fn path(identifier: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            temporary: false,
            kind: DescriptorKind::Path,
        }
    }

    pub fn synthetic(kind: SyntheticKind, identifier: Option<String>) -> Self {
        Self {
            identifier,
            temporary: false,
            kind: DescriptorKind::Synthetic(kind),
        }
    }

    pub fn composite<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CompositeMember>,
    {
        Self {
            identifier: None,
            temporary: false,
            kind: DescriptorKind::Composite(children.into_iter().map(Into::into).collect()),
        }
    }

    /// Mark the descriptor as a temporary intermediate.
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Clear the identifier, as some endpoints report none.
    pub fn without_identifier(mut self) -> Self {
        self.identifier = None;
        self
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub fn is_path(&self) -> bool {
        matches!(self.kind, DescriptorKind::Path)
    }
}

/// Per-invocation metadata about one step of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMetadata {
    pub pipeline_name: String,
    /// 1-based position of the step
    pub step_index: u32,
    pub step_count: u32,
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
    #[serde(default)]
    pub sinks: Vec<SourceDescriptor>,
}

impl StepMetadata {
    pub fn new(pipeline_name: impl Into<String>, step_index: u32, step_count: u32) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            step_index,
            step_count,
            sources: Vec::new(),
            sinks: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: SourceDescriptor) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_sink(mut self, sink: SourceDescriptor) -> Self {
        self.sinks.push(sink);
        self
    }
}
