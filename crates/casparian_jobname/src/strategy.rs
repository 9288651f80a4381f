//! Step strategy hook for the orchestrator.
//!
//! The orchestrator runs every registered [`StepStrategy`] once per step
//! before submitting the job. [`RenameJobStrategy`] replaces the default
//! name, which is full of generated IDs, with a readable one.

use crate::descriptor::StepMetadata;
use crate::naming::JobNamer;

/// Job configuration that accepts a display name.
pub trait JobNameTarget {
    fn set_job_name(&mut self, name: String);
}

impl JobNameTarget for Option<String> {
    fn set_job_name(&mut self, name: String) {
        *self = Some(name);
    }
}

/// Hook invoked for each step before its job is submitted.
pub trait StepStrategy {
    fn apply(
        &self,
        predecessors: &[StepMetadata],
        step: &StepMetadata,
        target: &mut dyn JobNameTarget,
    );
}

/// Assigns every step a name built by [`JobNamer`].
#[derive(Debug, Clone, Default)]
pub struct RenameJobStrategy {
    namer: JobNamer,
}

impl RenameJobStrategy {
    pub fn new(namer: JobNamer) -> Self {
        Self { namer }
    }

    pub fn namer(&self) -> &JobNamer {
        &self.namer
    }
}

impl StepStrategy for RenameJobStrategy {
    fn apply(
        &self,
        _predecessors: &[StepMetadata],
        step: &StepMetadata,
        target: &mut dyn JobNameTarget,
    ) {
        let name = self.namer.format_job_name(step);
        tracing::debug!(
            pipeline = %step.pipeline_name,
            step_index = step.step_index,
            step_count = step.step_count,
            job_name = %name,
            "assigned job name"
        );
        target.set_job_name(name);
    }
}
