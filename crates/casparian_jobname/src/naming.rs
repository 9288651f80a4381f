//! Job name assembly.
//!
//! ```text
//! WordCount [(2/5) input_1, input_2] -> output_1232_ABCDEF123456789...
//! ```

use crate::abbreviate::abbreviate;
use crate::config::NamingConfig;
use crate::defaults::LIST_SEPARATOR;
use crate::descriptor::{SourceDescriptor, StepMetadata};
use crate::error::Result;
use crate::extract::{FallbackResolver, IdentifierExtractor};
use std::fmt;
use std::sync::Arc;

/// Builds bounded, human-readable names for pipeline steps.
#[derive(Clone, Default)]
pub struct JobNamer {
    config: NamingConfig,
    fallback: Option<Arc<FallbackResolver>>,
}

impl JobNamer {
    /// Create a namer with a validated configuration.
    pub fn new(config: NamingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fallback: None,
        })
    }

    /// Install a resolver for generic endpoints the default rules name poorly.
    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&SourceDescriptor, bool) -> Option<String> + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    fn extractor(&self) -> IdentifierExtractor<'_> {
        match self.fallback.as_deref() {
            Some(fallback) => IdentifierExtractor::with_fallback(fallback),
            None => IdentifierExtractor::new(),
        }
    }

    /// Display identifiers for `descriptors`, in input order.
    pub fn identifiers(
        &self,
        descriptors: &[SourceDescriptor],
        strip_temp_suffix: bool,
    ) -> Vec<String> {
        let extractor = self.extractor();
        descriptors
            .iter()
            .map(|descriptor| extractor.extract(descriptor, strip_temp_suffix))
            .collect()
    }

    /// Joined source identifiers, capped at `max_source_list_len`.
    ///
    /// Sources are usually temporary outputs of an upstream step, so their
    /// generated suffixes are stripped.
    pub fn source_list(&self, step: &StepMetadata) -> String {
        let joined = self.identifiers(&step.sources, true).join(LIST_SEPARATOR);
        abbreviate(&joined, self.config.max_source_list_len, &self.config.ellipsis).into_owned()
    }

    /// Joined sink identifiers. Sinks keep their full names.
    pub fn sink_list(&self, step: &StepMetadata) -> String {
        self.identifiers(&step.sinks, false).join(LIST_SEPARATOR)
    }

    /// Full job name for `step`, capped at `max_job_name_len`.
    pub fn format_job_name(&self, step: &StepMetadata) -> String {
        let name = format!(
            "{} [({}/{}) {}] -> {}",
            step.pipeline_name,
            step.step_index,
            step.step_count,
            self.source_list(step),
            self.sink_list(step),
        );
        abbreviate(&name, self.config.max_job_name_len, &self.config.ellipsis).into_owned()
    }
}

impl fmt::Debug for JobNamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobNamer")
            .field("config", &self.config)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// Name `step` with the default configuration.
pub fn format_job_name(step: &StepMetadata) -> String {
    JobNamer::default().format_job_name(step)
}
