//! Job naming configuration
//!
//! Read from the `[job_naming]` table of a Casparian `config.toml`. The
//! caller supplies the text; this module does not touch the filesystem.

use crate::defaults::{DEFAULT_ELLIPSIS, DEFAULT_MAX_JOB_NAME_LEN, DEFAULT_MAX_SOURCE_LIST_LEN};
use crate::error::{NamingError, Result};
use serde::{Deserialize, Serialize};

/// Length caps and ellipsis marker used when assembling job names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Cap on the full job name
    #[serde(default = "default_max_job_name_len")]
    pub max_job_name_len: usize,

    /// Cap on the joined source list embedded in the name
    #[serde(default = "default_max_source_list_len")]
    pub max_source_list_len: usize,

    /// Marker appended when text is truncated
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,
}

fn default_max_job_name_len() -> usize {
    DEFAULT_MAX_JOB_NAME_LEN
}

fn default_max_source_list_len() -> usize {
    DEFAULT_MAX_SOURCE_LIST_LEN
}

fn default_ellipsis() -> String {
    DEFAULT_ELLIPSIS.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_job_name_len: default_max_job_name_len(),
            max_source_list_len: default_max_source_list_len(),
            ellipsis: default_ellipsis(),
        }
    }
}

/// Root config structure that may contain a [job_naming] section
#[derive(Debug, Default, Deserialize)]
struct RootConfig {
    #[serde(default)]
    job_naming: Option<NamingConfig>,
}

impl NamingConfig {
    /// Parse the `[job_naming]` table out of a TOML document.
    ///
    /// A missing table or missing keys fall back to the defaults. The
    /// result is validated before it is returned.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let root: RootConfig = toml::from_str(text)?;
        let config = root.job_naming.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Reject caps that leave no room for text before the ellipsis marker.
    pub fn validate(&self) -> Result<()> {
        let marker = self.ellipsis.chars().count();
        check_cap("max_job_name_len", self.max_job_name_len, marker)?;
        check_cap("max_source_list_len", self.max_source_list_len, marker)?;
        Ok(())
    }
}

fn check_cap(field: &'static str, cap: usize, marker: usize) -> Result<()> {
    if cap <= marker {
        return Err(NamingError::InvalidConfig {
            field,
            value: cap.to_string(),
            reason: format!("must be greater than the ellipsis width ({})", marker),
        });
    }
    Ok(())
}
