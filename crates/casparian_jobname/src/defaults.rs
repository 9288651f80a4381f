//! Canonical default values for job naming.

pub const DEFAULT_MAX_JOB_NAME_LEN: usize = 175;
pub const DEFAULT_MAX_SOURCE_LIST_LEN: usize = 60;
pub const DEFAULT_ELLIPSIS: &str = "...";

pub const LIST_SEPARATOR: &str = ", ";
pub const COMPOSITE_SEPARATOR: &str = "+";
pub const NULL_IDENTIFIER: &str = "null";
