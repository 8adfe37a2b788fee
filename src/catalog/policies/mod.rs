mod configuration_naming;
mod exclusion_policy;

pub use configuration_naming::{ConfigurationNaming, DEFAULT_CONFIGURATION_NAMES};
pub use exclusion_policy::{ExclusionPolicy, ACCEPTED_ARTIFACT_TYPES};
