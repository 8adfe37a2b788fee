use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fmt;

const UNKNOWN_SCOPE_NAME: &str = "unknown";

/// A named partition of the dependency graph
///
/// Precedence is positional: the variant first, then additions in the
/// order the caller supplied them, then `Unknown` last. The variant and
/// additions carry no intrinsic ordering of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolveScope {
    /// The mandatory base scope, e.g. a build flavor such as `release`
    Variant(String),
    /// An optional extra scope such as `test`
    Addition(String),
    /// Artifacts that could not be attributed to any requested scope
    Unknown,
}

impl ResolveScope {
    pub fn variant(name: impl Into<String>) -> Result<Self> {
        Ok(Self::Variant(validate_scope_name(name.into())?))
    }

    pub fn addition(name: impl Into<String>) -> Result<Self> {
        Ok(Self::Addition(validate_scope_name(name.into())?))
    }

    pub fn name(&self) -> &str {
        match self {
            ResolveScope::Variant(name) | ResolveScope::Addition(name) => name,
            ResolveScope::Unknown => UNKNOWN_SCOPE_NAME,
        }
    }
}

impl fmt::Display for ResolveScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn validate_scope_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation {
            message: "Scope name cannot be blank".to_string(),
        }
        .into());
    }
    if name.contains(char::is_whitespace) {
        return Err(CatalogError::Validation {
            message: format!("Scope name '{}' must not contain whitespace", name),
        }
        .into());
    }
    if name == UNKNOWN_SCOPE_NAME {
        return Err(CatalogError::Validation {
            message: format!("Scope name '{}' is reserved", UNKNOWN_SCOPE_NAME),
        }
        .into());
    }
    Ok(name)
}
