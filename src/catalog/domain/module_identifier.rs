use std::fmt;

const UNKNOWN_FRAGMENT: &str = "unknown";

/// Version token of a resolved module
///
/// Ordering is plain lexical string ordering, so `"10.0" < "2.0"`.
/// "Maximum version wins" during deduplication uses this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle the dependency resolver uses to identify a component
///
/// The core never interprets its content; it is only compared and hashed
/// to join fetched manifests back to their modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A module resolved from a dependency configuration
///
/// Identity for deduplication is `(group, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModuleIdentifier {
    group: String,
    name: String,
    version: VersionString,
    component: ComponentRef,
}

impl ResolvedModuleIdentifier {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: VersionString,
        component: ComponentRef,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version,
            component,
        }
    }

    /// Builds a best-effort identifier from a resolver display name
    /// such as `group:name:version`
    ///
    /// Missing fragments become `"unknown"`; fragments past the third are ignored.
    pub fn from_display_name(display_name: &str, component: ComponentRef) -> Self {
        let fragments: Vec<&str> = if display_name.is_empty() {
            Vec::new()
        } else {
            display_name.split(':').collect()
        };

        let fragment = |idx: usize| {
            fragments
                .get(idx)
                .copied()
                .unwrap_or(UNKNOWN_FRAGMENT)
                .to_string()
        };

        Self {
            group: fragment(0),
            name: fragment(1),
            version: VersionString::new(fragment(2)),
            component,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &VersionString {
        &self.version
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    /// Deduplication key
    pub fn coordinates(&self) -> (String, String) {
        (self.group.clone(), self.name.clone())
    }
}

impl fmt::Display for ResolvedModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
