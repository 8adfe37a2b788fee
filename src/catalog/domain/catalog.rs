use crate::catalog::domain::ArtifactDefinition;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Definitions grouped by module group, keyed by artifact name
pub type GroupedDefinitions = BTreeMap<String, Vec<ArtifactDefinition>>;

/// Shape of the artifact catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStyle {
    /// One sorted list, keys are `group:name`
    Flatten,
    /// group → definitions, all scopes merged
    StructuredWithoutScope,
    /// scope → group → definitions
    StructuredWithScope,
}

impl std::str::FromStr for AssemblyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flatten" | "flat" => Ok(AssemblyStyle::Flatten),
            "structured" | "structured-without-scope" => Ok(AssemblyStyle::StructuredWithoutScope),
            "structured-with-scope" | "scoped" => Ok(AssemblyStyle::StructuredWithScope),
            _ => Err(format!(
                "Invalid style: {}. Please specify 'flatten', 'structured' or 'structured-with-scope'",
                s
            )),
        }
    }
}

impl fmt::Display for AssemblyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyStyle::Flatten => write!(f, "flatten"),
            AssemblyStyle::StructuredWithoutScope => write!(f, "structured"),
            AssemblyStyle::StructuredWithScope => write!(f, "structured-with-scope"),
        }
    }
}

/// Scope name → grouped definitions, kept in scope precedence order
///
/// Serializes as a map in insertion order and deserializes preserving
/// document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopedDefinitions {
    entries: Vec<(String, GroupedDefinitions)>,
}

impl ScopedDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope_name: impl Into<String>, definitions: GroupedDefinitions) {
        self.entries.push((scope_name.into(), definitions));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupedDefinitions)> {
        self.entries
            .iter()
            .map(|(scope, definitions)| (scope.as_str(), definitions))
    }

    pub fn get(&self, scope_name: &str) -> Option<&GroupedDefinitions> {
        self.entries
            .iter()
            .find(|(scope, _)| scope == scope_name)
            .map(|(_, definitions)| definitions)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ScopedDefinitions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(scope, definitions)| (scope, definitions)))
    }
}

impl<'de> Deserialize<'de> for ScopedDefinitions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScopedVisitor;

        impl<'de> Visitor<'de> for ScopedVisitor {
            type Value = ScopedDefinitions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from scope name to grouped artifact definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut scoped = ScopedDefinitions::new();
                while let Some((scope, definitions)) =
                    access.next_entry::<String, GroupedDefinitions>()?
                {
                    scoped.push(scope, definitions);
                }
                Ok(scoped)
            }
        }

        deserializer.deserialize_map(ScopedVisitor)
    }
}

/// An assembled artifact catalog in one of the three shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Flatten(Vec<ArtifactDefinition>),
    StructuredWithoutScope(GroupedDefinitions),
    StructuredWithScope(ScopedDefinitions),
}

impl Catalog {
    pub fn style(&self) -> AssemblyStyle {
        match self {
            Catalog::Flatten(_) => AssemblyStyle::Flatten,
            Catalog::StructuredWithoutScope(_) => AssemblyStyle::StructuredWithoutScope,
            Catalog::StructuredWithScope(_) => AssemblyStyle::StructuredWithScope,
        }
    }

    /// Every definition in serialization order
    pub fn definitions(&self) -> Vec<&ArtifactDefinition> {
        match self {
            Catalog::Flatten(definitions) => definitions.iter().collect(),
            Catalog::StructuredWithoutScope(grouped) => grouped.values().flatten().collect(),
            Catalog::StructuredWithScope(scoped) => scoped
                .iter()
                .flat_map(|(_, grouped)| grouped.values().flatten())
                .collect(),
        }
    }

    pub fn definition_count(&self) -> usize {
        self.definitions().len()
    }
}
