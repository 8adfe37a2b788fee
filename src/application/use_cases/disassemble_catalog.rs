use crate::catalog::domain::{ArtifactDefinition, AssemblyStyle, Catalog, PlainLicense};
use crate::ports::outbound::CatalogFormat;
use crate::shared::Result;
use anyhow::Context;
use std::collections::BTreeMap;

/// CatalogDisassembler - re-reads committed catalog texts
///
/// Used to compare a previously written catalog with a freshly assembled one.
pub struct CatalogDisassembler<'a> {
    format: &'a dyn CatalogFormat,
}

impl<'a> CatalogDisassembler<'a> {
    pub fn new(format: &'a dyn CatalogFormat) -> Self {
        Self { format }
    }

    pub fn disassemble_artifacts(&self, text: &str, style: AssemblyStyle) -> Result<Catalog> {
        self.format
            .deserialize_catalog(text, style)
            .with_context(|| format!("Failed to read {} artifact catalog", style))
    }

    pub fn disassemble_licenses(&self, text: &str) -> Result<Vec<PlainLicense>> {
        self.format
            .deserialize_licenses(text)
            .context("Failed to read license catalog")
    }

    /// Definitions keyed by `group:name`, whatever the catalog style
    ///
    /// Scope information is dropped. A module listed under several scopes
    /// keeps its first definition.
    pub fn qualified_definitions(catalog: &Catalog) -> BTreeMap<String, ArtifactDefinition> {
        let mut qualified = BTreeMap::new();
        let mut insert = |group: Option<&str>, definition: &ArtifactDefinition| {
            let key = match group {
                Some(group) => format!("{}:{}", group, definition.key),
                None => definition.key.clone(),
            };
            qualified
                .entry(key.clone())
                .or_insert_with(|| definition.clone().with_key(key));
        };

        match catalog {
            Catalog::Flatten(definitions) => {
                for definition in definitions {
                    insert(None, definition);
                }
            }
            Catalog::StructuredWithoutScope(grouped) => {
                for (group, definitions) in grouped {
                    for definition in definitions {
                        insert(Some(group.as_str()), definition);
                    }
                }
            }
            Catalog::StructuredWithScope(scoped) => {
                for (_, grouped) in scoped.iter() {
                    for (group, definitions) in grouped {
                        for definition in definitions {
                            insert(Some(group.as_str()), definition);
                        }
                    }
                }
            }
        }

        qualified
    }
}
