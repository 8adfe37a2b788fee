use crate::catalog::domain::{
    ArtifactDefinition, AssemblyStyle, Catalog, GroupedDefinitions, PlainLicense,
    ScopedDefinitions,
};
use crate::ports::outbound::CatalogFormat;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// JsonCatalogFormat adapter writing pretty-printed JSON
///
/// Output uses two-space indentation and ends with a newline.
pub struct JsonCatalogFormat;

impl JsonCatalogFormat {
    pub fn new() -> Self {
        Self
    }

    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut text =
            serde_json::to_string_pretty(value).context("Failed to serialize catalog as JSON")?;
        text.push('\n');
        Ok(text)
    }
}

impl Default for JsonCatalogFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormat for JsonCatalogFormat {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn serialize_catalog(&self, catalog: &Catalog) -> Result<String> {
        match catalog {
            Catalog::Flatten(definitions) => Self::render(definitions),
            Catalog::StructuredWithoutScope(grouped) => Self::render(grouped),
            Catalog::StructuredWithScope(scoped) => Self::render(scoped),
        }
    }

    fn serialize_licenses(&self, licenses: &[PlainLicense]) -> Result<String> {
        Self::render(licenses)
    }

    fn deserialize_catalog(&self, text: &str, style: AssemblyStyle) -> Result<Catalog> {
        let catalog = match style {
            AssemblyStyle::Flatten => {
                Catalog::Flatten(serde_json::from_str::<Vec<ArtifactDefinition>>(text)?)
            }
            AssemblyStyle::StructuredWithoutScope => {
                Catalog::StructuredWithoutScope(serde_json::from_str::<GroupedDefinitions>(text)?)
            }
            AssemblyStyle::StructuredWithScope => {
                Catalog::StructuredWithScope(serde_json::from_str::<ScopedDefinitions>(text)?)
            }
        };
        Ok(catalog)
    }

    fn deserialize_licenses(&self, text: &str) -> Result<Vec<PlainLicense>> {
        Ok(serde_json::from_str(text)?)
    }
}
