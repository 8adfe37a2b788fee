use crate::catalog::domain::{
    ArtifactDefinition, AssemblyStyle, Catalog, GroupedDefinitions, PlainLicense,
    ScopedDefinitions,
};
use crate::ports::outbound::CatalogFormat;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// YamlCatalogFormat adapter writing block-style YAML
pub struct YamlCatalogFormat;

impl YamlCatalogFormat {
    pub fn new() -> Self {
        Self
    }

    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_yaml_ng::to_string(value).context("Failed to serialize catalog as YAML")
    }
}

impl Default for YamlCatalogFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormat for YamlCatalogFormat {
    fn extension(&self) -> &'static str {
        "yml"
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
                Catalog::Flatten(serde_yaml_ng::from_str::<Vec<ArtifactDefinition>>(text)?)
            }
            AssemblyStyle::StructuredWithoutScope => Catalog::StructuredWithoutScope(
                serde_yaml_ng::from_str::<GroupedDefinitions>(text)?,
            ),
            AssemblyStyle::StructuredWithScope => {
                Catalog::StructuredWithScope(serde_yaml_ng::from_str::<ScopedDefinitions>(text)?)
            }
        };
        Ok(catalog)
    }

    fn deserialize_licenses(&self, text: &str) -> Result<Vec<PlainLicense>> {
        Ok(serde_yaml_ng::from_str(text)?)
    }
}
