use crate::application::dto::OutputFormat;
use crate::catalog::domain::{AssemblyStyle, ResolveScope};

/// CatalogRequest - Internal request DTO for the catalog generation use case
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    pub variant: ResolveScope,
    /// Additional scopes in precedence order
    pub additional_scopes: Vec<ResolveScope>,
    /// Configuration names combined with scope names
    pub configuration_names: Vec<String>,
    pub exclude_groups: Vec<String>,
    /// `group:name` entries
    pub exclude_artifacts: Vec<String>,
    pub style: AssemblyStyle,
    pub format: OutputFormat,
    /// Validate, resolve and assemble without rendering files
    pub dry_run: bool,
}

impl CatalogRequest {
    /// Request with default configuration names, no exclusions, scoped JSON output
    pub fn new(variant: ResolveScope, additional_scopes: Vec<ResolveScope>) -> Self {
        Self {
            variant,
            additional_scopes,
            configuration_names: crate::catalog::policies::DEFAULT_CONFIGURATION_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            exclude_groups: Vec::new(),
            exclude_artifacts: Vec::new(),
            style: AssemblyStyle::StructuredWithScope,
            format: OutputFormat::Json,
            dry_run: false,
        }
    }
}
