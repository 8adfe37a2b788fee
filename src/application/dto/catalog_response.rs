use crate::application::use_cases::AssembledCatalog;

/// CatalogResponse - Internal response DTO for the catalog generation use case
///
/// Both texts are rendered before anything is written, so a failed build
/// never leaves a partial catalog behind.
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    pub assembled: AssembledCatalog,
    /// Rendered artifact catalog, absent in dry-run mode
    pub artifacts_text: Option<String>,
    /// Rendered license catalog, absent in dry-run mode
    pub licenses_text: Option<String>,
    pub scope_count: usize,
    pub artifact_count: usize,
}

impl CatalogResponse {
    pub fn is_rendered(&self) -> bool {
        self.artifacts_text.is_some() && self.licenses_text.is_some()
    }
}
