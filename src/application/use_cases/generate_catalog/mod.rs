use crate::application::dto::{CatalogRequest, CatalogResponse};
use crate::application::factories::FormatFactory;
use crate::application::use_cases::{ArtifactAssembler, ScopeResolver};
use crate::catalog::policies::{ConfigurationNaming, ExclusionPolicy};
use crate::ports::outbound::{
    DependencyResolver, LicenseClassifier, ManifestReader, ProgressReporter,
};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// GenerateCatalogUseCase - Core use case for license catalog generation
///
/// This use case orchestrates scope resolution, assembly and rendering using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `R` - DependencyResolver implementation
/// * `M` - ManifestReader implementation
/// * `C` - LicenseClassifier implementation
/// * `P` - ProgressReporter implementation
pub struct GenerateCatalogUseCase<R, M, C, P> {
    resolver: R,
    manifest_reader: M,
    classifier: C,
    progress_reporter: P,
}

impl<R, M, C, P> GenerateCatalogUseCase<R, M, C, P>
where
    R: DependencyResolver,
    M: ManifestReader,
    C: LicenseClassifier,
    P: ProgressReporter,
{
    /// Creates a new GenerateCatalogUseCase with injected dependencies
    pub fn new(resolver: R, manifest_reader: M, classifier: C, progress_reporter: P) -> Self {
        Self {
            resolver,
            manifest_reader,
            classifier,
            progress_reporter,
        }
    }

    /// Executes the catalog generation use case
    ///
    /// # Returns
    /// CatalogResponse with the assembled catalog and, unless dry-run, both
    /// rendered texts
    pub async fn execute(&self, request: CatalogRequest) -> Result<CatalogResponse> {
        // Step 1: Validate request and build policies
        let (naming, exclusions) = Self::build_policies(&request)?;

        // Step 2: Resolve scopes to artifacts
        self.report_requested_scopes(&request);
        let scoped = ScopeResolver::new(
            &self.resolver,
            &self.manifest_reader,
            &self.progress_reporter,
            naming,
            exclusions,
        )
        .analyze(&request.variant, &request.additional_scopes)
        .await?;

        // Step 3: Assemble definitions and capture licenses
        let assembled = ArtifactAssembler::new(&self.classifier).assemble(&scoped, request.style);
        self.progress_reporter.report(&format!(
            "📚 Assembled {} artifact definition(s) referencing {} license(s)",
            assembled.catalog.definition_count(),
            assembled.licenses.len()
        ));

        let scope_count = scoped.len();
        let artifact_count = scoped.artifact_count();

        // Early return for dry-run mode (nothing is rendered)
        if request.dry_run {
            self.progress_reporter
                .report_completion("Success: Catalog resolved. No files were written.");
            return Ok(CatalogResponse {
                assembled,
                artifacts_text: None,
                licenses_text: None,
                scope_count,
                artifact_count,
            });
        }

        // Step 4: Render both catalogs before anything is written
        self.progress_reporter
            .report(FormatFactory::progress_message(request.format));
        let format = FormatFactory::create(request.format);
        let artifacts_text = assembled.catalog_text(format.as_ref())?;
        let licenses_text = assembled.license_catalog_text(format.as_ref())?;

        Ok(CatalogResponse {
            assembled,
            artifacts_text: Some(artifacts_text),
            licenses_text: Some(licenses_text),
            scope_count,
            artifact_count,
        })
    }

    fn build_policies(request: &CatalogRequest) -> Result<(ConfigurationNaming, ExclusionPolicy)> {
        if request.configuration_names.iter().all(|name| name.trim().is_empty()) {
            return Err(CatalogError::Validation {
                message: "At least one configuration name is required".to_string(),
            }
            .into());
        }

        let naming = ConfigurationNaming::new(
            request
                .configuration_names
                .iter()
                .filter(|name| !name.trim().is_empty())
                .cloned(),
        );
        let exclusions = ExclusionPolicy::new(
            request.exclude_groups.iter().cloned(),
            request.exclude_artifacts.iter().cloned(),
        )?;

        Ok((naming, exclusions))
    }

    fn report_requested_scopes(&self, request: &CatalogRequest) {
        let mut names = vec![request.variant.name().to_string()];
        names.extend(
            request
                .additional_scopes
                .iter()
                .map(|scope| scope.name().to_string()),
        );
        self.progress_reporter
            .report(&format!("🔎 Resolving scope(s): {}", names.join(", ")));
    }
}
