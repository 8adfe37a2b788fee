use crate::catalog::domain::{
    ComponentRef, ResolveScope, ResolvedArtifact, ResolvedModuleIdentifier, ScopedArtifacts,
};
use crate::catalog::policies::{ConfigurationNaming, ExclusionPolicy};
use crate::catalog::services::{ModuleCoordinates, ModuleDeduplicator, PomParser};
use crate::ports::outbound::{
    ConfigurationHandle, DependencyResolver, FetchedManifest, ManifestReader, ProgressReporter,
};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Deduplicated modules of one scope
type ScopeModules = BTreeMap<ModuleCoordinates, ResolvedModuleIdentifier>;

/// ScopeResolver - resolves requested scopes to artifacts with parsed manifests
///
/// Scopes are processed in precedence order (variant, then additions in the
/// order given). A module claimed by an earlier scope is never attributed to a
/// later one. Manifests of all claimed modules are fetched in a single batch.
///
/// `analyze` is all-or-nothing: any failure aborts the whole resolution and
/// no partial mapping is returned.
pub struct ScopeResolver<'a, R, M, P> {
    resolver: &'a R,
    manifest_reader: &'a M,
    progress_reporter: &'a P,
    naming: ConfigurationNaming,
    exclusions: ExclusionPolicy,
}

impl<'a, R, M, P> ScopeResolver<'a, R, M, P>
where
    R: DependencyResolver,
    M: ManifestReader,
    P: ProgressReporter,
{
    pub fn new(
        resolver: &'a R,
        manifest_reader: &'a M,
        progress_reporter: &'a P,
        naming: ConfigurationNaming,
        exclusions: ExclusionPolicy,
    ) -> Self {
        Self {
            resolver,
            manifest_reader,
            progress_reporter,
            naming,
            exclusions,
        }
    }

    /// Resolves `variant` and `additions` to artifacts grouped by scope
    ///
    /// # Returns
    /// Every requested scope in precedence order, possibly with no artifacts,
    /// followed by `ResolveScope::Unknown` if any manifest could not be
    /// attributed to a requested scope
    ///
    /// # Errors
    /// - `CatalogError::Validation` if `variant` is not a variant scope or an
    ///   addition is not an addition scope
    /// - `CatalogError::ResolutionFailure` if the resolver fails or a claimed
    ///   module has no manifest
    /// - `CatalogError::MalformedManifest` if any manifest fails to parse
    pub async fn analyze(
        &self,
        variant: &ResolveScope,
        additions: &[ResolveScope],
    ) -> Result<ScopedArtifacts> {
        let scopes = Self::ordered_scopes(variant, additions)?;

        let mut claimed: BTreeSet<ModuleCoordinates> = BTreeSet::new();
        let mut resolved: Vec<(ResolveScope, ScopeModules)> = Vec::with_capacity(scopes.len());

        for scope in scopes {
            let mut modules = self.resolve_scope(variant, &scope).await?;
            modules.retain(|coordinates, _| !claimed.contains(coordinates));
            claimed.extend(modules.keys().cloned());

            self.progress_reporter.report(&format!(
                "✅ Scope '{}': {} module(s)",
                scope,
                modules.len()
            ));
            resolved.push((scope, modules));
        }

        for exclusion in self.exclusions.unmatched_exclusions() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclusion '{}' did not match any dependencies.",
                exclusion
            ));
        }

        self.attach_manifests(resolved).await
    }

    /// Variant first, then each distinct addition in caller order
    fn ordered_scopes(variant: &ResolveScope, additions: &[ResolveScope]) -> Result<Vec<ResolveScope>> {
        if !matches!(variant, ResolveScope::Variant(_)) {
            return Err(CatalogError::Validation {
                message: format!("'{}' is not a variant scope", variant),
            }
            .into());
        }

        let mut scopes = vec![variant.clone()];
        for addition in additions {
            if !matches!(addition, ResolveScope::Addition(_)) {
                return Err(CatalogError::Validation {
                    message: format!("'{}' is not an additional scope", addition),
                }
                .into());
            }
            if addition.name() == variant.name() {
                return Err(CatalogError::Validation {
                    message: format!(
                        "Additional scope '{}' has the same name as the variant",
                        addition
                    ),
                }
                .into());
            }
            if !scopes.contains(addition) {
                scopes.push(addition.clone());
            }
        }

        Ok(scopes)
    }

    /// Resolves and deduplicates the modules of every configuration of `scope`
    async fn resolve_scope(
        &self,
        variant: &ResolveScope,
        scope: &ResolveScope,
    ) -> Result<ScopeModules> {
        let candidates = self.naming.candidates(variant, scope);
        let configurations: BTreeSet<ConfigurationHandle> = self
            .resolver
            .find_configurations(&candidates)
            .await?
            .into_iter()
            .collect();

        let mut modules = Vec::new();
        for configuration in &configurations {
            self.progress_reporter.report(&format!(
                "🔍 Configuration '{}' will be searched for scope '{}'",
                configuration.name, scope
            ));

            let dependencies = self.resolver.resolve_modules(configuration).await?;
            modules.extend(
                dependencies
                    .into_iter()
                    .filter(|dependency| {
                        self.exclusions.admits(
                            dependency.id.group(),
                            dependency.id.name(),
                            &dependency.artifact_type,
                        )
                    })
                    .map(|dependency| dependency.id),
            );
        }

        Ok(ModuleDeduplicator::dedup(modules))
    }

    /// Fetches manifests of all claimed modules in one batch and joins them back
    async fn attach_manifests(
        &self,
        resolved: Vec<(ResolveScope, ScopeModules)>,
    ) -> Result<ScopedArtifacts> {
        let mut owners: HashMap<&ComponentRef, (usize, &ResolvedModuleIdentifier)> = HashMap::new();
        let mut components: Vec<ComponentRef> = Vec::new();
        for (index, (_, modules)) in resolved.iter().enumerate() {
            for id in modules.values() {
                if owners.insert(id.component(), (index, id)).is_none() {
                    components.push(id.component().clone());
                }
            }
        }

        self.progress_reporter.report(&format!(
            "📦 Fetching manifests for {} module(s)...",
            components.len()
        ));
        let manifests = self.resolver.fetch_manifests(&components).await?;
        Self::ensure_all_fetched(&resolved, &manifests)?;

        let mut artifacts: Vec<Vec<ResolvedArtifact>> = vec![Vec::new(); resolved.len()];
        let mut unknown: Vec<ResolvedArtifact> = Vec::new();
        let mut seen: HashSet<&ComponentRef> = HashSet::new();
        let total = manifests.len();

        for (index, manifest) in manifests.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(&manifest.display_name));

            if !seen.insert(&manifest.component) {
                continue;
            }

            match owners.get(&manifest.component) {
                Some((scope_index, id)) => {
                    let artifact = self.parse_manifest((*id).clone(), manifest)?;
                    artifacts[*scope_index].push(artifact);
                }
                None => {
                    let id = ResolvedModuleIdentifier::from_display_name(
                        &manifest.display_name,
                        manifest.component.clone(),
                    );
                    unknown.push(self.parse_manifest(id, manifest)?);
                }
            }
        }

        let mut entries: Vec<(ResolveScope, Vec<ResolvedArtifact>)> = resolved
            .into_iter()
            .map(|(scope, _)| scope)
            .zip(artifacts)
            .collect();
        if !unknown.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} manifest(s) could not be attributed to a requested scope",
                unknown.len()
            ));
            entries.push((ResolveScope::Unknown, unknown));
        }

        Ok(ScopedArtifacts::new(entries))
    }

    fn ensure_all_fetched(
        resolved: &[(ResolveScope, ScopeModules)],
        manifests: &[FetchedManifest],
    ) -> Result<()> {
        let fetched: HashSet<&ComponentRef> = manifests.iter().map(|m| &m.component).collect();
        let missing: Vec<String> = resolved
            .iter()
            .flat_map(|(_, modules)| modules.values())
            .filter(|id| !fetched.contains(id.component()))
            .map(|id| id.to_string())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(CatalogError::ResolutionFailure {
            subject: format!("{} module(s)", missing.len()),
            details: format!("no manifest could be fetched for {}", missing.join(", ")),
        }
        .into())
    }

    fn parse_manifest(
        &self,
        id: ResolvedModuleIdentifier,
        manifest: &FetchedManifest,
    ) -> Result<ResolvedArtifact> {
        let content = self.manifest_reader.read_manifest(&manifest.path)?;
        let pom_file = PomParser::new(&manifest.path, id.to_string()).parse(&content)?;
        Ok(ResolvedArtifact::new(id, pom_file))
    }
}
