use license_catalog::prelude::*;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Mock DependencyResolver backed by in-memory configurations
///
/// Every dependency gets a manifest at `/repo/<group>/<name>-<version>.pom`
/// unless it is registered with `without_manifest`.
#[derive(Default, Clone)]
pub struct MockDependencyResolver {
    pub configurations: BTreeMap<String, Vec<ResolvedDependency>>,
    pub manifests: Vec<FetchedManifest>,
    /// Manifests surfaced without any configuration claiming them
    pub orphan_manifests: Vec<FetchedManifest>,
    pub fetch_calls: Arc<Mutex<Vec<Vec<ComponentRef>>>>,
}

impl MockDependencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `group:name:version` coordinates to a configuration
    pub fn with_configuration(mut self, name: &str, coordinates: &[&str]) -> Self {
        let dependencies: Vec<ResolvedDependency> = coordinates
            .iter()
            .map(|coordinate| Self::dependency(coordinate, "jar"))
            .collect();
        for dependency in &dependencies {
            self.register_manifest(dependency);
        }
        self.configurations
            .entry(name.to_string())
            .or_default()
            .extend(dependencies);
        self
    }

    /// Adds a dependency with an explicit artifact type
    pub fn with_typed_dependency(mut self, name: &str, coordinate: &str, artifact_type: &str) -> Self {
        let dependency = Self::dependency(coordinate, artifact_type);
        self.register_manifest(&dependency);
        self.configurations
            .entry(name.to_string())
            .or_default()
            .push(dependency);
        self
    }

    /// Drops the manifest of a module so the fetch comes back incomplete
    pub fn without_manifest(mut self, coordinate: &str) -> Self {
        self.manifests
            .retain(|manifest| manifest.component.as_str() != coordinate);
        self
    }

    pub fn with_orphan_manifest(mut self, display_name: &str) -> Self {
        self.orphan_manifests.push(FetchedManifest::new(
            ComponentRef::new(format!("orphan:{}", display_name)),
            display_name,
            manifest_path(display_name),
        ));
        self
    }

    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }

    fn dependency(coordinate: &str, artifact_type: &str) -> ResolvedDependency {
        let parts: Vec<&str> = coordinate.split(':').collect();
        assert_eq!(parts.len(), 3, "expected group:name:version, got {}", coordinate);
        ResolvedDependency::new(
            ResolvedModuleIdentifier::new(
                parts[0],
                parts[1],
                VersionString::new(parts[2]),
                ComponentRef::new(coordinate),
            ),
            artifact_type,
        )
    }

    fn register_manifest(&mut self, dependency: &ResolvedDependency) {
        let component = dependency.id.component().clone();
        if self.manifests.iter().any(|m| m.component == component) {
            return;
        }
        self.manifests.push(FetchedManifest::new(
            component.clone(),
            component.as_str(),
            manifest_path(component.as_str()),
        ));
    }
}

/// Path the mock reports for a manifest of the given coordinates
pub fn manifest_path(coordinate: &str) -> String {
    format!("/repo/{}.pom", coordinate.replace(':', "/"))
}

#[async_trait::async_trait]
impl DependencyResolver for MockDependencyResolver {
    async fn find_configurations(
        &self,
        candidate_names: &[String],
    ) -> Result<Vec<ConfigurationHandle>> {
        Ok(candidate_names
            .iter()
            .filter(|name| self.configurations.contains_key(name.as_str()))
            .map(|name| ConfigurationHandle::new(name.clone()))
            .collect())
    }

    async fn resolve_modules(
        &self,
        configuration: &ConfigurationHandle,
    ) -> Result<Vec<ResolvedDependency>> {
        self.configurations
            .get(&configuration.name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock resolver has no configuration {}", configuration.name))
    }

    async fn fetch_manifests(&self, components: &[ComponentRef]) -> Result<Vec<FetchedManifest>> {
        self.fetch_calls.lock().unwrap().push(components.to_vec());
        Ok(self
            .manifests
            .iter()
            .filter(|manifest| components.contains(&manifest.component))
            .chain(self.orphan_manifests.iter())
            .cloned()
            .collect())
    }
}
