use crate::catalog::domain::{ComponentRef, ResolvedModuleIdentifier, VersionString};
use crate::ports::outbound::{
    ConfigurationHandle, DependencyResolver, FetchedManifest, ResolvedDependency,
};
use crate::shared::error::CatalogError;
use crate::shared::security::{safe_read_to_string, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Maximum number of concurrent manifest lookups
const MAX_CONCURRENT_LOOKUPS: usize = 16;

/// Resolution snapshot exported by the host build
///
/// ```json
/// {
///   "repository": "repository",
///   "configurations": [
///     {
///       "name": "releaseRuntimeClasspath",
///       "dependencies": [
///         { "group": "com.squareup.okio", "name": "okio", "version": "3.6.0", "type": "jar" }
///       ]
///     }
///   ],
///   "manifests": [
///     { "displayName": "org.example:bom-only:1.0", "pom": "extra/bom-only-1.0.pom" }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResolutionSnapshot {
    /// Maven-layout repository, relative to the snapshot file
    #[serde(default)]
    repository: Option<PathBuf>,
    #[serde(default)]
    configurations: Vec<SnapshotConfiguration>,
    /// Manifests the build surfaced without a configuration claiming them
    #[serde(default)]
    manifests: Vec<SnapshotManifest>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotConfiguration {
    name: String,
    #[serde(default)]
    dependencies: Vec<SnapshotDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotDependency {
    group: String,
    name: String,
    version: String,
    #[serde(rename = "type", default = "default_artifact_type")]
    artifact_type: String,
    /// Explicit manifest location, relative to the snapshot file
    #[serde(default)]
    pom: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SnapshotManifest {
    display_name: String,
    pom: PathBuf,
}

fn default_artifact_type() -> String {
    "jar".to_string()
}

/// SnapshotDependencyResolver adapter reading a resolution snapshot
///
/// Manifests are located through the explicit `pom` of a dependency, or
/// otherwise in a Maven-layout repository:
/// `<group with . as />/<name>/<version>/<name>-<version>.pom`.
/// The component reference of a dependency is `group:name:version`.
#[derive(Debug)]
pub struct SnapshotDependencyResolver {
    configurations: BTreeMap<String, Vec<ResolvedDependency>>,
    locations: HashMap<ComponentRef, PathBuf>,
    extra_manifests: Vec<FetchedManifest>,
}

impl SnapshotDependencyResolver {
    /// Loads a snapshot file
    ///
    /// # Arguments
    /// * `snapshot_path` - The snapshot JSON file
    /// * `repository` - Overrides the repository named in the snapshot
    ///
    /// # Errors
    /// Returns an error if the file cannot be read safely or is not a valid snapshot
    pub fn load(snapshot_path: &Path, repository: Option<&Path>) -> Result<Self> {
        let content = safe_read_to_string(snapshot_path, "resolution snapshot", MAX_INPUT_FILE_SIZE)?;
        let snapshot: ResolutionSnapshot =
            serde_json::from_str(&content).map_err(|e| CatalogError::ConfigurationError {
                path: snapshot_path.to_path_buf(),
                details: format!("Invalid resolution snapshot: {}", e),
            })?;

        let base_dir = snapshot_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(Self::from_snapshot(snapshot, &base_dir, repository))
    }

    /// Parses snapshot text; relative paths are resolved against `base_dir`
    pub fn from_json(text: &str, base_dir: &Path, repository: Option<&Path>) -> Result<Self> {
        let snapshot: ResolutionSnapshot = serde_json::from_str(text)?;
        Ok(Self::from_snapshot(snapshot, base_dir, repository))
    }

    fn from_snapshot(
        snapshot: ResolutionSnapshot,
        base_dir: &Path,
        repository: Option<&Path>,
    ) -> Self {
        let repository = match repository {
            Some(repository) => repository.to_path_buf(),
            None => base_dir.join(snapshot.repository.unwrap_or_default()),
        };

        let mut configurations = BTreeMap::new();
        let mut locations = HashMap::new();

        for configuration in snapshot.configurations {
            let mut dependencies = Vec::with_capacity(configuration.dependencies.len());
            for dependency in configuration.dependencies {
                let component = ComponentRef::new(format!(
                    "{}:{}:{}",
                    dependency.group, dependency.name, dependency.version
                ));
                let location = match &dependency.pom {
                    Some(pom) => base_dir.join(pom),
                    None => maven_layout_path(
                        &repository,
                        &dependency.group,
                        &dependency.name,
                        &dependency.version,
                    ),
                };
                locations.entry(component.clone()).or_insert(location);

                dependencies.push(ResolvedDependency::new(
                    ResolvedModuleIdentifier::new(
                        dependency.group,
                        dependency.name,
                        VersionString::new(dependency.version),
                        component,
                    ),
                    dependency.artifact_type,
                ));
            }
            configurations
                .entry(configuration.name)
                .or_insert_with(Vec::new)
                .extend(dependencies);
        }

        let extra_manifests = snapshot
            .manifests
            .into_iter()
            .map(|manifest| {
                FetchedManifest::new(
                    ComponentRef::new(format!("manifest:{}", manifest.display_name)),
                    manifest.display_name,
                    base_dir.join(manifest.pom),
                )
            })
            .collect();

        Self {
            configurations,
            locations,
            extra_manifests,
        }
    }

    /// Names of all configurations in the snapshot
    pub fn configuration_names(&self) -> impl Iterator<Item = &str> {
        self.configurations.keys().map(String::as_str)
    }

    async fn lookup(&self, manifest: FetchedManifest) -> Result<Option<FetchedManifest>> {
        match tokio::fs::metadata(&manifest.path).await {
            Ok(metadata) if metadata.is_file() => Ok(Some(manifest)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CatalogError::ResolutionFailure {
                subject: manifest.display_name.clone(),
                details: format!("Cannot access {}: {}", manifest.path.display(), e),
            }
            .into()),
        }
    }
}

/// `<repository>/<group as path>/<name>/<version>/<name>-<version>.pom`
fn maven_layout_path(repository: &Path, group: &str, name: &str, version: &str) -> PathBuf {
    let mut path = repository.to_path_buf();
    for segment in group.split('.') {
        path.push(segment);
    }
    path.push(name);
    path.push(version);
    path.push(format!("{}-{}.pom", name, version));
    path
}

#[async_trait]
impl DependencyResolver for SnapshotDependencyResolver {
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
            .ok_or_else(|| {
                CatalogError::ResolutionFailure {
                    subject: format!("configuration '{}'", configuration.name),
                    details: "The configuration is not part of the resolution snapshot".to_string(),
                }
                .into()
            })
    }

    async fn fetch_manifests(&self, components: &[ComponentRef]) -> Result<Vec<FetchedManifest>> {
        let candidates: Vec<FetchedManifest> = components
            .iter()
            .filter_map(|component| {
                self.locations.get(component).map(|path| {
                    FetchedManifest::new(component.clone(), component.as_str(), path.clone())
                })
            })
            .chain(self.extra_manifests.iter().cloned())
            .collect();

        // buffered keeps request order while lookups overlap
        let fetched: Vec<Option<FetchedManifest>> = stream::iter(candidates)
            .map(|candidate| self.lookup(candidate))
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .try_collect()
            .await?;

        Ok(fetched.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
  "repository": "repo",
  "configurations": [
    {
      "name": "releaseImplementation",
      "dependencies": [
        { "group": "com.squareup.okio", "name": "okio", "version": "3.6.0" },
        { "group": "org.example", "name": "local", "version": "1.0", "type": "aar", "pom": "poms/local.pom" },
        { "group": "org.example", "name": "missing", "version": "2.0" }
      ]
    },
    {
      "name": "testImplementation",
      "dependencies": [
        { "group": "junit", "name": "junit", "version": "4.13.2" }
      ]
    }
  ],
  "manifests": [
    { "displayName": "org.orphan:orphan:0.1", "pom": "poms/orphan.pom" }
  ]
}"#;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> (TempDir, SnapshotDependencyResolver) {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        write(
            &base.join("repo/com/squareup/okio/okio/3.6.0/okio-3.6.0.pom"),
            "<project/>",
        );
        write(&base.join("poms/local.pom"), "<project/>");
        write(&base.join("poms/orphan.pom"), "<project/>");
        write(&base.join("snapshot.json"), SNAPSHOT);

        let resolver = SnapshotDependencyResolver::load(&base.join("snapshot.json"), None).unwrap();
        (temp_dir, resolver)
    }

    #[test]
    fn test_maven_layout_path() {
        let path = maven_layout_path(Path::new("/m2"), "com.squareup.okio", "okio", "3.6.0");
        assert_eq!(path, PathBuf::from("/m2/com/squareup/okio/okio/3.6.0/okio-3.6.0.pom"));
    }

    #[tokio::test]
    async fn test_find_configurations_skips_unknown_names() {
        let (_dir, resolver) = fixture();
        let found = resolver
            .find_configurations(&[
                "implementation".to_string(),
                "releaseImplementation".to_string(),
            ])
            .await
            .unwrap();

        assert_eq!(found, vec![ConfigurationHandle::new("releaseImplementation")]);
    }

    #[tokio::test]
    async fn test_resolve_modules() {
        let (_dir, resolver) = fixture();
        let modules = resolver
            .resolve_modules(&ConfigurationHandle::new("releaseImplementation"))
            .await
            .unwrap();

        assert_eq!(modules.len(), 3);
        assert_eq!(modules[0].artifact_type, "jar");
        assert_eq!(modules[1].artifact_type, "aar");
        assert_eq!(modules[0].id.component().as_str(), "com.squareup.okio:okio:3.6.0");
    }

    #[tokio::test]
    async fn test_resolve_unknown_configuration_fails() {
        let (_dir, resolver) = fixture();
        let err = resolver
            .resolve_modules(&ConfigurationHandle::new("debugApi"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("debugApi"));
    }

    #[tokio::test]
    async fn test_fetch_manifests_in_request_order_with_extras() {
        let (dir, resolver) = fixture();
        let fetched = resolver
            .fetch_manifests(&[
                ComponentRef::new("org.example:local:1.0"),
                ComponentRef::new("org.example:missing:2.0"),
                ComponentRef::new("com.squareup.okio:okio:3.6.0"),
            ])
            .await
            .unwrap();

        let components: Vec<&str> = fetched.iter().map(|m| m.component.as_str()).collect();
        assert_eq!(
            components,
            vec![
                "org.example:local:1.0",
                "com.squareup.okio:okio:3.6.0",
                "manifest:org.orphan:orphan:0.1"
            ]
        );
        assert_eq!(fetched[0].path, dir.path().join("poms/local.pom"));
        assert_eq!(fetched[2].display_name, "org.orphan:orphan:0.1");
    }

    #[tokio::test]
    async fn test_repository_override() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("m2");
        write(&elsewhere.join("junit/junit/4.13.2/junit-4.13.2.pom"), "<project/>");

        let resolver =
            SnapshotDependencyResolver::from_json(SNAPSHOT, temp_dir.path(), Some(&elsewhere))
                .unwrap();
        let fetched = resolver
            .fetch_manifests(&[ComponentRef::new("junit:junit:4.13.2")])
            .await
            .unwrap();

        assert_eq!(fetched[0].component.as_str(), "junit:junit:4.13.2");
    }

    #[test]
    fn test_invalid_snapshot_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, r#"{"configurations": [{"dependencies": []}]}"#).unwrap();

        let err = SnapshotDependencyResolver::load(&path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_configuration_names() {
        let resolver = SnapshotDependencyResolver::from_json(SNAPSHOT, Path::new("."), None).unwrap();
        let names: Vec<&str> = resolver.configuration_names().collect();
        assert_eq!(names, vec!["releaseImplementation", "testImplementation"]);
    }
}
