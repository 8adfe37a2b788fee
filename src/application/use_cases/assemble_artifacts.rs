use crate::catalog::domain::{
    ArtifactDefinition, AssemblyStyle, Catalog, GroupedDefinitions, LicenseCapture, LicenseGuess,
    LicenseKey, LicenseSeed, PlainLicense, ResolvedArtifact, ScopedArtifacts, ScopedDefinitions,
};
use crate::ports::outbound::{CatalogFormat, LicenseClassifier};
use crate::shared::Result;

/// Result of one assembly pass
///
/// The license capture was filled while the catalog was built; it belongs
/// to this catalog only.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledCatalog {
    pub catalog: Catalog,
    pub licenses: LicenseCapture,
}

impl AssembledCatalog {
    /// Captured licenses sorted by name
    pub fn license_catalog(&self) -> Vec<PlainLicense> {
        self.licenses.sorted_by_name()
    }

    pub fn catalog_text(&self, format: &dyn CatalogFormat) -> Result<String> {
        format.serialize_catalog(&self.catalog)
    }

    pub fn license_catalog_text(&self, format: &dyn CatalogFormat) -> Result<String> {
        format.serialize_licenses(&self.license_catalog())
    }
}

/// ArtifactAssembler - turns resolved artifacts into catalog definitions
///
/// Every license seed is canonicalized through the classifier. Seeds the
/// classifier cannot identify get the synthetic key `"<name>@<url length>"`,
/// where the length counts UTF-16 code units. Two different URLs of equal
/// length therefore collapse into one license entry.
pub struct ArtifactAssembler<'a, C> {
    classifier: &'a C,
}

impl<'a, C: LicenseClassifier> ArtifactAssembler<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    /// Builds the catalog in `style` with a fresh license capture
    pub fn assemble(&self, scoped: &ScopedArtifacts, style: AssemblyStyle) -> AssembledCatalog {
        let mut licenses = LicenseCapture::new();

        let catalog = match style {
            AssemblyStyle::Flatten => {
                let mut definitions: Vec<ArtifactDefinition> = scoped
                    .iter()
                    .flat_map(|(_, artifacts)| artifacts.iter())
                    .map(|artifact| {
                        let key = format!("{}:{}", artifact.id.group(), artifact.id.name());
                        self.define(artifact, key, &mut licenses)
                    })
                    .collect();
                definitions.sort();
                Catalog::Flatten(definitions)
            }
            AssemblyStyle::StructuredWithoutScope => {
                let mut merged = GroupedDefinitions::new();
                for (_, artifacts) in scoped.iter() {
                    for (group, mut definitions) in self.group(artifacts, &mut licenses) {
                        merged.entry(group).or_default().append(&mut definitions);
                    }
                }
                Catalog::StructuredWithoutScope(merged)
            }
            AssemblyStyle::StructuredWithScope => {
                let mut by_scope = ScopedDefinitions::new();
                for (scope, artifacts) in scoped.iter() {
                    by_scope.push(scope.name(), self.group(artifacts, &mut licenses));
                }
                Catalog::StructuredWithScope(by_scope)
            }
        };

        AssembledCatalog { catalog, licenses }
    }

    /// Definitions of one scope grouped by module group, each group sorted
    fn group(
        &self,
        artifacts: &[ResolvedArtifact],
        licenses: &mut LicenseCapture,
    ) -> GroupedDefinitions {
        let mut grouped = GroupedDefinitions::new();
        for artifact in artifacts {
            let definition = self.define(artifact, artifact.id.name().to_string(), licenses);
            grouped
                .entry(artifact.id.group().to_string())
                .or_default()
                .push(definition);
        }
        for definitions in grouped.values_mut() {
            definitions.sort();
        }
        grouped
    }

    fn define(
        &self,
        artifact: &ResolvedArtifact,
        key: String,
        licenses: &mut LicenseCapture,
    ) -> ArtifactDefinition {
        let pom = &artifact.pom_file;

        let keys: Vec<LicenseKey> = pom
            .licenses()
            .iter()
            .map(|seed| licenses.capture(self.canonicalize(seed)))
            .collect();

        ArtifactDefinition {
            key,
            display_name: pom.display_name().to_string(),
            url: pom.associated_url().map(str::to_string),
            copyright_holders: pom.copyright_holders().to_vec(),
            licenses: keys,
        }
    }

    fn canonicalize(&self, seed: &LicenseSeed) -> PlainLicense {
        match self.classifier.classify(seed.name.as_deref()) {
            LicenseGuess::Known(license) => PlainLicense::new(license.name, license.url, license.key),
            LicenseGuess::Undetermined {
                fallback_name,
                fallback_url,
            } => {
                let name = seed.name.clone().unwrap_or(fallback_name);
                let url = seed.url.clone().unwrap_or(fallback_url);
                let key = synthetic_key(&name, &url);
                PlainLicense::new(name, url, key)
            }
        }
    }
}

/// `"<name>@<url length in UTF-16 code units>"`
pub fn synthetic_key(name: &str, url: &str) -> String {
    format!("{}@{}", name, url.encode_utf16().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{
        CanonicalLicense, ComponentRef, ResolveScope, ResolvedModuleIdentifier, ResolvedPomFile,
        VersionString,
    };

    struct TableClassifier;

    impl LicenseClassifier for TableClassifier {
        fn classify(&self, raw_name: Option<&str>) -> LicenseGuess {
            match raw_name {
                Some("MIT License") | Some("MIT") => LicenseGuess::Known(CanonicalLicense::new(
                    "MIT License",
                    "https://opensource.org/licenses/MIT",
                    "mit",
                )),
                _ => LicenseGuess::Undetermined {
                    fallback_name: "Undetermined".to_string(),
                    fallback_url: String::new(),
                },
            }
        }
    }

    fn artifact(group: &str, name: &str, display: &str, seeds: Vec<LicenseSeed>) -> ResolvedArtifact {
        ResolvedArtifact::new(
            ResolvedModuleIdentifier::new(
                group,
                name,
                VersionString::new("1.0"),
                ComponentRef::new(format!("{}:{}", group, name)),
            ),
            ResolvedPomFile::new(
                vec![display.to_string()],
                Some(format!("https://{}.example", name)),
                vec!["Jane Doe".to_string()],
                seeds,
            )
            .unwrap(),
        )
    }

    fn seed(name: Option<&str>, url: Option<&str>) -> LicenseSeed {
        LicenseSeed::new(name.map(str::to_string), url.map(str::to_string))
    }

    fn sample() -> ScopedArtifacts {
        ScopedArtifacts::new(vec![
            (
                ResolveScope::variant("release").unwrap(),
                vec![
                    artifact("com.b", "zeta", "Zeta", vec![seed(Some("MIT"), None)]),
                    artifact("com.a", "alpha", "Alpha", vec![seed(Some("MIT License"), None)]),
                    artifact("com.b", "beta", "Beta", vec![]),
                ],
            ),
            (
                ResolveScope::addition("test").unwrap(),
                vec![artifact(
                    "com.b",
                    "gamma",
                    "Gamma",
                    vec![seed(Some("Foo License"), Some("http://x.io"))],
                )],
            ),
        ])
    }

    #[test]
    fn test_synthetic_key() {
        assert_eq!(synthetic_key("Foo License", "http://x.io"), "Foo License@11");
        assert_eq!(synthetic_key("Undetermined", ""), "Undetermined@0");
        // counts UTF-16 code units, not bytes
        assert_eq!(synthetic_key("L", "https://例え.jp"), "L@13");
    }

    #[test]
    fn test_flatten_sorted_by_display_name_with_qualified_keys() {
        let assembled = ArtifactAssembler::new(&TableClassifier).assemble(&sample(), AssemblyStyle::Flatten);

        let Catalog::Flatten(definitions) = &assembled.catalog else {
            panic!("expected flat catalog");
        };
        let keys: Vec<&str> = definitions.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["com.a:alpha", "com.b:beta", "com.b:gamma", "com.b:zeta"]);
    }

    #[test]
    fn test_structured_without_scope_appends_later_scopes() {
        let assembled = ArtifactAssembler::new(&TableClassifier)
            .assemble(&sample(), AssemblyStyle::StructuredWithoutScope);

        let Catalog::StructuredWithoutScope(grouped) = &assembled.catalog else {
            panic!("expected grouped catalog");
        };
        let groups: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(groups, vec!["com.a", "com.b"]);
        let keys: Vec<&str> = grouped["com.b"].iter().map(|d| d.key.as_str()).collect();
        // release entries sorted, then test entries
        assert_eq!(keys, vec!["beta", "zeta", "gamma"]);
    }

    #[test]
    fn test_structured_with_scope_keeps_scope_order() {
        let assembled = ArtifactAssembler::new(&TableClassifier)
            .assemble(&sample(), AssemblyStyle::StructuredWithScope);

        let Catalog::StructuredWithScope(scoped) = &assembled.catalog else {
            panic!("expected scoped catalog");
        };
        let scopes: Vec<&str> = scoped.iter().map(|(scope, _)| scope).collect();
        assert_eq!(scopes, vec!["release", "test"]);
        assert_eq!(scoped.get("test").unwrap()["com.b"][0].key, "gamma");
        assert!(!scoped.get("release").unwrap().contains_key("com.c"));
    }

    #[test]
    fn test_known_licenses_share_one_entry() {
        let assembled = ArtifactAssembler::new(&TableClassifier).assemble(&sample(), AssemblyStyle::Flatten);

        let mit: Vec<&ArtifactDefinition> = assembled
            .catalog
            .definitions()
            .into_iter()
            .filter(|d| d.licenses.contains(&LicenseKey::new("mit")))
            .collect();
        assert_eq!(mit.len(), 2);
        assert_eq!(assembled.licenses.len(), 2);
        assert_eq!(
            assembled.licenses.get("mit").unwrap().url,
            "https://opensource.org/licenses/MIT"
        );
    }

    #[test]
    fn test_equal_length_urls_collide() {
        let scoped = ScopedArtifacts::new(vec![(
            ResolveScope::variant("release").unwrap(),
            vec![
                artifact("g", "x", "X", vec![seed(Some("Foo License"), Some("http://x.io"))]),
                artifact("g", "y", "Y", vec![seed(Some("Foo License"), Some("http://y.co"))]),
            ],
        )]);

        let assembled = ArtifactAssembler::new(&TableClassifier).assemble(&scoped, AssemblyStyle::Flatten);

        assert_eq!(assembled.licenses.len(), 1);
        let license = assembled.licenses.get("Foo License@11").unwrap();
        assert_eq!(license.url, "http://x.io");
        for definition in assembled.catalog.definitions() {
            assert_eq!(definition.licenses, vec![LicenseKey::new("Foo License@11")]);
        }
    }

    #[test]
    fn test_repeated_license_keys_kept_per_seed() {
        let scoped = ScopedArtifacts::new(vec![(
            ResolveScope::variant("release").unwrap(),
            vec![artifact(
                "g",
                "x",
                "X",
                vec![seed(Some("MIT"), None), seed(Some("MIT License"), None)],
            )],
        )]);

        let assembled = ArtifactAssembler::new(&TableClassifier).assemble(&scoped, AssemblyStyle::Flatten);

        let definitions = assembled.catalog.definitions();
        assert_eq!(
            definitions[0].licenses,
            vec![LicenseKey::new("mit"), LicenseKey::new("mit")]
        );
        assert_eq!(assembled.licenses.len(), 1);
    }

    #[test]
    fn test_undetermined_seed_uses_fallbacks() {
        let scoped = ScopedArtifacts::new(vec![(
            ResolveScope::variant("release").unwrap(),
            vec![artifact("g", "x", "X", vec![seed(None, None)])],
        )]);

        let assembled = ArtifactAssembler::new(&TableClassifier).assemble(&scoped, AssemblyStyle::Flatten);

        assert_eq!(
            assembled.license_catalog(),
            vec![PlainLicense::new("Undetermined", "", "Undetermined@0")]
        );
    }

    #[test]
    fn test_each_assembly_starts_with_fresh_capture() {
        let assembler = ArtifactAssembler::new(&TableClassifier);
        let first = assembler.assemble(&sample(), AssemblyStyle::StructuredWithScope);
        let empty = assembler.assemble(&ScopedArtifacts::default(), AssemblyStyle::StructuredWithScope);
        let second = assembler.assemble(&sample(), AssemblyStyle::StructuredWithScope);

        assert!(empty.licenses.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_definition_carries_manifest_fields() {
        let assembled = ArtifactAssembler::new(&TableClassifier).assemble(&sample(), AssemblyStyle::Flatten);
        let alpha = assembled.catalog.definitions()[0].clone();

        assert_eq!(alpha.display_name, "Alpha");
        assert_eq!(alpha.url.as_deref(), Some("https://alpha.example"));
        assert_eq!(alpha.copyright_holders, vec!["Jane Doe"]);
    }
}
