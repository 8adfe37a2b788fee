use crate::catalog::domain::{LicenseSeed, ResolvedPomFile};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::{Path, PathBuf};

/// PomParser service turning one POM-style manifest into a `ResolvedPomFile`
///
/// Elements are matched by local name, so documents with or without the
/// Maven namespace parse the same way. Every child tag read here may occur
/// at most once under its parent.
pub struct PomParser {
    source: PathBuf,
    module: String,
}

impl PomParser {
    /// # Arguments
    /// * `source` - Path of the manifest, used in error messages
    /// * `module` - Coordinates of the owning module, used in error messages
    pub fn new(source: &Path, module: impl Into<String>) -> Self {
        Self {
            source: source.to_path_buf(),
            module: module.into(),
        }
    }

    /// Parses manifest text
    ///
    /// # Errors
    /// Returns `CatalogError::MalformedManifest` if the XML is invalid, a
    /// single-occurrence element is repeated, or none of `name`,
    /// `description` and `artifactId` carries text
    pub fn parse(&self, content: &str) -> Result<ResolvedPomFile> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(content, options)
            .map_err(|e| self.malformed(format!("invalid XML: {}", e)))?;
        let root = document.root_element();

        let associated_url = match self.optional_text(root, "url", false)? {
            Some(url) => Some(url),
            None => match self.single_child(root, "scm")? {
                Some(scm) => self.optional_text(scm, "url", false)?,
                None => None,
            },
        };

        let mut display_name_candidates = Vec::new();
        for tag in ["name", "description", "artifactId"] {
            if let Some(candidate) = self.optional_text(root, tag, false)? {
                display_name_candidates.push(candidate);
            }
        }

        let licenses = self
            .container_entries(root, "licenses")?
            .into_iter()
            .map(|license| {
                Ok(LicenseSeed::new(
                    self.optional_text(license, "name", false)?,
                    self.optional_text(license, "url", false)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut copyright_holders = Vec::new();
        for developer in self.container_entries(root, "developers")? {
            if let Some(name) = self.optional_text(developer, "name", false)? {
                copyright_holders.push(name);
            }
        }

        if display_name_candidates.is_empty() {
            return Err(self.malformed(
                "none of <name>, <description> or <artifactId> is present".to_string(),
            ));
        }

        ResolvedPomFile::new(
            display_name_candidates,
            associated_url,
            copyright_holders,
            licenses,
        )
    }

    fn malformed(&self, reason: String) -> anyhow::Error {
        CatalogError::MalformedManifest {
            path: self.source.clone(),
            module: self.module.clone(),
            reason,
        }
        .into()
    }

    /// Returns the only child element named `tag`, or an error if it repeats
    fn single_child<'a, 'input>(
        &self,
        parent: Node<'a, 'input>,
        tag: &str,
    ) -> Result<Option<Node<'a, 'input>>> {
        let mut matches = parent
            .children()
            .filter(|child| child.is_element() && child.tag_name().name() == tag);

        let first = matches.next();
        let extra = matches.count();
        if extra > 0 {
            return Err(self.malformed(format!(
                "<{}> appears {} times under <{}>, at most one is allowed",
                tag,
                extra + 1,
                parent.tag_name().name()
            )));
        }

        Ok(first)
    }

    /// Text content of the child element `tag`
    ///
    /// Whitespace-only text counts as absent unless `allow_blank` is set.
    fn optional_text(&self, parent: Node, tag: &str, allow_blank: bool) -> Result<Option<String>> {
        let Some(element) = self.single_child(parent, tag)? else {
            return Ok(None);
        };

        let text: String = element
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect();

        if allow_blank {
            return Ok(Some(text));
        }

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    /// Child elements of the container `tag`; an absent container yields none
    fn container_entries<'a, 'input>(
        &self,
        parent: Node<'a, 'input>,
        tag: &str,
    ) -> Result<Vec<Node<'a, 'input>>> {
        Ok(match self.single_child(parent, tag)? {
            Some(container) => container.children().filter(|n| n.is_element()).collect(),
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ResolvedPomFile> {
        PomParser::new(Path::new("/tmp/test.pom"), "com.example:lib:1.0").parse(content)
    }

    const POM_1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>io.github.jmatsu</groupId>
  <artifactId>example</artifactId>
  <version>1.0.0</version>
  <name>Example1</name>
  <url>https://github.com/jmatsu</url>
  <licenses>
    <license>
      <name>The Apache Software License, Version 2.0</name>
      <url>http://www.apache.org/licenses/LICENSE-2.0.txt</url>
      <distribution>repo</distribution>
    </license>
  </licenses>
  <developers>
    <developer>
      <id>jmatsu</id>
      <name>jmatsu</name>
    </developer>
  </developers>
</project>
"#;

    #[test]
    fn test_parse_full_manifest() {
        let pom = parse(POM_1).unwrap();

        assert_eq!(pom.display_name(), "Example1");
        assert_eq!(pom.display_name_candidates(), &["Example1", "example"]);
        assert_eq!(pom.associated_url(), Some("https://github.com/jmatsu"));
        assert_eq!(pom.copyright_holders(), &["jmatsu"]);
        assert_eq!(
            pom.licenses(),
            &[LicenseSeed::new(
                Some("The Apache Software License, Version 2.0".to_string()),
                Some("http://www.apache.org/licenses/LICENSE-2.0.txt".to_string()),
            )]
        );
    }

    #[test]
    fn test_parse_falls_back_to_scm_url() {
        let pom = parse(
            r#"<project>
  <artifactId>example2</artifactId>
  <scm>
    <url>https://github.com/jmatsu/license-list-plugin.git</url>
  </scm>
  <licenses>
    <license><name>license1</name><url>url1</url></license>
    <license><name>license2</name><url>url2</url></license>
  </licenses>
  <developers>
    <developer><name>jmatsu1</name></developer>
    <developer><name>jmatsu2</name></developer>
    <developer><id>anonymous</id></developer>
    <developer><name>jmatsu3</name></developer>
  </developers>
</project>"#,
        )
        .unwrap();

        assert_eq!(pom.display_name(), "example2");
        assert_eq!(
            pom.associated_url(),
            Some("https://github.com/jmatsu/license-list-plugin.git")
        );
        assert_eq!(pom.copyright_holders(), &["jmatsu1", "jmatsu2", "jmatsu3"]);
        assert_eq!(pom.licenses().len(), 2);
        assert_eq!(pom.licenses()[1].name.as_deref(), Some("license2"));
    }

    #[test]
    fn test_top_level_url_wins_over_scm() {
        let pom = parse(
            r#"<project>
  <name>Example1</name>
  <url>https://example.com</url>
  <scm><url>https://scm.example.com</url></scm>
  <licenses>
    <license>
      <name>MIT License</name>
      <url>https://opensource.org/licenses/MIT</url>
    </license>
  </licenses>
</project>"#,
        )
        .unwrap();

        assert_eq!(pom.display_name(), "Example1");
        assert_eq!(pom.associated_url(), Some("https://example.com"));
        assert_eq!(pom.licenses().len(), 1);
    }

    #[test]
    fn test_absent_containers_yield_empty_sequences() {
        let pom = parse("<project><artifactId>example3</artifactId></project>").unwrap();

        assert_eq!(pom.display_name_candidates(), &["example3"]);
        assert_eq!(pom.associated_url(), None);
        assert!(pom.copyright_holders().is_empty());
        assert!(pom.licenses().is_empty());
    }

    #[test]
    fn test_empty_license_entry_yields_empty_seed() {
        let pom = parse(
            "<project><artifactId>example4</artifactId><licenses><license/></licenses></project>",
        )
        .unwrap();

        assert_eq!(pom.licenses(), &[LicenseSeed::new(None, None)]);
    }

    #[test]
    fn test_blank_text_is_absent() {
        let pom = parse(
            "<project><name>   </name><description>\n  Utilities\n</description><url> </url></project>",
        )
        .unwrap();

        assert_eq!(pom.display_name(), "\n  Utilities\n");
        assert_eq!(pom.associated_url(), None);
    }

    #[test]
    fn test_missing_identifying_fields_is_malformed() {
        let err = parse("<project><url>https://example.com</url></project>").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("Malformed manifest for com.example:lib:1.0"));
        assert!(message.contains("/tmp/test.pom"));
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::MalformedManifest { .. })
        ));
    }

    #[test]
    fn test_invalid_xml_is_malformed() {
        let err = parse("<project><name>broken</project>").unwrap_err();
        assert!(err.to_string().contains("invalid XML"));
    }

    #[test]
    fn test_repeated_url_is_malformed() {
        let err = parse(
            "<project><name>x</name><url>https://a</url><url>https://b</url></project>",
        )
        .unwrap_err();
        assert!(err.to_string().contains("<url> appears 2 times under <project>"));
    }

    #[test]
    fn test_repeated_scm_is_malformed() {
        let err = parse(
            "<project><name>x</name><scm><url>a</url></scm><scm><url>b</url></scm></project>",
        )
        .unwrap_err();
        assert!(err.to_string().contains("<scm> appears 2 times"));
    }

    #[test]
    fn test_nested_names_are_not_confused_with_project_name() {
        let pom = parse(
            r#"<project>
  <artifactId>child</artifactId>
  <parent><name>Parent Project</name></parent>
  <organization><name>Example Org</name></organization>
</project>"#,
        )
        .unwrap();

        assert_eq!(pom.display_name_candidates(), &["child"]);
    }

    #[test]
    fn test_doctype_is_accepted() {
        let pom = parse(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE project>\n<project><name>With Doctype</name></project>",
        )
        .unwrap();
        assert_eq!(pom.display_name(), "With Doctype");
    }
}
