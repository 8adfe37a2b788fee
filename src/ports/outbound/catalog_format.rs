use crate::catalog::domain::{AssemblyStyle, Catalog, PlainLicense};
use crate::shared::Result;

/// CatalogFormat port for the wire format of catalogs
///
/// Implementations must re-read everything they write so that a committed
/// catalog can be compared against a freshly assembled one.
pub trait CatalogFormat {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn serialize_catalog(&self, catalog: &Catalog) -> Result<String>;

    fn serialize_licenses(&self, licenses: &[PlainLicense]) -> Result<String>;

    /// Parses catalog text written in `style`
    fn deserialize_catalog(&self, text: &str, style: AssemblyStyle) -> Result<Catalog>;

    fn deserialize_licenses(&self, text: &str) -> Result<Vec<PlainLicense>>;
}
