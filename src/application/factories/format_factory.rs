use crate::adapters::outbound::formats::{JsonCatalogFormat, YamlCatalogFormat};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormat;

/// Factory for creating catalog formats
///
/// This factory encapsulates the selection of format adapters. It belongs in
/// the application layer as it picks infrastructure based on the request.
pub struct FormatFactory;

impl FormatFactory {
    /// Creates a format instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use license_catalog::application::dto::OutputFormat;
    /// use license_catalog::application::factories::FormatFactory;
    ///
    /// let format = FormatFactory::create(OutputFormat::Yaml);
    /// assert_eq!(format.extension(), "yml");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CatalogFormat> {
        match format {
            OutputFormat::Json => Box::new(JsonCatalogFormat::new()),
            OutputFormat::Yaml => Box::new(YamlCatalogFormat::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering catalogs as JSON...",
            OutputFormat::Yaml => "📝 Rendering catalogs as YAML...",
        }
    }
}
