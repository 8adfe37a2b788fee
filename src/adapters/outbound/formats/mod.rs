/// Catalog wire formats
mod json_format;
mod yaml_format;

pub use json_format::JsonCatalogFormat;
pub use yaml_format::YamlCatalogFormat;
