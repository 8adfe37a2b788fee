mod module_deduplicator;
mod pom_parser;

pub use module_deduplicator::{ModuleCoordinates, ModuleDeduplicator};
pub use pom_parser::PomParser;
