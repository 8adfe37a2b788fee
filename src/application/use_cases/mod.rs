/// Use cases module containing application business logic orchestration
mod assemble_artifacts;
mod disassemble_catalog;
mod generate_catalog;
mod resolve_scopes;

pub use assemble_artifacts::{synthetic_key, ArtifactAssembler, AssembledCatalog};
pub use disassemble_catalog::CatalogDisassembler;
pub use generate_catalog::GenerateCatalogUseCase;
pub use resolve_scopes::ScopeResolver;
