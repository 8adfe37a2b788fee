/// Catalog domain layer
///
/// Value objects, policies and pure services for building a license
/// catalog. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
