/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only drives outbound ports (build graph, file
/// system, console); the CLI calls use cases directly.
pub mod outbound;
