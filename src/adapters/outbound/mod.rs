/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod classifier;
pub mod console;
pub mod filesystem;
pub mod formats;
pub mod resolver;
