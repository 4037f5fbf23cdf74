pub mod csv_table;
pub mod dom;
pub mod host;
pub mod plugin;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use csv_table::{CsvBlockProcessor, CsvTable};
pub use dom::Element;
pub use host::*;
pub use plugin::{PluginError, SamplePlugin};
pub use registry::*;
