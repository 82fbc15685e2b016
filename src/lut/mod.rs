pub mod spectral_table;

// Re-export the main structures for convenience
pub use spectral_table::{ColumnOrder, Interpolation, SpectralTable, TableError};
