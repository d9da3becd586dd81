pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{RETAINED_STATUS, columns, load_dataset, parse_value};
