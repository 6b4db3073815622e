//! Pullplan Exchange - file export and import of calculator state
//!
//! This crate moves calculator state across app installs as a portable
//! document:
//!
//! - **Exporter**: Write the fields as JSON (the interchange default),
//!   RON, or a human-readable text summary
//! - **import_str / import_file**: Read a document back, with missing
//!   fields defaulting and failures tagged with the file name
//!
//! # Example
//!
//! ```rust,ignore
//! use pullplan_core::CalculatorInputs;
//! use pullplan_exchange::{import_file, Exporter};
//!
//! // Write the current fields next to the binary
//! let inputs = CalculatorInputs::default();
//! let path = Exporter::new(&inputs).write_file(".")?;
//!
//! // Read them back on another install
//! let restored = import_file(&path)?;
//! assert_eq!(restored, inputs);
//! ```

mod error;
mod exporter;
mod importer;

pub use error::{Error, Result};
pub use exporter::{ExportFormat, Exporter, EXPORT_FILE_NAME};
pub use importer::{import_file, import_str};
