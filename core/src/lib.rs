//! Generator for the `sinbytes` lookup table.
//!
//! Samples a sine wave from a quarter period to three quarters of a period,
//! quantizes each sample into the byte range and lays the values out as the
//! body of a C-style array initializer.

pub mod math;
pub mod prelude;
pub mod table;
pub mod telemetry;

pub use prelude::{TableConfig, TableError, TableReport, TableResult};
pub use table::{render, render_to_string, TableEmitter};
