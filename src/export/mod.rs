// src/export/mod.rs

pub mod csv;
pub mod logic;

pub use self::csv::{CSV_HEADER, render_csv};
pub use logic::{ExportLogic, ExportOutcome};
