// src/export/logic.rs

use crate::core::AppContext;
use crate::errors::{AppError, AppResult};
use crate::export::csv::render_csv;
use crate::platform::ShareSink;
use log::info;
use std::io;
use std::path::PathBuf;

pub const CSV_MIME: &str = "text/csv";
pub const SHARE_TITLE: &str = "Export Emogo data";

/// What happened to an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The log is empty; no file was written.
    NoData,
    /// File written and handed to the share sink.
    Shared(PathBuf),
    /// File written, but the host has no share target.
    ShareUnavailable(PathBuf),
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// `emogo_data_<epoch-ms>.csv`
    pub fn file_name(epoch_ms: i64) -> String {
        format!("emogo_data_{epoch_ms}.csv")
    }

    /// Render the whole log to CSV, write it under the export area and offer
    /// it to `sink`. Only storage write failures are errors.
    pub fn export(ctx: &AppContext, sink: &dyn ShareSink) -> AppResult<ExportOutcome> {
        let records = ctx.store.load_all();

        let Some(document) = render_csv(&records)? else {
            info!("export skipped: log is empty");
            return Ok(ExportOutcome::NoData);
        };

        let dir = ctx.cfg.export_path();
        let path = dir.join(Self::file_name(ctx.clock().now_millis()));

        ctx.backend.create_dir_all(&dir)?;
        ctx.backend.write(&path, &document).map_err(|e| {
            AppError::from(io::Error::new(
                e.kind(),
                format!("cannot write export file {}: {e}", path.display()),
            ))
        })?;
        info!("exported {} records to {}", records.len(), path.display());

        if !sink.is_available() {
            return Ok(ExportOutcome::ShareUnavailable(path));
        }

        sink.share(&path, CSV_MIME, SHARE_TITLE)?;
        Ok(ExportOutcome::Shared(path))
    }
}
