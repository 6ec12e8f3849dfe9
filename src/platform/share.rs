use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Platform share sheet (or whatever hands a file to the user).
pub trait ShareSink {
    fn is_available(&self) -> bool;

    fn share(&self, path: &Path, mime_type: &str, title: &str) -> AppResult<()>;
}

/// Reports the exported file on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintShare;

impl ShareSink for PrintShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, path: &Path, mime_type: &str, title: &str) -> AppResult<()> {
        success(format!("{title}: {} ({mime_type})", path.display()));
        Ok(())
    }
}

/// No share target on this host.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareSink for NoShare {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&self, _path: &Path, _mime_type: &str, _title: &str) -> AppResult<()> {
        Ok(())
    }
}
