use crate::core::AppContext;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome};
use crate::platform::PrintShare;
use crate::ui::messages::{success, warning};

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    match ExportLogic::export(ctx, &PrintShare)? {
        ExportOutcome::NoData => warning("No data to export!"),
        ExportOutcome::Shared(_) => success("Export completed and ready to share."),
        ExportOutcome::ShareUnavailable(path) => warning(format!(
            "Sharing is not available; file left at {}",
            path.display()
        )),
    }
    Ok(())
}
