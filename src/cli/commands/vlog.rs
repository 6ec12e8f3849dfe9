use crate::cli::parser::Commands;
use crate::core::AppContext;
use crate::errors::AppResult;
use crate::models::Coordinates;
use crate::platform::ManualCoordinates;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Move a captured clip into the vlog directory and log it.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Vlog { clip, lat, lng } = cmd {
        let locator = ManualCoordinates(Coordinates::from_pair(*lat, *lng));
        let source = expand_tilde(clip);
        let record = ctx.recorder().record_vlog(&source, &ctx.vlogs, &locator)?;

        let stored = record.vlog_path.as_deref().unwrap_or_default();
        let file_name = Path::new(stored)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| stored.to_string());

        success(format!("Vlog saved: {file_name}"));
    }

    Ok(())
}
