use crate::cli::parser::Commands;
use crate::core::AppContext;
use crate::errors::AppResult;
use crate::models::Coordinates;
use crate::platform::ManualCoordinates;
use crate::ui::messages::success;

/// Log a mood score.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Mood { score, lat, lng } = cmd {
        let locator = ManualCoordinates(Coordinates::from_pair(*lat, *lng));
        let record = ctx.recorder().record_sentiment(*score, &locator)?;

        success(format!(
            "Saved! Score: {}, GPS: {}",
            record.value,
            if record.has_location() {
                "recorded"
            } else {
                "not recorded"
            }
        ));
    }

    Ok(())
}
