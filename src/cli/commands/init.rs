use crate::config::Config;
use crate::core::AppContext;
use crate::core::init::initialize;
use crate::errors::AppResult;
use crate::platform::ConsoleScheduler;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the app directory and `emogo.conf` (kept unless `--force`)
///  - the JSON data log (`[]` when missing)
///  - the vlog directory
///  - the daily collection reminders
pub fn handle(app_dir: &Path, force: bool) -> AppResult<()> {
    let config_file = Config::config_file(app_dir);

    let cfg = if force || !config_file.exists() {
        let cfg = Config::with_app_dir(app_dir);
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
        cfg
    } else {
        info(format!("Config file already present: {}", config_file.display()));
        Config::load(app_dir)?
    };

    let ctx = AppContext::new(cfg)?;
    let mut scheduler = ConsoleScheduler::default();
    let report = initialize(&ctx, &mut scheduler);

    if report.log_created {
        success(format!("Data log created: {}", ctx.store.path().display()));
    } else {
        info(format!("Data log: {}", ctx.store.path().display()));
    }
    info(format!("Vlog directory: {}", ctx.vlogs.dir().display()));

    for failure in &report.failures {
        warning(format!("Initialization step failed: {failure}"));
    }

    if report.is_ok() {
        success(format!(
            "emogo initialized ({} daily reminders)",
            report.reminders
        ));
    }

    Ok(())
}
