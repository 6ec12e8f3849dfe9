use crate::cli::parser::Commands;
use crate::core::AppContext;
use crate::errors::AppResult;
use crate::models::{Record, RecordKind};
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { kind } = cmd {
        let filter = kind.as_deref().map(RecordKind::from_tag);

        let records: Vec<Record> = ctx
            .store
            .load_all()
            .into_iter()
            .filter(|r| filter.as_ref().is_none_or(|k| &r.kind == k))
            .collect();

        if records.is_empty() {
            info("No records logged yet.");
            return Ok(());
        }

        print!("{}", records_table(&records).render());
        println!("\n{} record(s)", records.len());
    }

    Ok(())
}

fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new(["id", "timestamp", "type", "value", "location", "vlog"]);

    for r in records {
        let location = r
            .coordinates()
            .map(|c| format!("{}, {}", c.latitude, c.longitude))
            .unwrap_or_else(|| "--".to_string());

        table.add_row(vec![
            r.id.to_string(),
            r.timestamp.clone(),
            r.kind.to_string(),
            r.value.clone(),
            location,
            r.vlog_path.clone().unwrap_or_default(),
        ]);
    }

    table
}
