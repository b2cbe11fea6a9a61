use std::path::Path;

use colored::Colorize;
use hw_tables::{TablePack, TableRegistry};
use hw_travel::HexAtlas;
use serde_json::Value;

pub fn run(file: &Path) -> Result<(), String> {
    let json = std::fs::read_to_string(file).map_err(|e| format!("{}: {e}", file.display()))?;
    let value: Value =
        serde_json::from_str(&json).map_err(|e| format!("{}: {e}", file.display()))?;

    if value.get("tables").is_some() {
        let pack = TablePack::from_json(&json).map_err(|e| e.to_string())?;
        let registry = TableRegistry::with_builtin_tables();
        registry.register_all(pack.tables.iter().cloned());
        let dangling: Vec<String> = pack
            .tables
            .iter()
            .flat_map(|t| t.entries.iter().filter_map(|e| e.sub_table.clone()))
            .filter(|id| !registry.contains(id))
            .collect();
        for id in &dangling {
            println!("  {} sub-table '{id}' is not registered", "warning:".yellow());
        }
        println!(
            "  {} table pack with {} tables",
            "ok:".green().bold(),
            pack.tables.len()
        );
        return Ok(());
    }

    if value.get("items").is_some() {
        let atlas = HexAtlas::from_json(&json).map_err(|e| e.to_string())?;
        let mut tables = 0;
        for record in atlas.hexes() {
            if record.terrain().is_none() {
                println!(
                    "  {} hex {} has unknown terrain '{}'",
                    "warning:".yellow(),
                    record.hex_id,
                    record.terrain_type
                );
            }
            tables += atlas.tables(&record.hex_id).len();
        }
        println!(
            "  {} hex atlas with {} hexes and {} embedded tables",
            "ok:".green().bold(),
            atlas.len(),
            tables
        );
        return Ok(());
    }

    Err(format!(
        "{}: expected a table pack (\"tables\") or a hex atlas (\"items\")",
        file.display()
    ))
}
