use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use hw_tables::{TableCategory, TableScope};

pub fn run(category: Option<&str>, pack: Option<&Path>) -> Result<(), String> {
    let registry = super::load_registry(pack)?;
    let category = super::parse_opt(category, "table category", TableCategory::parse)?;

    let tables = match category {
        Some(category) => registry.by_category(category),
        None => registry.tables(),
    };
    if tables.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Category", "Dice", "Entries", "Scope"]);
    for t in &tables {
        table.add_row(vec![
            t.id.clone(),
            super::truncate(&t.name, 40),
            t.category.to_string(),
            t.dice_notation(),
            t.entries.len().to_string(),
            scope_label(t.scope.as_ref()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", tables.len());
    Ok(())
}

fn scope_label(scope: Option<&TableScope>) -> String {
    match scope {
        None => "-".to_string(),
        Some(TableScope::Hex { hex }) => format!("hex {hex}"),
        Some(TableScope::Dungeon { dungeon }) => format!("dungeon {dungeon}"),
        Some(TableScope::Settlement { settlement, time }) => match time {
            Some(time) => format!("{settlement} ({time})"),
            None => settlement.clone(),
        },
        Some(TableScope::FairyRoad { road }) => match road {
            Some(road) => format!("fairy road {road}"),
            None => "fairy roads".to_string(),
        },
        Some(TableScope::Unseason { unseason }) => format!("unseason {unseason}"),
        Some(TableScope::Region { region }) => region.to_string(),
        Some(TableScope::Season { season }) => season.to_string(),
    }
}
