use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use hw_core::HexId;
use hw_travel::HexAtlas;

pub fn run(atlas: &Path, hex: Option<&str>) -> Result<(), String> {
    let atlas = HexAtlas::load_file(atlas).map_err(|e| format!("{}: {e}", atlas.display()))?;
    let only = hex.map(HexId::new);
    if let Some(id) = &only
        && atlas.get(id).is_none()
    {
        return Err(format!("hex {id} is not in the atlas"));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Hex", "Id", "Name", "Category", "Dice", "Entries"]);
    let mut count = 0;
    for record in atlas.hexes() {
        if only.as_ref().is_some_and(|id| *id != record.hex_id) {
            continue;
        }
        for t in atlas.tables(&record.hex_id) {
            table.add_row(vec![
                record.hex_id.to_string(),
                t.id.clone(),
                super::truncate(&t.name, 40),
                t.category.to_string(),
                t.dice_notation(),
                t.entries.len().to_string(),
            ]);
            count += 1;
        }
    }

    if count == 0 {
        println!("  No embedded tables found.");
        return Ok(());
    }
    println!("{table}");
    println!();
    println!("  {count} tables");
    Ok(())
}
