use std::path::Path;

use colored::Colorize;
use hw_tables::RollContext;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(
    table_id: &str,
    modifier: i32,
    times: u32,
    seed: u64,
    pack: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let registry = super::load_registry(pack)?;
    let context = RollContext::new().with_modifier(modifier);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut results = Vec::new();
    for _ in 0..times.max(1) {
        let result = registry
            .roll_by_id(table_id, &context, &mut rng)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| format!("no table named '{table_id}' (see `hw tables`)"))?;
        results.push(result);
    }

    if json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for result in &results {
        println!("  {}", result.describe().bold());
        if let Some(effect) = &result.leaf().entry.mechanical_effect {
            println!("    {}", effect.dimmed());
        }
        let monsters = result.monster_refs();
        if !monsters.is_empty() {
            println!("    monsters: {}", monsters.join(", "));
        }
        if let Some(missing) = &result.unresolved_sub_table {
            println!("    {} {missing}", "missing table:".yellow());
        }
    }
    Ok(())
}
