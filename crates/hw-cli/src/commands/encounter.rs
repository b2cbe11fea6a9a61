use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use hw_core::{HexId, Region, TerrainKind, TimeOfDay, Unseason, Weather};
use hw_encounter::{EncounterContext, EncounterRoll, EncounterSelector, generate_encounter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

#[derive(Args)]
pub struct EncounterArgs {
    /// Region the party is in (e.g. nagwood, "Hag's Addle")
    #[arg(short, long)]
    region: Option<String>,

    /// Terrain of the hex
    #[arg(short, long)]
    terrain: Option<String>,

    /// Hex the party is in
    #[arg(long)]
    hex: Option<String>,

    /// Time of day
    #[arg(long, default_value = "day")]
    time: String,

    /// Settlement the party is in
    #[arg(long)]
    settlement: Option<String>,

    /// Travelling a fairy road, optionally naming it
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    fairy_road: Option<String>,

    /// Unseason in force (chame, vague, hitching, colliggwyld)
    #[arg(long)]
    unseason: Option<String>,

    /// Current weather
    #[arg(long)]
    weather: Option<String>,

    /// The party has a fire going
    #[arg(long)]
    fire: bool,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Extra JSON table pack to load
    #[arg(short, long)]
    pack: Option<PathBuf>,

    /// Print the encounter as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: &EncounterArgs) -> Result<(), String> {
    let registry = super::load_registry(args.pack.as_deref())?;
    let ctx = build_context(args)?;
    debug!(
        region = ?ctx.region,
        terrain = ?ctx.terrain,
        settlement = ?ctx.settlement,
        time = %ctx.time_of_day,
        "encounter context"
    );
    let selector = EncounterSelector::new(registry);
    let mut rng = StdRng::seed_from_u64(args.seed);

    let selected = match selector
        .select_and_roll(&ctx, &mut rng)
        .map_err(|e| e.to_string())?
    {
        EncounterRoll::Rolled(selected) => selected,
        EncounterRoll::NoTableAvailable => {
            info!("no encounter table fits");
            if args.json {
                println!("null");
            } else {
                println!("  No encounter table fits this situation.");
            }
            return Ok(());
        }
    };
    let encounter = generate_encounter(&selected, ctx.terrain, ctx.hex.clone(), &mut rng);
    info!(
        level = %encounter.level,
        table = %encounter.table_id,
        surprise = %encounter.surprise,
        "encounter rolled"
    );

    if args.json {
        let out = serde_json::to_string_pretty(&encounter).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}", encounter.description.bold());
    println!("    level:     {} ({})", encounter.level, encounter.table_id);
    if let Some(n) = encounter.number_appearing {
        println!("    number:    {n}");
    }
    println!("    distance:  {} ft", encounter.distance_feet);
    println!("    activity:  {}", encounter.activity);
    let surprise = encounter.surprise.to_string();
    if encounter.is_surprise() {
        println!("    surprise:  {}", surprise.yellow());
    } else {
        println!("    surprise:  {surprise}");
    }
    if !encounter.monster_refs.is_empty() {
        println!("    monsters:  {}", encounter.monster_refs.join(", "));
    }
    Ok(())
}

fn build_context(args: &EncounterArgs) -> Result<EncounterContext, String> {
    let time = super::parse_named(&args.time, "time of day", TimeOfDay::parse)?;
    let mut ctx = match &args.settlement {
        Some(settlement) => EncounterContext::in_settlement(settlement.to_lowercase(), time),
        None => EncounterContext::wilderness(time),
    };

    if let Some(region) = super::parse_opt(args.region.as_deref(), "region", Region::parse)? {
        ctx = ctx.with_region(region);
    }
    if let Some(terrain) =
        super::parse_opt(args.terrain.as_deref(), "terrain", TerrainKind::parse)?
    {
        ctx = ctx.with_terrain(terrain).with_road(terrain.is_road());
    }
    if let Some(weather) = super::parse_opt(args.weather.as_deref(), "weather", Weather::parse)? {
        ctx = ctx.with_weather(weather);
    }
    if let Some(unseason) =
        super::parse_opt(args.unseason.as_deref(), "unseason", Unseason::parse)?
    {
        ctx = ctx.with_unseason(unseason);
    }
    if let Some(road) = &args.fairy_road {
        ctx = ctx.on_fairy_road((!road.is_empty()).then(|| road.clone()));
    }
    if let Some(hex) = &args.hex {
        ctx = ctx.with_hex(HexId::new(hex));
    }
    Ok(ctx.with_fire(args.fire))
}
