use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use hw_core::{HexId, Season, TimeOfDay, Unseason, UnseasonState, Weather};
use hw_encounter::EncounterSelector;
use hw_travel::state::DAYS_BEFORE_REST;
use hw_travel::{
    Conveyance, DaySummary, GameController, HexAtlas, SessionController, TravelConditions,
    TravelConfig, TravelEngine, TravelSegmentResult,
};
use tracing::{debug, info};

#[derive(Args)]
pub struct TravelArgs {
    /// Hex atlas JSON file
    #[arg(short, long)]
    atlas: PathBuf,

    /// Hex the party sets out from
    #[arg(long)]
    from: String,

    /// Hexes to enter, in order
    #[arg(required = true)]
    route: Vec<String>,

    /// on_foot, mounted or vehicle
    #[arg(long, default_value = "on_foot")]
    conveyance: String,

    /// Base speed override in feet
    #[arg(long)]
    speed: Option<u32>,

    /// The party has a guide
    #[arg(long)]
    guide: bool,

    /// The party has a map
    #[arg(long)]
    map: bool,

    /// Force-march every day
    #[arg(long)]
    forced: bool,

    /// Weather for the whole trip, or "roll" for a fresh draw each day
    #[arg(long, default_value = "clear")]
    weather: String,

    /// Time of day
    #[arg(long, default_value = "day")]
    time: String,

    /// Calendar season
    #[arg(long, default_value = "spring")]
    season: String,

    /// Unseason in force when the party sets out
    #[arg(long)]
    unseason: Option<String>,

    /// How many days the unseason lasts
    #[arg(long, default_value = "7")]
    unseason_days: u32,

    /// Give up after this many days
    #[arg(long, default_value = "30")]
    max_days: u32,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Extra JSON table pack to load
    #[arg(short, long)]
    pack: Option<PathBuf>,

    /// Print every segment as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: &TravelArgs) -> Result<(), String> {
    let atlas = HexAtlas::load_file(&args.atlas)
        .map_err(|e| format!("{}: {e}", args.atlas.display()))?;
    let registry = super::load_registry(args.pack.as_deref())?;

    let mut unseason = UnseasonState::default();
    if let Some(u) = super::parse_opt(args.unseason.as_deref(), "unseason", Unseason::parse)? {
        unseason.start(u, args.unseason_days);
    }
    let weather = if rolls_weather(args) {
        Weather::Clear
    } else {
        super::parse_named(&args.weather, "weather", Weather::parse)?
    };
    let conditions = TravelConditions {
        weather,
        season: super::parse_named(&args.season, "season", Season::parse)?,
        unseason: unseason.active,
        time_of_day: super::parse_named(&args.time, "time of day", TimeOfDay::parse)?,
        ..TravelConditions::default()
    };

    let mut config = TravelConfig::default()
        .with_seed(args.seed)
        .with_conveyance(super::parse_named(
            &args.conveyance,
            "conveyance",
            Conveyance::parse,
        )?)
        .with_guide(args.guide)
        .with_map(args.map);
    if let Some(speed) = args.speed {
        config = config.with_base_speed(speed);
    }

    let controller = SessionController::at(HexId::new(&args.from)).with_conditions(conditions);
    let mut engine = TravelEngine::seeded(
        controller,
        Box::new(atlas),
        EncounterSelector::new(registry),
        config,
    );

    info!(
        from = %args.from,
        hexes = args.route.len(),
        seed = args.seed,
        "setting out"
    );
    let mut log = Vec::new();
    let mut days = 1;
    begin_day(&mut engine, args, days)?;

    for dest in args.route.iter().map(HexId::new) {
        loop {
            if engine.day().is_none_or(|d| d.travel_points_remaining == 0) {
                if let Some(summary) = engine.end_travel_day() {
                    report_day(&summary, args.json);
                }
                if days >= args.max_days {
                    return Err(format!("route not finished after {days} days"));
                }
                if engine
                    .last_day()
                    .is_some_and(|d| d.days_since_rest >= DAYS_BEFORE_REST)
                {
                    engine.rest_day();
                    days += 1;
                    if !args.json {
                        println!("{}", format!("Day {days}: rest").bold());
                    }
                }
                if let Some(ended) = unseason.advance_day()
                    && !args.json
                {
                    println!("  {}", format!("the {ended} unseason ends").cyan());
                }
                engine.controller_mut().conditions.unseason = unseason.active;
                days += 1;
                begin_day(&mut engine, args, days)?;
            }

            let from = engine.controller().party_location();
            let result = engine
                .travel_to_hex(&dest, None)
                .map_err(|e| e.to_string())?;
            if !args.json {
                report_segment(from.as_ref(), &result);
            }
            if !result.success {
                debug!(hex = %dest, reason = ?result.reason, "segment refused");
                return Err(result
                    .reason
                    .unwrap_or_else(|| format!("cannot enter {dest}")));
            }
            let arrived = result.arrived() && !result.encounter_occurred;
            if result.encounter_occurred {
                // The encounter is settled on the spot and the party presses on.
                engine.controller_mut().resume_travel();
            }
            log.push(result);
            if arrived {
                break;
            }
        }
    }

    if let Some(summary) = engine.end_travel_day() {
        report_day(&summary, args.json);
    }
    info!(
        days,
        segments = log.len(),
        explored = engine.explored_hexes().len(),
        "route finished"
    );
    if args.json {
        let out = serde_json::to_string_pretty(&log).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        let here = engine
            .controller()
            .party_location()
            .map_or_else(|| "-".to_string(), |h| h.to_string());
        println!();
        println!(
            "  {} days, {} hexes explored, party at {}",
            days,
            engine.explored_hexes().len(),
            here.bold()
        );
    }
    Ok(())
}

fn rolls_weather(args: &TravelArgs) -> bool {
    args.weather.eq_ignore_ascii_case("roll")
}

fn begin_day<R: hw_tables::RollSource>(
    engine: &mut TravelEngine<SessionController, R>,
    args: &TravelArgs,
    day_number: u32,
) -> Result<(), String> {
    let weather = if rolls_weather(args) {
        engine.roll_weather().map_err(|e| e.to_string())?
    } else {
        None
    };
    let day = engine.start_travel_day(args.forced);
    if args.json {
        return Ok(());
    }
    let forced = if day.is_forced_march { ", forced march" } else { "" };
    println!(
        "{}",
        format!("Day {day_number}: {} travel points{forced}", day.travel_points_max).bold()
    );
    if let Some(weather) = weather {
        println!("  weather: {weather}");
    }
    for warning in &day.warnings {
        println!("  {} {warning}", "!".red());
    }
    Ok(())
}

fn report_segment(from: Option<&HexId>, r: &TravelSegmentResult) {
    let from = from.map_or_else(|| "?".to_string(), |h| h.to_string());
    let landed = match &r.actual_hex {
        Some(hex) if *hex != r.destination_hex => format!(" (ended in {hex})"),
        Some(_) => String::new(),
        None => " (partway)".to_string(),
    };
    let nav = r
        .navigation
        .as_ref()
        .map_or_else(String::new, |n| format!(" [{n}]"));
    println!(
        "  {from} -> {}{landed}: {} spent, {} left{nav}",
        r.destination_hex, r.travel_points_spent, r.travel_points_remaining
    );
    for line in &r.flavor {
        println!("    {}", line.dimmed());
    }
    for hazard in &r.hazards {
        println!("    {} {} ({} damage)", "!".red(), hazard.description, hazard.damage);
    }
    for warning in &r.warnings {
        println!("    {} {warning}", "!".yellow());
    }
    for message in &r.messages {
        if r.encounter_occurred && message.starts_with("Encounter") {
            println!("    {}", message.yellow().bold());
        } else {
            println!("    {message}");
        }
    }
    if r.trapped_in_maze {
        println!("    {}", "trapped in a maze".red());
    }
    if r.first_visit {
        println!("    {}", "new hex explored".green());
    }
}

fn report_day(summary: &DaySummary, json: bool) {
    if json {
        return;
    }
    let hexes: Vec<String> = summary.hexes_entered.iter().map(|h| h.to_string()).collect();
    println!(
        "  end of day: {}/{} points used, {} encounter(s), entered {}",
        summary.travel_points_spent,
        summary.travel_points_max,
        summary.encounters,
        if hexes.is_empty() { "nothing".to_string() } else { hexes.join(", ") }
    );
}
