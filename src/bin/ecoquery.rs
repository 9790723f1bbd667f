use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ecoquery::loader::{CO2_COLUMN, FOREST_CHANGE_COLUMN};
use ecoquery::{CountrySet, Direction, EngineError, Store, loader};
use ecoquery::{format, lookup, rank, resolve};

#[derive(Parser, Debug)]
#[command(
    name = "ecoquery",
    version,
    about = "Query environmental datasets (forest change and CO2 per capita)"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Annual change in forest area: a single country's value, or a ranking.
    Deforestation(QueryArgs),
    /// Annual CO2 emissions per capita: a single country's value, or the top emitters.
    Co2(QueryArgs),
    /// A country's rank by annual change in forest area, or the top entries.
    Ranking(QueryArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    /// Most negative first.
    Loss,
    /// Most positive first.
    Gain,
}

impl From<Order> for Direction {
    fn from(order: Order) -> Self {
        match order {
            Order::Loss => Direction::Loss,
            Order::Gain => Direction::Gain,
        }
    }
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Country or region name; may be omitted to list a ranking instead.
    country: Option<String>,
    /// Year to query (defaults to the most recent available year).
    #[arg(short, long)]
    year: Option<i32>,
    /// Number of results to show for list outputs.
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Ranking order for forest change.
    #[arg(long, value_enum, default_value = "loss")]
    order: Order,
    /// Include aggregates/regions (e.g., World, Africa) instead of only countries.
    #[arg(long, default_value_t = false)]
    include_aggregates: bool,
    /// Path to the directory containing the CSV datasets.
    #[arg(long, default_value = "Data")]
    data_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let out = match cli.cmd {
        Command::Deforestation(args) => cmd_deforestation(&args),
        Command::Co2(args) => cmd_co2(&args),
        Command::Ranking(args) => cmd_ranking(&args),
    };
    match out {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Engine failures collapse to their fixed user-facing strings;
            // I/O failures keep their context chain.
            match err.downcast_ref::<EngineError>() {
                Some(engine_err) => {
                    log::warn!("{engine_err}");
                    eprintln!("Error: {}", engine_err.user_message());
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::from(2)
        }
    }
}

/// Resolve a user-supplied name against the entities eligible under the
/// aggregate-inclusion flag.
fn resolve_query(
    query: &str,
    store: &Store,
    countries: &CountrySet,
    include_aggregates: bool,
) -> Result<String, EngineError> {
    let eligible = countries.filter(store.all_entities(), include_aggregates);
    resolve::resolve(query, eligible).into_entity(query)
}

fn scope_label(include_aggregates: bool) -> &'static str {
    if include_aggregates {
        "including aggregates"
    } else {
        "countries only"
    }
}

fn cmd_deforestation(args: &QueryArgs) -> Result<String> {
    let rows = loader::load_forest_change(&args.data_dir)?;
    let countries = CountrySet::from_rows(&rows);
    let store = Store::build(rows);

    if let Some(query) = &args.country {
        let entity = resolve_query(query, &store, &countries, args.include_aggregates)?;
        let result = lookup::lookup(&store, &entity, args.year)?;
        return Ok(format::format_single_value(
            &result,
            FOREST_CHANGE_COLUMN,
            "ha",
        ));
    }

    let direction = Direction::from(args.order);
    let year = match args.year {
        Some(y) => y,
        None => rank::default_year(&store, &countries, args.include_aggregates)?,
    };
    let ranked = rank::rank(&store, &countries, year, direction, args.include_aggregates)?;
    let shown = args.top.min(ranked.len());
    let title = format!(
        "Top {shown} entities for {FOREST_CHANGE_COLUMN} in {year} (order={}, {}):",
        format::direction_label(direction),
        scope_label(args.include_aggregates)
    );
    Ok(format::format_top_list(&title, &ranked[..shown], "ha"))
}

fn cmd_co2(args: &QueryArgs) -> Result<String> {
    let co2_rows = loader::load_co2(&args.data_dir)?;
    // The CO2 file has no code column; country membership comes from the
    // forest dataset.
    let forest_rows = loader::load_forest_change(&args.data_dir)?;
    let countries = CountrySet::from_rows(&forest_rows);
    let store = Store::build(co2_rows);

    if let Some(query) = &args.country {
        let entity = resolve_query(query, &store, &countries, args.include_aggregates)?;
        let result = lookup::lookup(&store, &entity, args.year)?;
        return Ok(format::format_single_value(&result, CO2_COLUMN, "t/person"));
    }

    // Top emitters always rank largest first.
    let year = match args.year {
        Some(y) => y,
        None => rank::default_year(&store, &countries, args.include_aggregates)?,
    };
    let ranked = rank::rank(
        &store,
        &countries,
        year,
        Direction::Gain,
        args.include_aggregates,
    )?;
    let shown = args.top.min(ranked.len());
    let title = format!(
        "Top {shown} entities for {CO2_COLUMN} in {year} ({}):",
        scope_label(args.include_aggregates)
    );
    Ok(format::format_top_list(&title, &ranked[..shown], "t/person"))
}

fn cmd_ranking(args: &QueryArgs) -> Result<String> {
    let rows = loader::load_forest_change(&args.data_dir)?;
    let countries = CountrySet::from_rows(&rows);
    let store = Store::build(rows);
    let direction = Direction::from(args.order);

    if let Some(query) = &args.country {
        let entity = resolve_query(query, &store, &countries, args.include_aggregates)?;
        let (entry, total) = rank::rank_for_entity(
            &store,
            &countries,
            &entity,
            args.year,
            direction,
            args.include_aggregates,
        )?;
        return Ok(format::format_rank_result(
            &entry,
            total,
            FOREST_CHANGE_COLUMN,
            "ha",
            direction,
        ));
    }

    let year = match args.year {
        Some(y) => y,
        None => rank::default_year(&store, &countries, args.include_aggregates)?,
    };
    let ranked = rank::rank(&store, &countries, year, direction, args.include_aggregates)?;
    let shown = args.top.min(ranked.len());
    let title = format!(
        "Forest change ranking for {year} (order={}, {}):",
        format::direction_label(direction),
        scope_label(args.include_aggregates)
    );
    Ok(format::format_top_list(&title, &ranked[..shown], "ha"))
}
