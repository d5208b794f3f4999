use super::render::{
    print_messages, render_average, render_record, render_record_table, render_records_json,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use wats::api::{self, CmdResult, ConfigAction, WatsApi};
use wats::config::WatsConfig;
use wats::error::{Result, WatsError};
use wats::form::{AnimalForm, AnimalPatch};
use wats::store::sqlite::SqliteStore;

const DB_ENV: &str = "WATS_DB";

struct AppContext {
    api: WatsApi<SqliteStore>,
}

/// Parse arguments and dispatch. `Ok(false)` means the operation ran but reported failure.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = WatsConfig::default_dir()?;

    // These work without an open database
    match &cli.command {
        Some(Commands::Init { path }) => return handle_init(&cli, &config_dir, path.clone()),
        Some(Commands::Config { key, value }) => {
            return handle_config(&config_dir, key.clone(), value.clone())
        }
        _ => {}
    }

    let mut ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            id,
            species,
            name,
            age,
            gender,
            weight,
            health_status,
        }) => handle_add(
            &mut ctx,
            AnimalForm {
                id,
                species,
                name,
                age,
                gender,
                weight,
                health_status,
            },
        ),
        Some(Commands::Update {
            id,
            species,
            name,
            age,
            gender,
            weight,
            health_status,
        }) => handle_update(
            &mut ctx,
            id,
            AnimalPatch {
                species,
                name,
                age,
                gender,
                weight,
                health_status,
            },
        ),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Average { species }) => handle_average(&ctx, &species),
        Some(Commands::Init { .. }) | Some(Commands::Config { .. }) => Ok(true),
        None => handle_list(&ctx, false),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `--db`, then `WATS_DB`, then the configured path.
fn resolve_database(cli: &Cli, config_dir: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = &cli.db {
        return Ok(Some(path.clone()));
    }
    if let Some(path) = std::env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
        return Ok(Some(PathBuf::from(path)));
    }
    Ok(WatsConfig::load(config_dir)?.database_path)
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let path = resolve_database(cli, config_dir)?.ok_or_else(|| {
        WatsError::Api(
            "No database selected. Use --db <PATH>, set WATS_DB, or run `wats init <PATH>`"
                .to_string(),
        )
    })?;
    debug!(path = %path.display(), "using database");

    let store = SqliteStore::new(path);
    // Fail up front on a missing or unusable file
    drop(store.connect()?);

    Ok(AppContext {
        api: WatsApi::new(store),
    })
}

fn finish(result: &CmdResult) -> Result<bool> {
    print_messages(&result.messages);
    Ok(result.is_success())
}

fn handle_init(cli: &Cli, config_dir: &Path, path: Option<PathBuf>) -> Result<bool> {
    let remember = path.is_some();
    let target = match path {
        Some(p) => p,
        None => resolve_database(cli, config_dir)?.ok_or_else(|| {
            WatsError::Api("No database path given. Use `wats init <PATH>`".to_string())
        })?,
    };

    let result = api::init(&target);
    if remember {
        if let Some(db) = &result.database {
            let absolute = std::path::absolute(db).unwrap_or_else(|_| db.clone());
            let mut config = WatsConfig::load(config_dir)?;
            config.database_path = Some(absolute);
            config.save(config_dir)?;
        }
    }
    finish(&result)
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<bool> {
    let result = ctx.api.list_all();
    if result.is_success() {
        if json {
            print!("{}", render_records_json(&result.listed_records)?);
        } else {
            print!("{}", render_record_table(&result.listed_records));
        }
    }
    finish(&result)
}

fn handle_show(ctx: &AppContext, id: i32) -> Result<bool> {
    let result = ctx.api.get_by_id(id);
    for record in &result.listed_records {
        print!("{}", render_record(record));
    }
    finish(&result)
}

fn handle_add(ctx: &mut AppContext, form: AnimalForm) -> Result<bool> {
    let result = ctx.api.add_from_form(form);
    finish(&result)
}

fn handle_update(ctx: &mut AppContext, id: i32, patch: AnimalPatch) -> Result<bool> {
    let result = ctx.api.update_from_patch(id, &patch);
    finish(&result)
}

fn handle_delete(ctx: &mut AppContext, id: i32, yes: bool) -> Result<bool> {
    if !yes && std::io::stdin().is_terminal() && !confirm_delete(id)? {
        println!("Delete cancelled.");
        return Ok(true);
    }
    let result = ctx.api.delete(id);
    finish(&result)
}

fn confirm_delete(id: i32) -> Result<bool> {
    print!("Are you sure you want to delete the animal with Tag ID {}? [y/N] ", id);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

fn handle_average(ctx: &AppContext, species: &str) -> Result<bool> {
    let species = species.trim();
    if species.is_empty() {
        return Err(WatsError::validation("Species cannot be empty"));
    }

    let result = ctx.api.average_weight(species);
    if let Some(average) = &result.average {
        print!("{}", render_average(average));
    }
    finish(&result)
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(config_dir, action);
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in WatsConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    finish(&result)
}
