//! # Stockroom Library
//!
//! Application layer of the inventory manager: startup, state and the
//! commands the presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! stockroom_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Argument parsing, table rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database + seeder
//! │   ├── catalog.rs  ◄─── CatalogView (cached, filtered, paged)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── product.rs  ◄─── Add/edit/delete, search, paging
//! └── error.rs        ◄─── CatalogError and ApiError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{render_table, Cli, Command};
use commands::product::{self, PageDto};
use error::{ApiError, CatalogError};
use state::{CatalogView, ConfigState, DbState};
use stockroom_core::{ProductForm, ValidationError};
use stockroom_db::{DbConfig, SeedOutcome};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,stockroom=debug,sqlx=warn";

/// Opens the store, seeds it if empty and loads the catalog.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  2. Seed If Empty ────────────────────────────────────────────────────► │
/// │     • 1000 sample products in one transaction                           │
/// │     • Skipped when the store already holds records                      │
/// │                                                                         │
/// │  3. Refresh ──────────────────────────────────────────────────────────► │
/// │     • Load every product, newest first                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn startup(db_config: DbConfig) -> Result<(DbState, CatalogView), CatalogError> {
    let db = stockroom_db::Database::new(db_config).await?;
    info!("Database connected and migrations applied");

    let db_state = DbState::new(db);
    match db_state.seeder().seed_if_empty().await? {
        SeedOutcome::Seeded(count) => info!(count, "First run: sample products created"),
        SeedOutcome::AlreadyPopulated(count) => info!(count, "Existing products found"),
        SeedOutcome::InFlight => info!("Seeding already running"),
    }

    let view = CatalogView::load(db_state.inner().products()).await?;
    Ok((db_state, view))
}

/// What one CLI invocation produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub page: PageDto,
}

/// Applies one command to the catalog.
pub async fn execute(view: &mut CatalogView, command: Command) -> Result<Output, ApiError> {
    let notice = match command {
        Command::List { page, search } => {
            if let Some(query) = search {
                product::on_search_input(view, query);
            }
            // Only pages the pager could offer; an empty result still has page 1
            let last = view.page_count().max(1);
            if page == 0 || page > last {
                return Err(ValidationError::OutOfRange {
                    field: "page".to_string(),
                    min: 1,
                    max: last as i64,
                }
                .into());
            }
            product::on_page_request(view, page);
            None
        }
        Command::Add {
            name,
            price,
            quantity,
        } => {
            let added =
                product::on_add_submit(view, ProductForm::new(name, price, quantity)).await?;
            Some(format!("Added product #{}", added.id))
        }
        Command::Edit {
            id,
            name,
            price,
            quantity,
        } => {
            product::on_edit_submit(view, id, ProductForm::new(name, price, quantity)).await?;
            Some(format!("Updated product #{}", id))
        }
        Command::Delete { id } => {
            product::on_delete_request(view, id).await?;
            Some(format!("Deleted product #{}", id))
        }
    };

    Ok(Output {
        notice,
        page: product::current_page(view),
    })
}

/// Runs the CLI and returns the text to print.
pub async fn run(cli: Cli) -> Result<String, ApiError> {
    let mut config = ConfigState::from_env();
    if let Some(path) = cli.db {
        config.database_path = Some(path);
    }

    let db_path = config
        .resolve_database_path()
        .map_err(|e| ApiError::internal(format!("Database path unavailable: {}", e)))?;
    info!(?db_path, "Database path determined");

    let (db_state, mut view) = startup(DbConfig::new(db_path)).await?;
    let result = execute(&mut view, cli.command.unwrap_or_default()).await;
    db_state.inner().close().await;
    let output = result?;

    if cli.json {
        return serde_json::to_string_pretty(&output)
            .map_err(|e| ApiError::internal(e.to_string()));
    }

    let table = render_table(&output.page, &config);
    Ok(match output.notice {
        Some(notice) => format!("{}\n\n{}", notice, table),
        None => table,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=trace` - Show trace for the database crate only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr so stdout carries only the table or JSON.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
