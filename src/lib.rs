//! emogo library root.
//! Exposes the CLI parser, the high-level run() function, and the logging
//! core (record log, schedule, CSV export) for embedding hosts.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod platform;
pub mod storage;
pub mod ui;
pub mod utils;

use crate::core::AppContext;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use log::debug;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(&ctx.cfg.app_dir, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Mood { .. } => cli::commands::mood::handle(&cli.command, ctx),
        Commands::Vlog { .. } => cli::commands::vlog::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Next => cli::commands::next::handle(ctx),
        Commands::Export => cli::commands::export::handle(ctx),
        Commands::Schedule => cli::commands::schedule::handle(ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ app directory: --dir override or ~/.emogo
    let app_dir: PathBuf = cli
        .dir
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::default_app_dir);

    // 3️⃣ init writes the config itself
    if let Commands::Init { force } = &cli.command {
        return cli::commands::init::handle(&app_dir, *force);
    }

    // 4️⃣ load config once, wire the components
    let cfg = Config::load(&app_dir)?;
    let ctx = AppContext::new(cfg)?;

    // 5️⃣ every launch starts from an existing (possibly empty) log
    if ctx.store.ensure_initialized()? {
        debug!("data log created: {}", ctx.store.path().display());
    }

    dispatch(&cli, &ctx)
}
