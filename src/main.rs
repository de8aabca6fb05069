// src/main.rs

use clap::Parser;
use diary::cli::{Cli, Commands};
use diary::commands;
use diary::config::Config;
use diary::{DiaryStore, Result};
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.db)?;
    // Without a database there is nothing to do, so a failed open ends the run.
    let mut store = DiaryStore::open(&config.db_path)?;

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Init => commands::handle_init(&config.db_path, &mut out),
        Commands::New { message } => {
            commands::handle_new(&mut store, &config.editor, message, &mut out)
        }
        Commands::List => commands::handle_list(&store, &mut out),
        Commands::Show { id } => commands::handle_show(&store, &id, &mut out),
        Commands::Edit { id, message } => {
            commands::handle_edit(&mut store, &config.editor, &id, message, &mut out)
        }
        Commands::Del { id, yes } => {
            let mut input = io::stdin().lock();
            commands::handle_del(&mut store, &id, yes, &mut input, &mut out)
        }
    }
}
