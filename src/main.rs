use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use foodboard::api::FoodApi;
use foodboard::config::{Config, ConfigStore};
use foodboard::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "foodboard", version, about = "Terminal dashboard for a food menu backend")]
struct Cli {
    /// Path to config file (default: ~/.config/foodboard/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the backend base URL from config
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Fetch the food list once, print the count and exit
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    let store = ConfigStore::new(config);

    if let Some(base_url) = cli.base_url {
        store.update(|config| config.api.base_url = base_url)?;
    }

    if cli.check {
        return check(&store);
    }

    foodboard::ui::run(store).context("terminal UI failed")
}

fn check(store: &ConfigStore) -> anyhow::Result<()> {
    let config = store.get();
    let api = FoodApi::new(&config.api)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let foods = runtime
        .block_on(api.list())
        .with_context(|| format!("backend check against {} failed", api.base_url()))?;
    println!("{}: {} foods", api.base_url(), foods.len());
    Ok(())
}
