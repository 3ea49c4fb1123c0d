//! Entry point for the notes terminal client.

mod api;
mod app;
mod config;
mod error;
mod events;
mod session;
mod state;
mod ui;
mod utils;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("notes-tui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal user interface for a personal notes service")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("DIR")
                .help("Directory containing the configuration file"),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .takes_value(true)
                .value_name("URL")
                .help("Base URL of the notes service, overriding the configured one"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.api_base_url = api_url.to_string();
    }

    App::start(config).await
}
