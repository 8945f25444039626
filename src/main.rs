use clap::Parser;
use color_eyre::eyre;

use crate::api::JobsClient;
use crate::app::App;
use crate::config::Config;

pub mod api;
pub mod app;
pub mod buffers;
pub mod config;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod query;
pub mod state;
#[cfg(test)]
mod testing;
pub mod widgets;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = Config::parse();
    let _log_guard = logging::init(&config)?;

    tracing::info!(api_url = %config.api_url, "starting jds");

    let client = JobsClient::new(&config.api_url);
    let terminal = ratatui::init();

    let app = App::new(client, &config);
    let result = app.run(terminal).await;

    ratatui::restore();

    result
}
