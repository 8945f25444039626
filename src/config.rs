use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;
use reqwest::Url;

/// Terminal UI for hashtag-based job search.
#[derive(Debug, Clone, Parser)]
#[command(name = "jds", version, about)]
pub struct Config {
    /// Base URL of the job discovery API
    #[arg(long, env = "JDS_API_URL", default_value = "http://localhost:8000")]
    pub api_url: Url,

    /// Directory the log file is written to [default: <cache dir>/jds]
    #[arg(long, env = "JDS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Skip querying the API health endpoint on startup
    #[arg(long)]
    pub no_health_check: bool,

    /// Comma separated hashtags to search for right away
    pub hashtags: Option<String>,
}

impl Config {
    pub fn log_dir(&self) -> eyre::Result<PathBuf> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }

        let cache_dir =
            dirs::cache_dir().ok_or_else(|| eyre::eyre!("Could not find cache directory"))?;

        Ok(cache_dir.join("jds"))
    }
}
