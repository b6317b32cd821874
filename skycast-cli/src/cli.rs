use anyhow::anyhow;
use clap::{Parser, Subcommand};
use skycast_core::{Config, suggest};

use crate::{client::ProxyClient, dash, display};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Skycast weather dashboard")]
pub struct Cli {
    /// Proxy endpoint URL; overrides the configured default.
    #[arg(long)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive dashboard: autocomplete search and recent-search history.
    Dash,

    /// One-shot weather lookup for a city.
    Show {
        /// City name.
        city: String,
    },

    /// Print ranked autocomplete suggestions for a query.
    Suggest {
        /// Free-text query, at least two characters.
        query: String,
    },

    /// Persist a proxy endpoint URL as the default.
    SetServer {
        /// e.g. "http://weather.lan:3000".
        url: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        let server = self
            .server
            .unwrap_or_else(|| config.server_url().to_string());

        match self.command {
            Command::Dash => dash::run(&server).await,
            Command::Show { city } => {
                let client = ProxyClient::new(server);
                let data = client.get_weather(&city).await.map_err(|err| anyhow!("{err}"))?;
                print!("{}", display::render(&data));
                Ok(())
            }
            Command::Suggest { query } => {
                for city in suggest::suggest(&query) {
                    println!("{city}");
                }
                Ok(())
            }
            Command::SetServer { url } => {
                config.set_server_url(url);
                config.save()?;
                println!(
                    "Saved default server to {}",
                    Config::config_file_path()?.display()
                );
                Ok(())
            }
        }
    }
}
