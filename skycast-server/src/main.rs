//! Binary crate for the `skycast-server` proxy endpoint.

use clap::Parser;
use skycast_core::{
    ApiKeySource, WeatherProvider,
    provider::{API_KEY_ENV, openweather::OpenWeatherClient},
};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "skycast-server", version, about = "Skycast weather proxy endpoint")]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    // The credential is resolved per request, so a key exported after
    // startup is picked up without a restart. Warn early anyway.
    if ApiKeySource::env_default().resolve().is_none() {
        log::warn!("{API_KEY_ENV} is not set; weather requests will fail until it is");
    }

    let provider: Arc<dyn WeatherProvider> =
        Arc::new(OpenWeatherClient::new(ApiKeySource::env_default()));

    skycast_server::http::run_http_server(provider, &args.bind, args.port).await
}
