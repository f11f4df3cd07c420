use std::sync::Arc;

use anyhow::Result;
use bot::{Data, config::Config, health, registry::ChannelRegistry, scheduler, tracker::MessageTracker};
use garden::StockClient;
use serenity::all::{ClientBuilder, GatewayIntents};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod gateway;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let data = Arc::new(Data {
        stock_api: Arc::new(StockClient::from_env()),
        channels: Arc::new(ChannelRegistry::new()),
        last_messages: Arc::new(MessageTracker::new()),
    });

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(port).await {
            error!(error = ?e, "liveness endpoint failed");
        }
    });

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let mut client = ClientBuilder::new(&config.discord_token, intents)
        .event_handler(gateway::Handler {
            data: Arc::clone(&data),
        })
        .await
        .expect("Err creating client");

    let notifier = Arc::new(data.notifier(client.http.clone()));
    scheduler::start(notifier);

    tokio::spawn(async move {
        if let Err(why) = client.start().await {
            error!("Client error: {why:?}");
        }
    });

    shutdown_signal().await;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::{
            select,
            signal::unix::{SignalKind, signal},
        };
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
        select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
