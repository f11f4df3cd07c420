use std::sync::Arc;

use garden::StockClient;
use serenity::all::Http;

pub mod alert;
pub mod config;
pub mod health;
pub mod messenger;
pub mod notify;
pub mod registry;
pub mod scheduler;
pub mod tracker;

use messenger::DiscordMessenger;
use notify::Notifier;
use registry::ChannelRegistry;
use tracker::MessageTracker;

/// Shared state wired together at startup and handed to the gateway
/// handler and the scheduler. The registry and tracker are the only
/// mutable pieces; both are internally synchronized.
pub struct Data {
    pub stock_api: Arc<StockClient>,
    pub channels: Arc<ChannelRegistry>,
    pub last_messages: Arc<MessageTracker>,
}

impl Data {
    pub fn notifier(&self, http: Arc<Http>) -> Notifier {
        Notifier::new(
            Arc::new(DiscordMessenger::new(http)),
            Arc::clone(&self.stock_api),
            Arc::clone(&self.channels),
            Arc::clone(&self.last_messages),
        )
    }
}

pub type Error = anyhow::Error;
